//! Tests for the item catalogue service.

use super::*;
use crate::domain::ports::MockProductRepository;
use crate::domain::{ErrorCode, NewProduct, ProductId, ProductImage, UserId};
use chrono::NaiveDate;
use rstest::{fixture, rstest};

fn stored(product: &NewProduct, id: i64) -> Product {
    Product {
        product_id: ProductId::new(id),
        name: product.name.clone(),
        description: Some(product.description.clone()),
        price: product.price,
        category: product.category.clone(),
        value: product.value,
        condition: product.condition.clone(),
        availability: product.availability,
        lender_id: product.lender_id,
        start_date: Some(product.start_date),
        end_date: Some(product.end_date),
    }
}

fn listing_with(images: &[&str]) -> ProductListing {
    ProductListing {
        name: "Camping tent".to_owned(),
        description: "Four person, waterproof".to_owned(),
        price: 20.0,
        images: images.iter().map(|url| (*url).to_owned()).collect(),
        start_date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 14).expect("valid date"),
        lender_id: UserId::new(42),
        category: Some("outdoors".to_owned()),
        value: Some(180.0),
        condition: None,
    }
}

#[fixture]
fn three_images() -> ProductListing {
    listing_with(&["front.png", "side.png", "packed.png"])
}

fn service(repo: MockProductRepository) -> ItemCatalogueService<MockProductRepository> {
    ItemCatalogueService::new(Arc::new(repo))
}

#[rstest]
#[tokio::test]
async fn create_item_inserts_one_image_per_url_in_order(three_images: ProductListing) {
    let mut repo = MockProductRepository::new();
    repo.expect_insert_product()
        .withf(|product| product.availability && product.lender_id == UserId::new(42))
        .times(1)
        .returning(|product| Ok(stored(product, 7)));
    let mut seq = mockall::Sequence::new();
    for url in ["front.png", "side.png", "packed.png"] {
        repo.expect_insert_image()
            .withf(move |image| image.product_id == ProductId::new(7) && image.image_url == url)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|image| {
                Ok(ProductImage {
                    image_id: 1,
                    product_id: image.product_id,
                    image_url: image.image_url.clone(),
                })
            });
    }
    repo.expect_delete_product().never();

    let item = service(repo)
        .create_item(three_images)
        .await
        .expect("item created");

    assert_eq!(item.product.product_id, ProductId::new(7));
    assert_eq!(item.images, vec!["front.png", "side.png", "packed.png"]);
}

#[tokio::test]
async fn create_item_without_images_only_inserts_the_product() {
    let mut repo = MockProductRepository::new();
    repo.expect_insert_product()
        .times(1)
        .returning(|product| Ok(stored(product, 1)));
    repo.expect_insert_image().never();

    let item = service(repo)
        .create_item(listing_with(&[]))
        .await
        .expect("item created");

    assert!(item.images.is_empty());
}

#[tokio::test]
async fn create_item_surfaces_product_insert_failure() {
    let mut repo = MockProductRepository::new();
    repo.expect_insert_product().times(1).returning(|_| {
        Err(ProductPersistenceError::query(
            "insert or update on table \"products\" violates foreign key constraint",
        ))
    });
    repo.expect_insert_image().never();

    let err = service(repo)
        .create_item(listing_with(&["a.png"]))
        .await
        .expect_err("product insert fails");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert!(err.message().contains("foreign key"));
}

#[rstest]
#[case::rolled_back(Ok(()), true)]
#[case::left_behind(Err(ProductPersistenceError::connection("reset by peer")), false)]
#[tokio::test]
async fn create_item_compensates_when_an_image_insert_fails(
    three_images: ProductListing,
    #[case] delete_outcome: Result<(), ProductPersistenceError>,
    #[case] rolled_back: bool,
) {
    let mut repo = MockProductRepository::new();
    repo.expect_insert_product()
        .times(1)
        .returning(|product| Ok(stored(product, 11)));
    repo.expect_insert_image()
        .withf(|image| image.image_url == "front.png")
        .times(1)
        .returning(|image| {
            Ok(ProductImage {
                image_id: 1,
                product_id: image.product_id,
                image_url: image.image_url.clone(),
            })
        });
    repo.expect_insert_image()
        .withf(|image| image.image_url == "side.png")
        .times(1)
        .returning(|_| Err(ProductPersistenceError::query("value too long for type")));
    repo.expect_delete_product()
        .withf(|id| *id == ProductId::new(11))
        .times(1)
        .return_once(move |_| delete_outcome);

    let err = service(repo)
        .create_item(three_images)
        .await
        .expect_err("image insert fails");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "value too long for type");
    let details = err.details().expect("details present");
    assert_eq!(details["productId"], 11);
    assert_eq!(details["imagesRequested"], 3);
    assert_eq!(details["imagesInserted"], 1);
    assert_eq!(details["rolledBack"], rolled_back);
}

#[tokio::test]
async fn list_items_joins_images_onto_products() {
    let base = listing_with(&[]).into_parts().0;
    let mut repo = MockProductRepository::new();
    repo.expect_list_products()
        .times(1)
        .return_once(move || Ok(vec![stored(&base, 1), stored(&base, 2)]));
    repo.expect_list_images().times(1).return_once(|| {
        Ok(vec![
            ProductImage {
                image_id: 5,
                product_id: ProductId::new(2),
                image_url: "two.png".to_owned(),
            },
            ProductImage {
                image_id: 6,
                product_id: ProductId::new(99),
                image_url: "orphan.png".to_owned(),
            },
        ])
    });

    let items = service(repo).list_items().await.expect("items listed");

    assert_eq!(items.len(), 2);
    assert!(items[0].images.is_empty());
    assert_eq!(items[1].images, vec!["two.png"]);
}

#[tokio::test]
async fn list_items_fails_when_images_cannot_be_read() {
    let mut repo = MockProductRepository::new();
    repo.expect_list_products()
        .times(1)
        .return_once(|| Ok(Vec::new()));
    repo.expect_list_images()
        .times(1)
        .return_once(|| Err(ProductPersistenceError::connection("timed out")));

    let err = service(repo).list_items().await.expect_err("images fail");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "timed out");
}
