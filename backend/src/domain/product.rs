//! Products, their images, and the in-memory join between them.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;

use super::UserId;

/// Store-assigned product identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(i64);

impl ProductId {
    /// Wrap a raw store identity.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw value as stored.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Listing details supplied by a lender when creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListing {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub lender_id: UserId,
    pub category: Option<String>,
    pub value: Option<f64>,
    pub condition: Option<String>,
}

/// Product row about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Option<String>,
    pub value: Option<f64>,
    pub condition: Option<String>,
    pub availability: bool,
    pub lender_id: UserId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ProductListing {
    /// Split the listing into the product row and the image URLs to attach.
    ///
    /// New products are always available.
    #[must_use]
    pub fn into_parts(self) -> (NewProduct, Vec<String>) {
        let Self {
            name,
            description,
            price,
            images,
            start_date,
            end_date,
            lender_id,
            category,
            value,
            condition,
        } = self;
        let product = NewProduct {
            name,
            description,
            price,
            category,
            value,
            condition,
            availability: true,
            lender_id,
            start_date,
            end_date,
        };
        (product, images)
    }
}

/// Product row as returned by the store.
///
/// `description` and the dates are nullable in the store; rows written by
/// this service always carry them.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub value: Option<f64>,
    pub condition: Option<String>,
    pub availability: bool,
    pub lender_id: UserId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Image row about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductImage {
    pub product_id: ProductId,
    pub image_url: String,
}

/// Image row as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    pub image_id: i64,
    pub product_id: ProductId,
    pub image_url: String,
}

/// A product together with its image URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub product: Product,
    pub images: Vec<String>,
}

/// Join products to their images by `product_id`.
///
/// Every product appears exactly once, in store order. Image URLs keep the
/// order in which the store returned their rows; images whose product is
/// absent from `products` are dropped.
///
/// # Examples
/// ```
/// use tradebridge::domain::{attach_images, ProductImage, ProductId};
///
/// let items = attach_images(Vec::new(), vec![ProductImage {
///     image_id: 1,
///     product_id: ProductId::new(9),
///     image_url: "https://cdn.example/orphan.png".to_owned(),
/// }]);
/// assert!(items.is_empty());
/// ```
#[must_use]
pub fn attach_images(products: Vec<Product>, images: Vec<ProductImage>) -> Vec<Item> {
    let mut by_product: HashMap<ProductId, Vec<String>> = HashMap::new();
    for image in images {
        by_product
            .entry(image.product_id)
            .or_default()
            .push(image.image_url);
    }

    products
        .into_iter()
        .map(|product| {
            let images = by_product
                .get(&product.product_id)
                .cloned()
                .unwrap_or_default();
            Item { product, images }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn product(id: i64) -> Product {
        Product {
            product_id: ProductId::new(id),
            name: format!("product {id}"),
            description: Some("drill".to_owned()),
            price: 12.5,
            category: None,
            value: None,
            condition: None,
            availability: true,
            lender_id: UserId::new(1),
            start_date: None,
            end_date: None,
        }
    }

    fn image(image_id: i64, product_id: i64, url: &str) -> ProductImage {
        ProductImage {
            image_id,
            product_id: ProductId::new(product_id),
            image_url: url.to_owned(),
        }
    }

    #[fixture]
    fn listing() -> ProductListing {
        ProductListing {
            name: "Cordless drill".to_owned(),
            description: "18V with two batteries".to_owned(),
            price: 15.0,
            images: vec!["a.png".to_owned(), "b.png".to_owned()],
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 9).expect("valid date"),
            lender_id: UserId::new(4),
            category: Some("tools".to_owned()),
            value: None,
            condition: Some("good".to_owned()),
        }
    }

    #[rstest]
    fn into_parts_defaults_availability(listing: ProductListing) {
        let (product, images) = listing.into_parts();
        assert!(product.availability);
        assert_eq!(product.lender_id, UserId::new(4));
        assert_eq!(images, vec!["a.png".to_owned(), "b.png".to_owned()]);
    }

    #[test]
    fn attaches_images_to_matching_products_only() {
        let items = attach_images(
            vec![product(1), product(2), product(3)],
            vec![
                image(10, 2, "two-a.png"),
                image(11, 1, "one-a.png"),
                image(12, 2, "two-b.png"),
            ],
        );

        let summary: Vec<(i64, Vec<&str>)> = items
            .iter()
            .map(|item| {
                (
                    item.product.product_id.get(),
                    item.images.iter().map(String::as_str).collect(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, vec!["one-a.png"]),
                (2, vec!["two-a.png", "two-b.png"]),
                (3, vec![]),
            ]
        );
    }

    #[test]
    fn empty_inputs_produce_no_items() {
        assert!(attach_images(Vec::new(), Vec::new()).is_empty());
    }
}
