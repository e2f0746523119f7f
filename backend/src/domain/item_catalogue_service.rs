//! Item catalogue service: the product/image fan-out write and the
//! products-with-images fan-in read.
//!
//! The store offers no transaction across the product insert and the image
//! inserts. When an image insert fails the service deletes what it wrote
//! (images, then the product) before reporting the failure, so callers never
//! observe a product with a partial image set.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    ItemCatalogueCommand, ItemCatalogueQuery, ProductPersistenceError, ProductRepository,
};
use crate::domain::{Error, Item, NewProductImage, Product, ProductListing, attach_images};

/// Catalogue service backed by a [`ProductRepository`].
#[derive(Clone)]
pub struct ItemCatalogueService<R> {
    products: Arc<R>,
}

impl<R> ItemCatalogueService<R> {
    /// Create a new service over the given repository.
    pub fn new(products: Arc<R>) -> Self {
        Self { products }
    }
}

fn map_store_error(error: &ProductPersistenceError) -> Error {
    debug!(error_kind = error.kind(), %error, "product store call failed");
    Error::invalid_request(error.store_message())
}

impl<R> ItemCatalogueService<R>
where
    R: ProductRepository,
{
    async fn insert_images(&self, product: &Product, images: &[String]) -> Result<(), Error> {
        for (inserted, image_url) in images.iter().enumerate() {
            let image = NewProductImage {
                product_id: product.product_id,
                image_url: image_url.clone(),
            };
            if let Err(failure) = self.products.insert_image(&image).await {
                let rolled_back = self.roll_back(product).await;
                warn!(
                    product_id = %product.product_id,
                    images_requested = images.len(),
                    images_inserted = inserted,
                    rolled_back,
                    error = %failure,
                    "image insert failed"
                );
                return Err(map_store_error(&failure).with_details(json!({
                    "productId": product.product_id.get(),
                    "imagesRequested": images.len(),
                    "imagesInserted": inserted,
                    "rolledBack": rolled_back,
                })));
            }
        }
        Ok(())
    }

    async fn roll_back(&self, product: &Product) -> bool {
        match self.products.delete_product(product.product_id).await {
            Ok(()) => true,
            Err(failure) => {
                error!(
                    product_id = %product.product_id,
                    error = %failure,
                    "compensating product delete failed; product left with partial images"
                );
                false
            }
        }
    }
}

#[async_trait]
impl<R> ItemCatalogueCommand for ItemCatalogueService<R>
where
    R: ProductRepository,
{
    async fn create_item(&self, listing: ProductListing) -> Result<Item, Error> {
        let (new_product, images) = listing.into_parts();
        let product = self
            .products
            .insert_product(&new_product)
            .await
            .map_err(|failure| map_store_error(&failure))?;

        self.insert_images(&product, &images).await?;

        info!(
            product_id = %product.product_id,
            lender_id = %product.lender_id,
            images = images.len(),
            "product created"
        );
        Ok(Item { product, images })
    }
}

#[async_trait]
impl<R> ItemCatalogueQuery for ItemCatalogueService<R>
where
    R: ProductRepository,
{
    async fn list_items(&self) -> Result<Vec<Item>, Error> {
        let products = self
            .products
            .list_products()
            .await
            .map_err(|failure| map_store_error(&failure))?;
        let images = self
            .products
            .list_images()
            .await
            .map_err(|failure| map_store_error(&failure))?;
        debug!(
            products = products.len(),
            images = images.len(),
            "joining catalogue"
        );
        Ok(attach_images(products, images))
    }
}

#[cfg(test)]
#[path = "item_catalogue_service_tests.rs"]
mod tests;
