//! Driven port for the `products` and `product_images` tables.
//!
//! The operations are deliberately row-sized: the fan-out write and the
//! fan-in read are orchestrated by the catalogue service, not the adapter.

use async_trait::async_trait;

use crate::domain::{NewProduct, NewProductImage, Product, ProductId, ProductImage};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by product repository adapters.
    pub enum ProductPersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "product store connection failed: {message}",
        /// The store rejected or failed the operation.
        Query { message: String } => "product store query failed: {message}",
    }
}

impl ProductPersistenceError {
    /// Raw store message without the port prefix.
    pub fn store_message(&self) -> &str {
        match self {
            Self::Connection { message } | Self::Query { message } => message,
        }
    }
}

/// Row-level access to products and their images.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product row and return it with its assigned identity.
    async fn insert_product(&self, product: &NewProduct) -> Result<Product, ProductPersistenceError>;

    /// Insert one image row referencing an existing product.
    async fn insert_image(
        &self,
        image: &NewProductImage,
    ) -> Result<ProductImage, ProductPersistenceError>;

    /// Delete a product and every image row referencing it.
    async fn delete_product(&self, product_id: ProductId) -> Result<(), ProductPersistenceError>;

    /// Return every product row.
    async fn list_products(&self) -> Result<Vec<Product>, ProductPersistenceError>;

    /// Return every image row.
    async fn list_images(&self) -> Result<Vec<ProductImage>, ProductPersistenceError>;
}
