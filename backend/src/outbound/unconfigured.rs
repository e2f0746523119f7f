//! Store used when no backing store is configured.
//!
//! The server still starts and answers the welcome and health routes; every
//! store-backed call fails with a connection error.

use async_trait::async_trait;

use crate::domain::ports::{
    ProductPersistenceError, ProductRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{
    NewProduct, NewProductImage, NewUser, Product, ProductId, ProductImage, UserProfile,
};

/// Message carried by every failure from [`UnconfiguredStore`].
pub const UNCONFIGURED_MESSAGE: &str = "store is not configured";

/// Repository that rejects every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredStore;

#[async_trait]
impl UserRepository for UnconfiguredStore {
    async fn find_by_email(
        &self,
        _email: &str,
    ) -> Result<Option<UserProfile>, UserPersistenceError> {
        Err(UserPersistenceError::connection(UNCONFIGURED_MESSAGE))
    }

    async fn insert(&self, _user: &NewUser) -> Result<Vec<UserProfile>, UserPersistenceError> {
        Err(UserPersistenceError::connection(UNCONFIGURED_MESSAGE))
    }
}

#[async_trait]
impl ProductRepository for UnconfiguredStore {
    async fn insert_product(
        &self,
        _product: &NewProduct,
    ) -> Result<Product, ProductPersistenceError> {
        Err(ProductPersistenceError::connection(UNCONFIGURED_MESSAGE))
    }

    async fn insert_image(
        &self,
        _image: &NewProductImage,
    ) -> Result<ProductImage, ProductPersistenceError> {
        Err(ProductPersistenceError::connection(UNCONFIGURED_MESSAGE))
    }

    async fn delete_product(&self, _product_id: ProductId) -> Result<(), ProductPersistenceError> {
        Err(ProductPersistenceError::connection(UNCONFIGURED_MESSAGE))
    }

    async fn list_products(&self) -> Result<Vec<Product>, ProductPersistenceError> {
        Err(ProductPersistenceError::connection(UNCONFIGURED_MESSAGE))
    }

    async fn list_images(&self) -> Result<Vec<ProductImage>, ProductPersistenceError> {
        Err(ProductPersistenceError::connection(UNCONFIGURED_MESSAGE))
    }
}
