//! Process-local store implementing both repository ports.
//!
//! Mirrors the relational constraints the real store enforces: unique user
//! emails, product lenders that reference a user, and images that reference a
//! product. Identities are assigned from per-table sequences starting at 1.
//! Contents are lost when the process exits.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    ProductPersistenceError, ProductRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{
    NewProduct, NewProductImage, NewUser, Product, ProductId, ProductImage, UserId, UserProfile,
};

const POISONED: &str = "in-memory store lock poisoned";

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserProfile>,
    products: Vec<Product>,
    images: Vec<ProductImage>,
    last_user_id: i64,
    last_product_id: i64,
    last_image_id: i64,
}

/// In-memory store for local runs and tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, String> {
        self.tables.lock().map_err(|_| POISONED.to_owned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, UserPersistenceError> {
        let tables = self.tables().map_err(UserPersistenceError::connection)?;
        Ok(tables.users.iter().find(|user| user.email == email).cloned())
    }

    async fn insert(&self, user: &NewUser) -> Result<Vec<UserProfile>, UserPersistenceError> {
        let mut tables = self.tables().map_err(UserPersistenceError::connection)?;
        if tables.users.iter().any(|existing| existing.email == user.email) {
            return Err(UserPersistenceError::duplicate_email(
                "duplicate key value violates unique constraint \"users_email_key\"",
            ));
        }
        tables.last_user_id += 1;
        let profile = user.clone().into_profile(UserId::new(tables.last_user_id));
        tables.users.push(profile.clone());
        Ok(vec![profile])
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn insert_product(&self, product: &NewProduct) -> Result<Product, ProductPersistenceError> {
        let mut tables = self.tables().map_err(ProductPersistenceError::connection)?;
        if !tables.users.iter().any(|user| user.id == product.lender_id) {
            return Err(ProductPersistenceError::query(
                "insert or update on table \"products\" violates foreign key constraint \
                 \"products_lender_id_fkey\"",
            ));
        }
        tables.last_product_id += 1;
        let stored = Product {
            product_id: ProductId::new(tables.last_product_id),
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
        };
        tables.products.push(stored.clone());
        Ok(stored)
    }

    async fn insert_image(
        &self,
        image: &NewProductImage,
    ) -> Result<ProductImage, ProductPersistenceError> {
        let mut tables = self.tables().map_err(ProductPersistenceError::connection)?;
        if !tables
            .products
            .iter()
            .any(|product| product.product_id == image.product_id)
        {
            return Err(ProductPersistenceError::query(
                "insert or update on table \"product_images\" violates foreign key constraint \
                 \"product_images_product_id_fkey\"",
            ));
        }
        tables.last_image_id += 1;
        let stored = ProductImage {
            image_id: tables.last_image_id,
            product_id: image.product_id,
            image_url: image.image_url.clone(),
        };
        tables.images.push(stored.clone());
        Ok(stored)
    }

    async fn delete_product(&self, product_id: ProductId) -> Result<(), ProductPersistenceError> {
        let mut tables = self.tables().map_err(ProductPersistenceError::connection)?;
        tables.images.retain(|image| image.product_id != product_id);
        tables
            .products
            .retain(|product| product.product_id != product_id);
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, ProductPersistenceError> {
        let tables = self.tables().map_err(ProductPersistenceError::connection)?;
        Ok(tables.products.clone())
    }

    async fn list_images(&self) -> Result<Vec<ProductImage>, ProductPersistenceError> {
        let tables = self.tables().map_err(ProductPersistenceError::connection)?;
        Ok(tables.images.clone())
    }
}
