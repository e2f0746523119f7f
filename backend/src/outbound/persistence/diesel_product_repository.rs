//! PostgreSQL-backed `ProductRepository` using Diesel.
//!
//! Each port call is its own statement; only the compensating delete runs
//! inside a transaction so images and their product disappear together.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;

use crate::domain::ports::{ProductPersistenceError, ProductRepository};
use crate::domain::{NewProduct, NewProductImage, Product, ProductId, ProductImage};

use super::diesel_error_mapping::{product_diesel_error, product_pool_error};
use super::models::{NewProductImageRow, NewProductRow, ProductImageRow, ProductRow};
use super::pool::DbPool;
use super::schema::{product_images, products};

/// Diesel-backed implementation of the [`ProductRepository`] port.
#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for DieselProductRepository {
    async fn insert_product(&self, product: &NewProduct) -> Result<Product, ProductPersistenceError> {
        let mut conn = self.pool.get().await.map_err(product_pool_error)?;

        diesel::insert_into(products::table)
            .values(NewProductRow::from(product))
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Product::from)
            .map_err(product_diesel_error)
    }

    async fn insert_image(
        &self,
        image: &NewProductImage,
    ) -> Result<ProductImage, ProductPersistenceError> {
        let mut conn = self.pool.get().await.map_err(product_pool_error)?;

        diesel::insert_into(product_images::table)
            .values(NewProductImageRow::from(image))
            .returning(ProductImageRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(ProductImage::from)
            .map_err(product_diesel_error)
    }

    async fn delete_product(&self, product_id: ProductId) -> Result<(), ProductPersistenceError> {
        let mut conn = self.pool.get().await.map_err(product_pool_error)?;
        let raw_id = product_id.get();

        conn.transaction(|conn| {
            async move {
                diesel::delete(product_images::table.filter(product_images::product_id.eq(raw_id)))
                    .execute(conn)
                    .await?;
                diesel::delete(products::table.filter(products::product_id.eq(raw_id)))
                    .execute(conn)
                    .await?;
                Ok::<(), diesel::result::Error>(())
            }
            .scope_boxed()
        })
        .await
        .map_err(product_diesel_error)
    }

    async fn list_products(&self) -> Result<Vec<Product>, ProductPersistenceError> {
        let mut conn = self.pool.get().await.map_err(product_pool_error)?;

        let rows: Vec<ProductRow> = products::table
            .order_by(products::product_id)
            .select(ProductRow::as_select())
            .load(&mut conn)
            .await
            .map_err(product_diesel_error)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn list_images(&self) -> Result<Vec<ProductImage>, ProductPersistenceError> {
        let mut conn = self.pool.get().await.map_err(product_pool_error)?;

        let rows: Vec<ProductImageRow> = product_images::table
            .order_by(product_images::image_id)
            .select(ProductImageRow::as_select())
            .load(&mut conn)
            .await
            .map_err(product_diesel_error)?;
        Ok(rows.into_iter().map(ProductImage::from).collect())
    }
}
