//! PostgREST-backed `ProductRepository`.
//!
//! PostgREST offers no multi-statement transaction, so `delete_product`
//! issues two requests: images first, then the product.

use async_trait::async_trait;

use crate::domain::ports::{ProductPersistenceError, ProductRepository};
use crate::domain::{NewProduct, NewProductImage, Product, ProductId, ProductImage};

use super::client::{PostgrestClient, RestCallError, eq_filter};
use super::dto::{
    NewProductDto, NewProductImageDto, PRODUCT_COLUMNS, PRODUCT_IMAGE_COLUMNS,
    PRODUCT_IMAGES_TABLE, PRODUCTS_TABLE, ProductDto, ProductImageDto,
};

/// Product repository speaking to `products` and `product_images` over REST.
#[derive(Clone)]
pub struct RestProductRepository {
    client: PostgrestClient,
}

impl RestProductRepository {
    /// Create a repository over a shared client.
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

fn map_call_error(error: RestCallError) -> ProductPersistenceError {
    match error {
        RestCallError::Transport { message } => ProductPersistenceError::connection(message),
        RestCallError::Rejected { message, .. } | RestCallError::Decode { message } => {
            ProductPersistenceError::query(message)
        }
    }
}

fn single_row<T>(rows: Vec<T>, table: &str) -> Result<T, ProductPersistenceError> {
    rows.into_iter().next().ok_or_else(|| {
        ProductPersistenceError::query(format!("insert into {table} returned no rows"))
    })
}

#[async_trait]
impl ProductRepository for RestProductRepository {
    async fn insert_product(&self, product: &NewProduct) -> Result<Product, ProductPersistenceError> {
        let rows: Vec<ProductDto> = self
            .client
            .insert(PRODUCTS_TABLE, PRODUCT_COLUMNS, &NewProductDto::from(product))
            .await
            .map_err(map_call_error)?;
        single_row(rows, PRODUCTS_TABLE).map(Product::from)
    }

    async fn insert_image(
        &self,
        image: &NewProductImage,
    ) -> Result<ProductImage, ProductPersistenceError> {
        let rows: Vec<ProductImageDto> = self
            .client
            .insert(
                PRODUCT_IMAGES_TABLE,
                PRODUCT_IMAGE_COLUMNS,
                &NewProductImageDto::from(image),
            )
            .await
            .map_err(map_call_error)?;
        single_row(rows, PRODUCT_IMAGES_TABLE).map(ProductImage::from)
    }

    async fn delete_product(&self, product_id: ProductId) -> Result<(), ProductPersistenceError> {
        let filter = [("product_id", eq_filter(product_id))];
        self.client
            .delete(PRODUCT_IMAGES_TABLE, &filter)
            .await
            .map_err(map_call_error)?;
        self.client
            .delete(PRODUCTS_TABLE, &filter)
            .await
            .map_err(map_call_error)
    }

    async fn list_products(&self) -> Result<Vec<Product>, ProductPersistenceError> {
        let rows: Vec<ProductDto> = self
            .client
            .select(PRODUCTS_TABLE, PRODUCT_COLUMNS, &[])
            .await
            .map_err(map_call_error)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn list_images(&self) -> Result<Vec<ProductImage>, ProductPersistenceError> {
        let rows: Vec<ProductImageDto> = self
            .client
            .select(PRODUCT_IMAGES_TABLE, PRODUCT_IMAGE_COLUMNS, &[])
            .await
            .map_err(map_call_error)?;
        Ok(rows.into_iter().map(ProductImage::from).collect())
    }
}
