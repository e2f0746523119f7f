//! Driving ports for the product catalogue.

use async_trait::async_trait;

use crate::domain::{Error, Item, ProductListing};

/// Create products together with their images.
#[async_trait]
pub trait ItemCatalogueCommand: Send + Sync {
    /// Persist the product, then one image row per URL.
    async fn create_item(&self, listing: ProductListing) -> Result<Item, Error>;
}

/// Read the full catalogue.
#[async_trait]
pub trait ItemCatalogueQuery: Send + Sync {
    /// Every product with its image URLs attached.
    async fn list_items(&self) -> Result<Vec<Item>, Error>;
}
