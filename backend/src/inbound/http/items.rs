//! Product catalogue handlers.
//!
//! ```text
//! POST /items      {"name":"Tent","description":"...","price":20.0,"images":["a.png"],
//!                   "start_date":"2025-06-01","end_date":"2025-06-14","lender_id":7}
//! GET  /api/items
//! ```

use actix_web::{get, post, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Item, ProductListing, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Product creation body.
///
/// Only the shape is checked: dates must be `YYYY-MM-DD`, numbers must be
/// numbers. Date order, price sign and lender existence are not validated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    #[schema(example = 20.0)]
    pub price: f64,
    /// Image URLs, stored in this order.
    pub images: Vec<String>,
    #[schema(example = "2025-06-01")]
    pub start_date: NaiveDate,
    #[schema(example = "2025-06-14")]
    pub end_date: NaiveDate,
    #[schema(example = 7)]
    pub lender_id: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub condition: Option<String>,
}

impl From<ProductCreate> for ProductListing {
    fn from(body: ProductCreate) -> Self {
        Self {
            name: body.name,
            description: body.description,
            price: body.price,
            images: body.images,
            start_date: body.start_date,
            end_date: body.end_date,
            lender_id: UserId::new(body.lender_id),
            category: body.category,
            value: body.value,
            condition: body.condition,
        }
    }
}

/// Product row with its image URLs attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemBody {
    pub product_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub value: Option<f64>,
    pub condition: Option<String>,
    pub availability: bool,
    pub lender_id: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub images: Vec<String>,
}

impl From<Item> for ItemBody {
    fn from(item: Item) -> Self {
        let Item { product, images } = item;
        Self {
            product_id: product.product_id.get(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            value: product.value,
            condition: product.condition,
            availability: product.availability,
            lender_id: product.lender_id.get(),
            start_date: product.start_date,
            end_date: product.end_date,
            images,
        }
    }
}

/// Response for `POST /items`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateItemResponse {
    pub item: ItemBody,
}

/// Response for `GET /api/items`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemsResponse {
    pub items: Vec<ItemBody>,
}

/// Create a product and one image row per URL.
///
/// When an image insert fails the product is removed again and the 400
/// response details report `productId`, `imagesRequested`,
/// `imagesInserted` and `rolledBack`.
#[utoipa::path(
    post,
    path = "/items",
    request_body = ProductCreate,
    responses(
        (status = 200, description = "Product created", body = CreateItemResponse),
        (status = 400, description = "Invalid body or store failure", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    payload: web::Json<ProductCreate>,
) -> ApiResult<web::Json<CreateItemResponse>> {
    let item = state
        .items
        .create_item(ProductListing::from(payload.into_inner()))
        .await?;
    Ok(web::Json(CreateItemResponse {
        item: ItemBody::from(item),
    }))
}

/// Every product with its images.
#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "All products with their images", body = ItemsResponse),
        (status = 400, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/api/items")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<web::Json<ItemsResponse>> {
    let items = state.items_query.list_items().await?;
    Ok(web::Json(ItemsResponse {
        items: items.into_iter().map(ItemBody::from).collect(),
    }))
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod tests;
