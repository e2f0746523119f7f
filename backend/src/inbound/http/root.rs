//! Welcome endpoint.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Greeting returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the TradeBridge backend!";

/// Response for `GET /`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    #[schema(example = "Welcome to the TradeBridge backend!")]
    pub message: String,
}

/// Static greeting; touches no store.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = WelcomeResponse)),
    tags = ["root"],
    operation_id = "welcome"
)]
#[get("/")]
pub async fn welcome() -> web::Json<WelcomeResponse> {
    web::Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_owned(),
    })
}
