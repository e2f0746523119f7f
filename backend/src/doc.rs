//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the request and response bodies, plus the error envelope wrappers
//! ([`ErrorSchema`], [`ErrorCodeSchema`]) that keep utoipa out of the domain.
//!
//! The document is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::items::{CreateItemResponse, ItemBody, ItemsResponse, ProductCreate};
use crate::inbound::http::root::WelcomeResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{
    ProfileResponse, RegisterRequest, RegisterResponse, UserIdResponse, UserProfileBody,
    UserRoleResponse,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TradeBridge backend API",
        description = "User registration and lookup, product listings with images, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::root::welcome,
        crate::inbound::http::users::get_user_profile,
        crate::inbound::http::users::get_user_id_by_email,
        crate::inbound::http::users::get_user_role,
        crate::inbound::http::users::register,
        crate::inbound::http::items::create_item,
        crate::inbound::http::items::list_items,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        WelcomeResponse,
        UserProfileBody,
        ProfileResponse,
        UserIdResponse,
        UserRoleResponse,
        RegisterRequest,
        RegisterResponse,
        ProductCreate,
        ItemBody,
        CreateItemResponse,
        ItemsResponse,
    )),
    tags(
        (name = "root", description = "Service greeting"),
        (name = "users", description = "Registration and lookups by email"),
        (name = "items", description = "Products and their images"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
