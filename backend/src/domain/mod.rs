//! Domain primitives, services, and ports.
//!
//! Purpose: define the marketplace entities (users, products, product
//! images), the services that orchestrate store calls, and the ports that
//! keep HTTP and persistence concerns at the edges.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure envelope.
//! - UserProfile, NewUser: user rows and their public projection.
//! - ProductListing, Product, ProductImage, Item: catalogue types and the
//!   `attach_images` join.
//! - UserAccountService, ItemCatalogueService: driving port implementations.

pub mod error;
pub mod item_catalogue_service;
pub mod ports;
pub mod product;
pub mod trace_id;
pub mod user;
pub mod user_accounts_service;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::item_catalogue_service::ItemCatalogueService;
pub use self::product::{
    Item, NewProduct, NewProductImage, Product, ProductId, ProductImage, ProductListing,
    attach_images,
};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, UserId, UserProfile};
pub use self::user_accounts_service::{DUPLICATE_EMAIL_MESSAGE, UserAccountService};
