//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by store adapters; driving
//! ports (`*Query`, `*Command`) are implemented by domain services and
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod item_catalogue;
mod product_repository;
mod user_accounts;
mod user_repository;

pub use item_catalogue::{ItemCatalogueCommand, ItemCatalogueQuery};
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{ProductPersistenceError, ProductRepository};
pub use user_accounts::{UserLookupQuery, UserRegistrationCommand};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
