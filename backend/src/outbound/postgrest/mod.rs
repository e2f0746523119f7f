//! PostgREST outbound adapters.
//!
//! Thin HTTP implementations of the user and product repository ports for a
//! hosted PostgREST endpoint. One [`PostgrestClient`] is shared by both.

mod client;
mod dto;
mod rest_product_repository;
mod rest_user_repository;

pub use client::{PostgrestClient, PostgrestSetupError};
pub use rest_product_repository::RestProductRepository;
pub use rest_user_repository::RestUserRepository;
