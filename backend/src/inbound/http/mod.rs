//! HTTP inbound adapter exposing the REST endpoints.

use actix_web::web;

pub mod cors;
pub mod error;
pub mod health;
pub mod items;
pub mod root;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

/// Register the API routes and extractor configuration.
///
/// Expects [`state::HttpState`] to be present as `web::Data`. Health probes
/// and documentation are mounted by the server.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::query_config())
        .service(root::welcome)
        .service(users::get_user_profile)
        .service(users::get_user_id_by_email)
        .service(users::get_user_role)
        .service(users::register)
        .service(items::create_item)
        .service(items::list_items);
}
