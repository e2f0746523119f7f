//! HTTP server configuration object.

use std::net::SocketAddr;

use actix_web::web;
use tradebridge::inbound::http::state::HttpState;

/// Everything [`super::create_server`] needs to build the app per worker.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cors_origin: String,
    pub(crate) http_state: web::Data<HttpState>,
}

impl ServerConfig {
    /// `cors_origin` must already be normalised to `scheme://host[:port]`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, cors_origin: String, http_state: HttpState) -> Self {
        Self {
            bind_addr,
            cors_origin,
            http_state: web::Data::new(http_state),
        }
    }
}
