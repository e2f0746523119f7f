//! Store selection and HTTP state wiring.

use std::io;
use std::sync::Arc;

use tracing::{info, warn};
use url::Url;

use tradebridge::config::{AppSettings, StoreSelection};
use tradebridge::inbound::http::state::HttpState;
use tradebridge::outbound::persistence::{
    DbPool, DieselProductRepository, DieselUserRepository, PoolConfig,
};
use tradebridge::outbound::postgrest::{
    PostgrestClient, RestProductRepository, RestUserRepository,
};
use tradebridge::outbound::{InMemoryStore, UNCONFIGURED_MESSAGE, UnconfiguredStore};

/// Build the handler state over the store the settings select.
///
/// # Errors
///
/// Returns [`io::Error`] when the selected store cannot be set up, for
/// example an unparsable store URL. Reachability is not checked here; an
/// unreachable store fails individual requests instead.
pub async fn build_http_state(settings: &AppSettings) -> io::Result<HttpState> {
    match settings.store() {
        StoreSelection::Diesel { database_url } => {
            let config =
                PoolConfig::new(database_url).with_connection_timeout(settings.store_timeout());
            let pool = DbPool::new(config)
                .await
                .map_err(|err| io::Error::other(err.into_message()))?;
            info!(store = "diesel", "store selected");
            Ok(HttpState::from_repositories(
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselProductRepository::new(pool)),
            ))
        }
        StoreSelection::Rest { url, key } => {
            let url = Url::parse(&url)
                .map_err(|err| io::Error::other(format!("invalid store URL `{url}`: {err}")))?;
            if key.is_none() {
                warn!("no store key configured; the store may reject every call");
            }
            let client = PostgrestClient::new(&url, key, settings.store_timeout())
                .map_err(io::Error::other)?;
            info!(
                store = "postgrest",
                host = url.host_str().unwrap_or_default(),
                "store selected"
            );
            Ok(HttpState::from_repositories(
                Arc::new(RestUserRepository::new(client.clone())),
                Arc::new(RestProductRepository::new(client)),
            ))
        }
        StoreSelection::InMemory => {
            info!(store = "memory", "store selected; data is lost on restart");
            let store = Arc::new(InMemoryStore::new());
            Ok(HttpState::from_repositories(store.clone(), store))
        }
        StoreSelection::Unconfigured => {
            warn!(
                store = "unconfigured",
                "no store configured; every store call answers `{UNCONFIGURED_MESSAGE}`"
            );
            let store = Arc::new(UnconfiguredStore);
            Ok(HttpState::from_repositories(store.clone(), store))
        }
    }
}
