//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TRADEBRIDGE_*` environment variables and
//! configuration files, in increasing order of precedence as ortho_config
//! layers them.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_PORT: u16 = 8000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRADEBRIDGE")]
pub struct AppSettings {
    /// Listen address for the HTTP server.
    pub bind_addr: Option<SocketAddr>,
    /// The single browser origin allowed by CORS.
    pub cors_origin: Option<String>,
    /// Base URL of a PostgREST-compatible store.
    pub store_url: Option<String>,
    /// API key sent to the PostgREST store.
    pub store_key: Option<String>,
    /// PostgreSQL connection string; takes precedence over `store_url`.
    pub database_url: Option<String>,
    /// Serve from a process-local store when no other store is configured.
    #[ortho_config(default = false)]
    pub store_in_memory: bool,
    /// Per-call timeout towards the store.
    pub store_timeout_secs: Option<u64>,
}

/// Which store adapter the server should wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSelection {
    Diesel { database_url: String },
    Rest { url: String, key: Option<String> },
    InMemory,
    Unconfigured,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|raw| raw.trim()).filter(|raw| !raw.is_empty())
}

impl AppSettings {
    /// Configured listen address, falling back to `0.0.0.0:8000`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_BIND_PORT)))
    }

    /// Configured CORS origin, falling back to the local frontend.
    pub fn cors_origin(&self) -> &str {
        non_empty(self.cors_origin.as_ref()).unwrap_or(DEFAULT_CORS_ORIGIN)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs.unwrap_or(DEFAULT_STORE_TIMEOUT_SECS))
    }

    /// Resolve the store adapter.
    ///
    /// A database URL wins over a REST URL, which wins over the in-memory
    /// flag. With none of them set every store call fails.
    pub fn store(&self) -> StoreSelection {
        if let Some(database_url) = non_empty(self.database_url.as_ref()) {
            return StoreSelection::Diesel {
                database_url: database_url.to_owned(),
            };
        }
        if let Some(url) = non_empty(self.store_url.as_ref()) {
            return StoreSelection::Rest {
                url: url.to_owned(),
                key: non_empty(self.store_key.as_ref()).map(str::to_owned),
            };
        }
        if self.store_in_memory {
            StoreSelection::InMemory
        } else {
            StoreSelection::Unconfigured
        }
    }
}
