//! Reqwest-backed PostgREST table client.
//!
//! The client owns transport details only: URL construction, authentication
//! headers, timeout and HTTP error mapping, and JSON decoding. Repositories
//! translate [`RestCallError`] into their port errors.

use std::fmt::Display;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::PostgrestErrorDto;

const REST_PATH: &str = "rest/v1/";
const API_KEY_HEADER: &str = "apikey";
const PREFER_HEADER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";
const UNIQUE_VIOLATION_CODE: &str = "23505";
const UNIQUE_VIOLATION_TEXT: &str = "duplicate key value violates unique constraint";

/// Failure building a [`PostgrestClient`].
#[derive(Debug, thiserror::Error)]
pub enum PostgrestSetupError {
    /// The store URL cannot host a REST root.
    #[error("invalid store URL `{url}`: {message}")]
    InvalidUrl { url: String, message: String },
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Failure of one REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(super) enum RestCallError {
    #[error("{message}")]
    Transport { message: String },
    #[error("{message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },
    #[error("{message}")]
    Decode { message: String },
}

impl RestCallError {
    /// Whether the store rejected the write on a unique constraint.
    pub(super) fn is_unique_violation(&self) -> bool {
        match self {
            Self::Rejected { code, message, .. } => match code.as_deref() {
                Some(code) => code == UNIQUE_VIOLATION_CODE,
                None => message.contains(UNIQUE_VIOLATION_TEXT),
            },
            Self::Transport { .. } | Self::Decode { .. } => false,
        }
    }
}

/// Table client for a PostgREST endpoint such as a hosted Supabase project.
#[derive(Clone)]
pub struct PostgrestClient {
    http: Client,
    rest_root: Url,
    api_key: Option<String>,
}

impl PostgrestClient {
    /// Build a client rooted at `<store_url>/rest/v1/`.
    ///
    /// `api_key` is sent as both the `apikey` header and a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error when `store_url` is not an http(s) base URL or the
    /// reqwest client cannot be constructed.
    pub fn new(
        store_url: &Url,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, PostgrestSetupError> {
        let rest_root = rest_root(store_url)?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            rest_root,
            api_key,
        })
    }

    /// `GET /rest/v1/{table}?select={columns}&{column}=eq.{value}...`
    pub(super) async fn select<T>(
        &self,
        table: &str,
        columns: &str,
        filters: &[(&str, String)],
    ) -> Result<Vec<T>, RestCallError>
    where
        T: DeserializeOwned,
    {
        let request = self
            .http
            .get(self.table_url(table)?)
            .query(&[("select", columns)])
            .query(filters);
        let body = self.send(request).await?;
        decode_rows(&body)
    }

    /// `POST /rest/v1/{table}?select={columns}` returning the inserted rows.
    pub(super) async fn insert<B, T>(
        &self,
        table: &str,
        columns: &str,
        row: &B,
    ) -> Result<Vec<T>, RestCallError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let request = self
            .http
            .post(self.table_url(table)?)
            .query(&[("select", columns)])
            .header(PREFER_HEADER, RETURN_REPRESENTATION)
            .json(row);
        let body = self.send(request).await?;
        decode_rows(&body)
    }

    /// `DELETE /rest/v1/{table}?{column}=eq.{value}...`
    pub(super) async fn delete(
        &self,
        table: &str,
        filters: &[(&str, String)],
    ) -> Result<(), RestCallError> {
        let request = self.http.delete(self.table_url(table)?).query(filters);
        self.send(request).await.map(drop)
    }

    fn table_url(&self, table: &str) -> Result<Url, RestCallError> {
        self.rest_root
            .join(table)
            .map_err(|error| RestCallError::Transport {
                message: format!("invalid table path `{table}`: {error}"),
            })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, RestCallError> {
        let request = request.header(ACCEPT, "application/json");
        let request = match &self.api_key {
            Some(key) => request
                .header(API_KEY_HEADER, key.as_str())
                .header(AUTHORIZATION, format!("Bearer {key}")),
            None => request,
        };

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

/// PostgREST equality filter value.
pub(super) fn eq_filter(value: impl Display) -> String {
    format!("eq.{value}")
}

fn rest_root(store_url: &Url) -> Result<Url, PostgrestSetupError> {
    let invalid = |message: &str| PostgrestSetupError::InvalidUrl {
        url: store_url.to_string(),
        message: message.to_owned(),
    };
    if !matches!(store_url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if store_url.cannot_be_a_base() {
        return Err(invalid("URL cannot be a base"));
    }

    let mut base = store_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(REST_PATH)
        .map_err(|error| invalid(&error.to_string()))
}

fn decode_rows<T>(body: &[u8]) -> Result<Vec<T>, RestCallError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|error| RestCallError::Decode {
        message: format!("invalid store response: {error}"),
    })
}

fn map_transport_error(error: reqwest::Error) -> RestCallError {
    debug!(timeout = error.is_timeout(), %error, "store request failed");
    RestCallError::Transport {
        message: error.to_string(),
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RestCallError {
    let decoded = serde_json::from_slice::<PostgrestErrorDto>(body).ok();
    let (code, message) = match decoded {
        Some(PostgrestErrorDto {
            code,
            message: Some(message),
        }) => (code, message),
        Some(PostgrestErrorDto { code, message: None }) => (code, status_message(status, body)),
        None => (None, status_message(status, body)),
    };
    RestCallError::Rejected {
        status: status.as_u16(),
        code,
        message,
    }
}

fn status_message(status: StatusCode, body: &[u8]) -> String {
    let preview = body_preview(body);
    if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
