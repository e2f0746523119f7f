//! Single-origin CORS policy.
//!
//! Exactly one browser origin may call the API, with credentials, any method
//! and any header.

use actix_cors::Cors;
use url::Url;

/// Rejected CORS origin configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorsOriginError {
    #[error("CORS origin `{origin}` is not a valid URL: {message}")]
    Invalid { origin: String, message: String },
    #[error("CORS origin `{origin}` must be an http(s) origin, not a wildcard or opaque URL")]
    Unsupported { origin: String },
}

/// Normalise a configured origin to `scheme://host[:port]`.
///
/// # Errors
///
/// Fails for wildcards, unparsable values and non-http(s) URLs.
///
/// # Examples
/// ```
/// use tradebridge::inbound::http::cors::normalise_origin;
///
/// assert_eq!(
///     normalise_origin("http://localhost:3000/").as_deref(),
///     Ok("http://localhost:3000")
/// );
/// ```
pub fn normalise_origin(raw: &str) -> Result<String, CorsOriginError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|error| CorsOriginError::Invalid {
        origin: trimmed.to_owned(),
        message: error.to_string(),
    })?;
    let origin = url.origin();
    if !origin.is_tuple() || !matches!(url.scheme(), "http" | "https") {
        return Err(CorsOriginError::Unsupported {
            origin: trimmed.to_owned(),
        });
    }
    Ok(origin.ascii_serialization())
}

/// Build the CORS middleware for one normalised origin.
pub fn cors_policy(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::HeaderMap;
    use actix_web::http::{Method, StatusCode, header};
    use actix_web::test as actix_test;
    use actix_web::{App, HttpResponse, web};
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:3000", "http://localhost:3000")]
    #[case("https://app.example.com/", "https://app.example.com")]
    #[case(" https://app.example.com:8443/path ", "https://app.example.com:8443")]
    fn origins_are_normalised(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalise_origin(raw).as_deref(), Ok(expected));
    }

    #[rstest]
    #[case("*")]
    #[case("localhost:3000")]
    #[case("file:///tmp/index.html")]
    fn unusable_origins_are_rejected(#[case] raw: &str) {
        assert!(normalise_origin(raw).is_err());
    }

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn preflight(origin: &str) -> (StatusCode, HeaderMap) {
        let app = actix_test::init_service(
            App::new()
                .wrap(cors_policy("http://localhost:3000"))
                .route("/register", web::post().to(ok)),
        )
        .await;
        let request = actix_test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/register")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        (response.status(), response.headers().clone())
    }

    #[actix_web::test]
    async fn configured_origin_passes_preflight_with_credentials() {
        let (status, headers) = preflight("http://localhost:3000").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:3000")
        );
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .and_then(|v| v.to_str().ok()),
            Some("true")
        );
    }

    #[actix_web::test]
    async fn other_origins_get_no_allow_origin_header() {
        let app = actix_test::init_service(
            App::new()
                .wrap(cors_policy("http://localhost:3000"))
                .route("/", web::get().to(ok)),
        )
        .await;
        let request = actix_test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://evil.example"))
            .to_request();
        let response = actix_test::try_call_service(&app, request).await;

        let allowed = response
            .ok()
            .and_then(|res| res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).cloned());
        assert!(allowed.is_none());
    }
}
