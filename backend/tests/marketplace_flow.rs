//! End-to-end behaviour of the HTTP API over the in-memory store.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use tradebridge::Trace;
use tradebridge::domain::TRACE_ID_HEADER;
use tradebridge::inbound::http::configure;
use tradebridge::inbound::http::cors::cors_policy;
use tradebridge::inbound::http::state::HttpState;
use tradebridge::outbound::{InMemoryStore, UNCONFIGURED_MESSAGE, UnconfiguredStore};

const FRONTEND: &str = "http://localhost:3000";

async fn app_over(
    state: HttpState,
) -> impl Service<
    actix_http::Request,
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .wrap(cors_policy(FRONTEND))
            .configure(configure),
    )
    .await
}

fn in_memory() -> HttpState {
    let store = Arc::new(InMemoryStore::new());
    HttpState::from_repositories(store.clone(), store)
}

#[fixture]
fn lender() -> Value {
    json!({
        "name": "Grace",
        "contact": "555-0199",
        "email": "grace@example.com",
        "role": "lender",
        "password_hash": "hashed",
    })
}

fn listing(lender_id: i64, images: &[&str]) -> Value {
    json!({
        "name": "Cordless drill",
        "description": "18V with two batteries",
        "price": 7.5,
        "images": images,
        "start_date": "2025-07-01",
        "end_date": "2025-07-31",
        "lender_id": lender_id,
        "condition": "good",
    })
}

#[rstest]
#[actix_web::test]
async fn a_lender_registers_lists_products_and_finds_them(lender: Value) {
    let app = app_over(in_memory()).await;

    let registered: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/register")
            .set_json(&lender)
            .to_request(),
    )
    .await;
    let id: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/get_user_by_email?email=grace%40example.com")
            .to_request(),
    )
    .await;
    assert_eq!(registered["user"][0]["id"], id["id"]);
    let lender_id = id["id"].as_i64().expect("registered id");

    for images in [&["drill.png", "case.png"][..], &[][..], &["bits.png"][..]] {
        let created: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/items")
                .set_json(listing(lender_id, images))
                .to_request(),
        )
        .await;
        assert_eq!(created["item"]["images"], json!(images));
    }

    let listed: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/items").to_request(),
    )
    .await;
    let items = listed["items"].as_array().expect("items array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["images"], json!(["drill.png", "case.png"]));
    assert_eq!(items[1]["images"], json!([]));
    assert_eq!(items[2]["images"], json!(["bits.png"]));
    assert!(items.iter().all(|item| item["lender_id"] == lender_id));
}

#[rstest]
#[actix_web::test]
async fn the_second_registration_with_an_email_conflicts(lender: Value) {
    let app = app_over(in_memory()).await;
    let register = || {
        test::TestRequest::post()
            .uri("/register")
            .set_json(&lender)
            .to_request()
    };

    let first = test::call_service(&app, register()).await;
    let second = test::call_service(&app, register()).await;

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(second).await;
    assert_eq!(body["message"], "Email already exists.");
}

#[actix_web::test]
async fn welcome_answers_without_a_store() {
    let store = Arc::new(UnconfiguredStore);
    let app = app_over(HttpState::from_repositories(store.clone(), store)).await;

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(body, json!({"message": "Welcome to the TradeBridge backend!"}));
}

#[rstest]
#[case("/get_user_profile?email=a%40b.c")]
#[case("/api/items")]
#[actix_web::test]
async fn store_calls_fail_when_no_store_is_configured(#[case] uri: &str) {
    let store = Arc::new(UnconfiguredStore);
    let app = app_over(HttpState::from_repositories(store.clone(), store)).await;

    let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], UNCONFIGURED_MESSAGE);
    assert_eq!(body["traceId"].as_str(), trace_id.as_deref());
}

#[rstest]
#[case::allowed(FRONTEND, Some(FRONTEND))]
#[case::other_origin("https://evil.example.com", None)]
#[actix_web::test]
async fn cors_admits_only_the_configured_origin(
    #[case] origin: &str,
    #[case] expected: Option<&str>,
) {
    let app = app_over(in_memory()).await;

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, origin))
            .to_request(),
    )
    .await;

    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|value| value.to_str().ok());
    assert_eq!(allowed, expected);
}
