//! End-to-end tests for the HTTP API.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use codeshare_core::{ManualClock, Repository, ShareService};
use codeshare_gateway::model::{CodeResponse, CreateCodeResponse, ErrorResponse};
use codeshare_gateway::{App, AppState};
use codeshare_generator::SeqGenerator;
use codeshare_storage::InMemoryRepository;
use codeshare_store::{ShareStore, StoreConfig};
use jiff::{SignedDuration, Timestamp};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

type TestStore = ShareStore<InMemoryRepository, SeqGenerator, ManualClock>;

struct TestApp {
    router: Router,
    store: Arc<TestStore>,
    clock: ManualClock,
}

fn start() -> Timestamp {
    "2026-03-01T12:00:00Z".parse().unwrap()
}

fn test_app_with(config: StoreConfig) -> TestApp {
    let clock = ManualClock::new(start());
    let body_limit = App::body_limit_for(config.max_payload_bytes);
    let store = Arc::new(ShareStore::with_clock(
        InMemoryRepository::new(),
        SeqGenerator::with_prefix("cs"),
        clock.clone(),
        config,
    ));
    let router = App::router(AppState::new(store.clone()), body_limit);
    TestApp {
        router,
        store,
        clock,
    }
}

fn test_app() -> TestApp {
    test_app_with(StoreConfig::default())
}

async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

async fn post_code(router: &Router, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/code")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn get_code(router: &Router, id: &str) -> Response {
    let request = Request::builder()
        .uri(format!("/api/code/{id}"))
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn main_snippet(expires_in: Value) -> Value {
    json!({
        "code": "int main(){}",
        "input": "",
        "fileName": "Main",
        "allowEdit": false,
        "expiresIn": expires_in,
    })
}

#[tokio::test]
async fn health_endpoint() {
    let app = test_app();

    let response = send(
        &app.router,
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = read_json(response).await;
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn share_lifecycle_with_expiry() {
    let app = test_app();

    let response = post_code(&app.router, main_snippet(json!(1))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: CreateCodeResponse = read_json(response).await;
    assert_eq!(created.id.as_str(), "cs000000");
    assert!(!created.allow_edit);

    let response = get_code(&app.router, created.id.as_str()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let record: CodeResponse = read_json(response).await;
    assert_eq!(record.id, created.id);
    assert_eq!(record.code, "int main(){}");
    assert_eq!(record.input, "");
    assert_eq!(record.file_name, "Main");
    assert_eq!(record.created_at, start());
    assert_eq!(
        record.expires_at,
        Some(start() + SignedDuration::from_hours(1))
    );
    assert!(record.is_public);
    assert!(!record.allow_edit);
    assert_eq!(record.views, 1);

    app.clock.advance(SignedDuration::from_hours(2));

    let response = get_code(&app.router, created.id.as_str()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "code not found");
}

#[tokio::test]
async fn get_record_json_shape() {
    let app = test_app();

    let body = json!({
        "code": "fn main() {}",
        "input": "1 2",
        "fileName": "main.rs",
        "isPublic": false,
        "allowEdit": true,
        "expiresIn": null,
    });
    let created: CreateCodeResponse = read_json(post_code(&app.router, body).await).await;
    assert!(created.allow_edit);

    let value: Value = read_json(get_code(&app.router, created.id.as_str()).await).await;
    assert_eq!(
        value,
        json!({
            "id": "cs000000",
            "code": "fn main() {}",
            "input": "1 2",
            "fileName": "main.rs",
            "createdAt": "2026-03-01T12:00:00Z",
            "isPublic": false,
            "allowEdit": true,
            "views": 1
        })
    );
}

#[tokio::test]
async fn defaults_to_public_read_only_for_a_day() {
    let app = test_app();

    let body = json!({"code": "x", "input": "", "fileName": "Main"});
    let created: CreateCodeResponse = read_json(post_code(&app.router, body).await).await;
    assert!(!created.allow_edit);

    let record: CodeResponse = read_json(get_code(&app.router, created.id.as_str()).await).await;
    assert!(record.is_public);
    assert_eq!(
        record.expires_at,
        Some(start() + SignedDuration::from_hours(24))
    );
}

#[tokio::test]
async fn views_increase_per_request() {
    let app = test_app();
    let created: CreateCodeResponse =
        read_json(post_code(&app.router, main_snippet(json!(24))).await).await;

    for expected in 1..=4 {
        let record: CodeResponse =
            read_json(get_code(&app.router, created.id.as_str()).await).await;
        assert_eq!(record.views, expected);
    }
}

#[tokio::test]
async fn unknown_and_malformed_ids_are_not_found() {
    let app = test_app();

    for id in ["doesnotexist", "cs000000", "with%20space", "a.b"] {
        let response = get_code(&app.router, id).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "id {id}");
    }

    let too_long = "a".repeat(65);
    assert_eq!(
        get_code(&app.router, &too_long).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn non_positive_expiry_is_rejected() {
    let app = test_app();

    for expires_in in [json!(-5), json!(0)] {
        let response = post_code(&app.router, main_snippet(expires_in)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = read_json(response).await;
        assert!(error.error.contains("ttl must be positive"), "{}", error.error);
    }

    assert_eq!(app.store.repository().len().await.unwrap(), 0);
    assert_eq!(app.store.sweep().await.unwrap(), 0);
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let app = test_app();

    let missing_fields = post_code(&app.router, json!({"code": "x"})).await;
    assert_eq!(missing_fields.status(), StatusCode::BAD_REQUEST);

    let wrong_type = post_code(&app.router, main_snippet(json!("soon"))).await;
    assert_eq!(wrong_type.status(), StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/code")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    assert_eq!(send(&app.router, request).await.status(), StatusCode::BAD_REQUEST);

    assert_eq!(app.store.repository().len().await.unwrap(), 0);
}

#[tokio::test]
async fn oversized_code_is_rejected() {
    let app = test_app_with(StoreConfig::builder().max_payload_bytes(1024).build());

    let body = json!({"code": "a".repeat(2000), "input": "", "fileName": "Main"});
    let response = post_code(&app.router, body).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "code is 2000 bytes, exceeding the 1024 byte limit");

    assert_eq!(app.store.repository().len().await.unwrap(), 0);
}

#[tokio::test]
async fn oversized_body_is_rejected_before_parsing() {
    let app = test_app_with(StoreConfig::builder().max_payload_bytes(1024).build());

    let body = json!({
        "code": "a".repeat(200 * 1024),
        "input": "",
        "fileName": "Main",
    });
    let response = post_code(&app.router, body).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn sweep_after_expiry_keeps_share_gone() {
    let app = test_app();
    let created: CreateCodeResponse =
        read_json(post_code(&app.router, main_snippet(json!(0.5))).await).await;

    app.clock.advance(SignedDuration::from_mins(31));
    assert_eq!(app.store.sweep().await.unwrap(), 1);
    assert_eq!(app.store.repository().len().await.unwrap(), 0);

    let response = get_code(&app.router, created.id.as_str()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_count_every_view() {
    let app = test_app();
    let created: CreateCodeResponse =
        read_json(post_code(&app.router, main_snippet(json!(1))).await).await;

    let mut handles = vec![];
    for _ in 0..40 {
        let router = app.router.clone();
        let id = created.id.to_string();
        handles.push(tokio::spawn(async move {
            let record: CodeResponse = read_json(get_code(&router, &id).await).await;
            record.views
        }));
    }

    let mut views = Vec::new();
    for handle in handles {
        views.push(handle.await.unwrap());
    }
    views.sort_unstable();
    assert_eq!(views, (1..=40).collect::<Vec<u64>>());
}

/// Fails every call as a storage outage would.
struct UnavailableService;

#[async_trait::async_trait]
impl ShareService for UnavailableService {
    async fn create(
        &self,
        _: codeshare_core::CreateParams,
    ) -> codeshare_core::error::Result<codeshare_core::Created> {
        Err(codeshare_core::ShareError::StorageUnavailable(
            "connection refused".to_string(),
        ))
    }

    async fn fetch(
        &self,
        _: &codeshare_core::ShareId,
    ) -> codeshare_core::error::Result<codeshare_core::ShareRecord> {
        Err(codeshare_core::ShareError::StorageUnavailable(
            "connection refused".to_string(),
        ))
    }

    async fn sweep(&self) -> codeshare_core::error::Result<usize> {
        Ok(0)
    }
}

#[tokio::test]
async fn storage_failures_hide_details() {
    let router = App::router(AppState::new(Arc::new(UnavailableService)), 64 * 1024);

    let response = post_code(&router, main_snippet(json!(1))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "internal storage error");

    let response = get_code(&router, "abc123").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
