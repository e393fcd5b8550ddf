use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use titles_api::adapters::memory::{InMemoryBackupBucket, InMemoryTitleStore, RecordingEventQueue};
use titles_api::{create_titles_router, AppState, TitleService};
use tower::ServiceExt;

struct TestApp {
    store: Arc<InMemoryTitleStore>,
    queue: Arc<RecordingEventQueue>,
    bucket: Arc<InMemoryBackupBucket>,
    router: Router,
}

fn test_app() -> TestApp {
    let store = Arc::new(InMemoryTitleStore::new());
    let queue = Arc::new(RecordingEventQueue::new());
    let bucket = Arc::new(InMemoryBackupBucket::new());
    let service = TitleService::new(store.clone(), queue.clone(), bucket.clone());
    TestApp {
        store,
        queue,
        bucket,
        router: create_titles_router(AppState::new(service)),
    }
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

fn dune() -> Value {
    json!({"isbn": "111", "name": "Dune", "description": "Sci-fi"})
}

#[tokio::test]
async fn test_put_then_get_round_trip() {
    let app = test_app();

    let (status, _) = send(&app.router, Method::PUT, "/api/titles", Some(dune())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app.router, Method::GET, "/api/titles/111", None).await;
    assert_eq!(status, StatusCode::OK);
    let title: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(title, dune());

    let sent: Vec<Value> = app
        .queue
        .messages()
        .iter()
        .map(|m| serde_json::from_str(m).unwrap())
        .collect();
    assert_eq!(sent, vec![json!({"eventType": "PUT", "payload": dune()})]);
}

#[tokio::test]
async fn test_post_is_an_upsert() {
    let app = test_app();

    let (status, _) = send(&app.router, Method::POST, "/api/titles", Some(dune())).await;
    assert_eq!(status, StatusCode::OK);

    let updated = json!({"isbn": "111", "name": "Dune", "description": "Classic"});
    let (status, _) = send(&app.router, Method::POST, "/api/titles", Some(updated.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app.router, Method::GET, "/api/titles/111", None).await;
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), updated);
    assert_eq!(app.queue.messages().len(), 2);
}

#[tokio::test]
async fn test_get_missing_title_is_404_without_body() {
    let app = test_app();

    let (status, body) = send(&app.router, Method::GET, "/api/titles/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_delete_missing_title_succeeds_and_emits_event() {
    let app = test_app();

    let (status, _) = send(&app.router, Method::DELETE, "/api/titles/111", None).await;

    assert_eq!(status, StatusCode::OK);
    let sent: Value = serde_json::from_str(&app.queue.messages()[0]).unwrap();
    assert_eq!(sent, json!({"eventType": "DELETE", "payload": {"isbn": "111"}}));
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let app = test_app();
    send(&app.router, Method::PUT, "/api/titles", Some(dune())).await;

    let (status, _) = send(&app.router, Method::DELETE, "/api/titles/111", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app.router, Method::GET, "/api/titles/111", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_queue_failure_surfaces_500_but_store_keeps_write() {
    let app = test_app();
    app.queue.set_failing(true);

    let (status, body) = send(&app.router, Method::PUT, "/api/titles", Some(dune())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());

    let (status, body) = send(&app.router, Method::GET, "/api/titles/111", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), dune());
}

#[tokio::test]
async fn test_store_failure_is_500_and_publishes_nothing() {
    let app = test_app();
    app.store.set_failing(true);

    let (status, _) = send(&app.router, Method::PUT, "/api/titles", Some(dune())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(&app.router, Method::GET, "/api/titles/111", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(app.queue.messages().is_empty());
}

#[tokio::test]
async fn test_empty_isbn_is_bad_request() {
    let app = test_app();

    let (status, _) = send(
        &app.router,
        Method::PUT,
        "/api/titles",
        Some(json!({"isbn": "", "name": "Nameless"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_body_without_isbn_is_rejected() {
    let app = test_app();

    let (status, _) = send(
        &app.router,
        Method::PUT,
        "/api/titles",
        Some(json!({"name": "Dune"})),
    )
    .await;

    assert!(status.is_client_error());
    assert!(app.queue.messages().is_empty());
}

#[tokio::test]
async fn test_queue_probe_endpoint() {
    let app = test_app();

    let (status, _) = send(&app.router, Method::GET, "/api/titles/fail-on-sqs-consume", None).await;
    assert_eq!(status, StatusCode::OK);

    app.queue.set_failing(true);
    let (status, _) = send(&app.router, Method::GET, "/api/titles/fail-on-sqs-consume", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_backup_bucket_probe_endpoint() {
    let app = test_app();
    let uri = "/api/titles/fail-on-s3-backup-bucket-access";

    let (status, _) = send(&app.router, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK);

    app.bucket.set_reachable(false);
    let (status, _) = send(&app.router, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_probe_paths_do_not_hit_title_lookup() {
    let app = test_app();
    app.store.set_failing(true);

    // A title lookup would fail against the broken store.
    let (status, _) = send(&app.router, Method::GET, "/api/titles/fail-on-sqs-consume", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_title_whose_isbn_matches_a_diagnostic_segment() {
    let app = test_app();

    for isbn in ["fail-on-sqs-consume", "fail-on-s3-backup-bucket-access"] {
        let (status, _) = send(
            &app.router,
            Method::PUT,
            "/api/titles",
            Some(json!({"isbn": isbn, "name": "Edge", "description": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app.router, Method::DELETE, &format!("/api/titles/{isbn}"), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    assert!(app.store.is_empty());
    let deleted: Vec<Value> = app
        .queue
        .messages()
        .iter()
        .map(|m| serde_json::from_str::<Value>(m).unwrap())
        .filter(|event| event["eventType"] == "DELETE")
        .collect();
    assert_eq!(
        deleted,
        vec![
            json!({"eventType": "DELETE", "payload": {"isbn": "fail-on-sqs-consume"}}),
            json!({"eventType": "DELETE", "payload": {"isbn": "fail-on-s3-backup-bucket-access"}}),
        ]
    );
}
