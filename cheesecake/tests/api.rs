use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use cheesecake::{
    AppState,
    backends::{Backend, document::DocumentBackend, static_files::StaticBackend},
    config::Config,
    db::Database,
    server,
};

fn app(backend: Arc<dyn Backend>, data_dir: &std::path::Path) -> Router {
    let config = Config {
        data_dir: data_dir.to_string_lossy().into_owned(),
        public_dir: data_dir.to_string_lossy().into_owned(),
        ..Config::default()
    };
    server::router(AppState {
        backend,
        config: Arc::new(config),
    })
}

fn document_app(dir: &tempfile::TempDir) -> Router {
    let db = Database::in_memory().unwrap();
    app(Arc::new(DocumentBackend::new(Arc::new(db))), dir.path())
}

fn static_app(dir: &tempfile::TempDir) -> Router {
    app(Arc::new(StaticBackend::new(dir.path())), dir.path())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn words(n: usize) -> String {
    vec!["safari"; n].join(" ")
}

#[tokio::test]
async fn test_health_reports_backend() {
    let dir = tempfile::tempdir().unwrap();
    let response = static_app(&dir).oneshot(get("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["service"], "cheesecake");
    assert_eq!(body["backend"], "static");
}

#[tokio::test]
async fn test_fifty_word_comment_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let app = document_app(&dir);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/comments",
            json!({ "clientName": "Achieng", "description": words(50), "rating": 5 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["clientName"], "Achieng");

    let response = app.oneshot(get("/api/comments?limit=5")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = json_body(response).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_fifty_one_word_comment_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let response = document_app(&dir)
        .oneshot(post_json(
            "/comments",
            json!({ "name": "Achieng", "comment": words(51) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().contains("50 words"));
}

#[tokio::test]
async fn test_static_mode_refuses_writes() {
    let dir = tempfile::tempdir().unwrap();
    let response = static_app(&dir)
        .oneshot(post_json("/api/comments", json!({ "description": "Lovely trip" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().starts_with("Running in static mode"));
}

#[tokio::test]
async fn test_static_mode_lists_data_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("gallery.json"),
        r#"[{"id": "g1", "clientName": "Baraka", "description": "Sunrise", "location": "Amboseli",
             "images": ["/img/a.jpg"], "createdAt": "2026-08-01T06:00:00Z"}]"#,
    )
    .unwrap();

    let response = static_app(&dir).oneshot(get("/gallery")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body[0]["location"], "Amboseli");
}

#[tokio::test]
async fn test_data_directory_is_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("trips.json"), r#"[{"id": "t1", "title": "Mara"}]"#).unwrap();

    let response = static_app(&dir).oneshot(get("/data/trips.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body[0]["title"], "Mara");
}

#[tokio::test]
async fn test_gallery_validation_through_http() {
    let dir = tempfile::tempdir().unwrap();
    let response = document_app(&dir)
        .oneshot(post_json(
            "/api/gallery",
            json!({
                "clientName": "Baraka",
                "description": "Too many pictures",
                "location": "Tsavo",
                "images": ["a.jpg", "b.jpg", "c.jpg", "d.jpg"]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_locations() {
    let dir = tempfile::tempdir().unwrap();
    let app = static_app(&dir);

    let response = app.clone().oneshot(get("/api/locations")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(10));
    assert_eq!(body[0]["id"], "mara");

    let response = app.clone().oneshot(get("/api/locations/mara")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["name"], "Mara");
    assert!(body["summary"].is_object());

    let response = app.oneshot(get("/api/locations/atlantis")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_mistyped_fields_get_json_error_body() {
    let dir = tempfile::tempdir().unwrap();
    let app = document_app(&dir);

    let cases = [
        ("/api/comments", json!({ "description": "Great trip", "rating": 300 })),
        ("/api/comments", json!({ "description": 42 })),
        ("/api/gallery", json!({ "clientName": "Baraka", "images": "a.jpg" })),
        ("/api/bookings", json!({ "clientName": "Amina", "numberOfPeople": "two" })),
    ];

    for (uri, body) in cases {
        let response = app.clone().oneshot(post_json(uri, body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = json_body(response).await;
        assert!(
            body["message"].as_str().unwrap().starts_with("Invalid request body"),
            "{body}"
        );
    }
}

#[tokio::test]
async fn test_unparseable_body_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let request = Request::builder()
        .method("POST")
        .uri("/api/comments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"description\": "))
        .unwrap();

    let response = document_app(&dir).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["message"].is_string());
}

#[tokio::test]
async fn test_booking_is_created_pending() {
    let dir = tempfile::tempdir().unwrap();
    let response = document_app(&dir)
        .oneshot(post_json(
            "/api/bookings",
            json!({
                "tripId": "mara-explorer",
                "clientName": "Amina",
                "email": "amina@example.com",
                "numberOfPeople": 2,
                "bookingDate": "2026-12-20"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["status"], "pending");
    assert_eq!(body["trip_id"], "mara-explorer");
    assert_eq!(body["booking_date"], "2026-12-20");
}

#[tokio::test]
async fn test_booking_requires_email() {
    let dir = tempfile::tempdir().unwrap();
    let response = document_app(&dir)
        .oneshot(post_json("/api/bookings", json!({ "clientName": "Amina" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["message"], "email is required");
}

#[tokio::test]
async fn test_static_mode_refuses_bookings() {
    let dir = tempfile::tempdir().unwrap();
    let response = static_app(&dir)
        .oneshot(post_json(
            "/api/bookings",
            json!({ "clientName": "Amina", "email": "amina@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
