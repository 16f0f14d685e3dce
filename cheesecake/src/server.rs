use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};

use crate::{AppState, handlers};

/// Full application router: JSON API, the data directory and the static site.
pub fn router(state: AppState) -> Router {
    let data_dir = ServeDir::new(&state.config.data_dir);
    let public_dir = ServeDir::new(&state.config.public_dir).fallback(ServeFile::new(
        std::path::Path::new(&state.config.public_dir).join("index.html"),
    ));

    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/comments",
            get(handlers::comments::list_comments).post(handlers::comments::create_comment),
        )
        .route(
            "/comments",
            get(handlers::comments::list_comments).post(handlers::comments::create_comment),
        )
        .route(
            "/api/gallery",
            get(handlers::gallery::list_gallery).post(handlers::gallery::create_gallery_item),
        )
        .route(
            "/gallery",
            get(handlers::gallery::list_gallery).post(handlers::gallery::create_gallery_item),
        )
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route("/api/locations", get(handlers::locations::list_locations))
        .route("/api/locations/{id}", get(handlers::locations::get_location))
        .nest_service("/data", data_dir)
        .fallback_service(public_dir)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "cheesecake",
        "backend": state.backend.name()
    }))
}
