use axum::{
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::AppState;
use crate::middleware::request_id::{make_span_with_request_id, UuidRequestId};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(PropagateRequestIdLayer::x_request_id());

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(middleware)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/movies", get(handlers::list_movies))
        .route("/movies/:id", get(handlers::get_movie))
        .route("/movies/:id/watched", post(handlers::toggle_watched))
        .route("/movies/:id/rating", put(handlers::set_rating))
        // Derived views
        .route("/profile", get(handlers::get_profile))
        .route("/recommendations", get(handlers::get_recommendations))
        .route("/stats", get(handlers::get_stats))
        .route("/soundtrack", get(handlers::get_soundtrack))
        // Export / import
        .route(
            "/progress",
            get(handlers::export_progress).put(handlers::import_progress),
        )
}
