use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Quiz taxonomy and catalog
        .route("/features", get(handlers::list_features))
        .route("/courses", get(handlers::list_courses))
        // Prediction
        .route("/predict", post(handlers::predict))
        .nest("/api/ml", ml_routes())
        .fallback(handlers::not_found)
        // Wrong method on a known path gets the same body as an unknown path
        .method_not_allowed_fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        // Outermost, so the trace span already sees the request ID
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Paths used by the web frontend
fn ml_routes() -> Router<AppState> {
    Router::new().route("/predict-career", post(handlers::predict))
}
