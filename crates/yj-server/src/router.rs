use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Landing page and liveness
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        // Divination
        .route("/api/divine/coin", post(handlers::divine::coin))
        .route("/api/divine/hex/{code}", get(handlers::divine::hexagram))
        .route("/api/divine/interpret", post(handlers::divine::interpret))
        .route("/api/divine/line", post(handlers::divine::line))
        // Interpretation
        .route("/api/ai", post(handlers::ai::interpret));

    let static_dir = &state.config().static_dir;
    if static_dir.is_dir() {
        router = router.nest_service("/static", ServeDir::new(static_dir));
    } else {
        tracing::debug!(dir = %static_dir.display(), "static directory missing, not served");
    }

    router
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
