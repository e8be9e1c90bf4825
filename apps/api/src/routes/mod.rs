pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::diagnosis::handlers;
use crate::state::AppState;

/// Assembles the application router: diagnosis API, liveness, and the static
/// SPA fallback for everything unmatched.
pub fn build_router(state: AppState) -> Router {
    // Unknown paths fall through to index.html so client-side routing works.
    let spa = ServeDir::new(&state.config.static_dir)
        .not_found_service(ServeFile::new(state.config.static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/diagnose/:category", post(handlers::handle_diagnose))
        .fallback_service(spa)
        .with_state(state)
}
