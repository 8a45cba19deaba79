pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/profile", get(handlers::handle_get_profile))
        .route("/api/v1/chat", post(handlers::handle_chat))
        .route("/api/v1/research", post(handlers::handle_research))
        .route("/api/v1/fit-analysis", post(handlers::handle_fit_analysis))
        .route("/api/v1/url-analysis", post(handlers::handle_url_analysis))
        .route(
            "/api/v1/generate/letter",
            post(handlers::handle_generate_letter),
        )
        .route("/api/v1/generate/cv", post(handlers::handle_generate_cv))
        .with_state(state)
}
