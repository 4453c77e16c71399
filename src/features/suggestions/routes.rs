use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::suggestions::handlers;
use crate::features::suggestions::services::SuggestionService;

/// Create routes for the training suggestions feature
pub fn routes(service: Arc<SuggestionService>) -> Router {
    Router::new()
        .route(
            "/api/training-suggestions",
            get(handlers::list_suggestions).post(handlers::create_suggestion),
        )
        .route(
            "/api/training-suggestions/{id}/status",
            patch(handlers::update_suggestion_status),
        )
        .route(
            "/api/training-suggestions/{id}/implement",
            post(handlers::implement_suggestion),
        )
        .with_state(service)
}
