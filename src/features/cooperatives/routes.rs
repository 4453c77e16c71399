use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::cooperatives::handlers;
use crate::features::cooperatives::services::CooperativeService;

/// Create routes for the cooperatives feature
pub fn routes(service: Arc<CooperativeService>) -> Router {
    Router::new()
        .route(
            "/api/cooperatives",
            get(handlers::list_cooperatives).post(handlers::create_cooperative),
        )
        .route("/api/cooperatives/summary", get(handlers::cooperative_summary))
        .route(
            "/api/cooperatives/{id}",
            get(handlers::get_cooperative)
                .put(handlers::update_cooperative)
                .delete(handlers::delete_cooperative),
        )
        .route(
            "/api/cooperatives/{id}/status",
            patch(handlers::update_cooperative_status),
        )
        .with_state(service)
}
