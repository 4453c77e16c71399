use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::compliance::handlers;
use crate::features::compliance::services::ComplianceService;

/// Create routes for the compliance feature
pub fn routes(service: Arc<ComplianceService>) -> Router {
    Router::new()
        .route(
            "/api/compliance",
            get(handlers::list_compliance).post(handlers::create_compliance),
        )
        .route("/api/compliance/summary", get(handlers::compliance_summary))
        .route(
            "/api/compliance/cooperative/{cooperative_id}",
            get(handlers::list_cooperative_compliance),
        )
        .route(
            "/api/compliance/{id}",
            get(handlers::get_compliance)
                .put(handlers::update_compliance)
                .delete(handlers::delete_compliance),
        )
        .route(
            "/api/compliance/{id}/status",
            patch(handlers::update_compliance_status),
        )
        .with_state(service)
}
