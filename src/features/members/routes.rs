use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::members::handlers;
use crate::features::members::services::MemberService;

/// Create routes for the members feature
pub fn routes(service: Arc<MemberService>) -> Router {
    Router::new()
        .route(
            "/api/members",
            get(handlers::list_members).post(handlers::create_member),
        )
        .route("/api/members/summary", get(handlers::member_summary))
        .route(
            "/api/members/{id}",
            get(handlers::get_member)
                .put(handlers::update_member)
                .delete(handlers::delete_member),
        )
        .route(
            "/api/members/{id}/status",
            patch(handlers::update_member_status),
        )
        .with_state(service)
}
