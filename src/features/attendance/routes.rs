use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::attendance::handlers;
use crate::features::attendance::services::AttendanceService;

/// Create routes for the attendance feature
pub fn routes(service: Arc<AttendanceService>) -> Router {
    Router::new()
        .route(
            "/api/attendance",
            get(handlers::list_attendance).post(handlers::record_attendance),
        )
        .route(
            "/api/attendance/officer/{officer_id}",
            get(handlers::list_officer_attendance),
        )
        .with_state(service)
}
