use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::profiles::handlers;
use crate::features::profiles::services::ProfileService;

/// Create routes for the profiles feature
pub fn routes(service: Arc<ProfileService>) -> Router {
    Router::new()
        .route("/api/profiles", get(handlers::list_profiles))
        .route("/api/profiles/{id}", get(handlers::get_profile))
        .with_state(service)
}
