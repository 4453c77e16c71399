use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::trainings::handlers;
use crate::features::trainings::services::TrainingService;

/// Create routes for the trainings feature
pub fn routes(service: Arc<TrainingService>) -> Router {
    Router::new()
        .route(
            "/api/trainings",
            get(handlers::list_trainings).post(handlers::create_training),
        )
        .route(
            "/api/trainings/with-metrics",
            get(handlers::list_trainings_with_metrics),
        )
        .route(
            "/api/trainings/{id}",
            get(handlers::get_training)
                .put(handlers::update_training)
                .delete(handlers::delete_training),
        )
        .with_state(service)
}
