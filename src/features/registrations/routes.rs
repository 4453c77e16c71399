use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::registrations::handlers;
use crate::features::registrations::services::{CompanionService, RegistrationService};

/// Create routes for registrations and companion registrations
pub fn routes(
    registrations: Arc<RegistrationService>,
    companions: Arc<CompanionService>,
) -> Router {
    let registration_routes = Router::new()
        .route(
            "/api/training-registrations",
            get(handlers::list_registrations).post(handlers::create_registration),
        )
        .route(
            "/api/training-registrations/training/{training_id}",
            get(handlers::list_training_roster),
        )
        .route(
            "/api/training-registrations/enroll-with-companions",
            post(handlers::enroll_with_companions),
        )
        .with_state(registrations);

    let companion_routes = Router::new()
        .route(
            "/api/companion-registrations",
            get(handlers::list_companions).post(handlers::create_companion),
        )
        .route(
            "/api/companion-registrations/training/{training_id}",
            get(handlers::list_companions_by_training),
        )
        .with_state(companions);

    registration_routes.merge(companion_routes)
}
