//! Training registrations and companion guests.
//!
//! The enroll-with-companions endpoint is the one multi-statement write in
//! this feature: the officer registration and all companion rows commit or
//! roll back together.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/training-registrations` | List registrations |
//! | GET | `/api/training-registrations/training/{id}` | Roster of one training |
//! | POST | `/api/training-registrations` | Register one officer (idempotent) |
//! | POST | `/api/training-registrations/enroll-with-companions` | Atomic enrollment |
//! | GET | `/api/companion-registrations` | List companions |
//! | GET | `/api/companion-registrations/training/{id}` | Companions for one training |
//! | POST | `/api/companion-registrations` | Register one companion |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{CompanionService, RegistrationService};
