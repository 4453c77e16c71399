//! Training catalog: CRUD plus a registration-count overview.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/trainings` | List trainings |
//! | GET | `/api/trainings/with-metrics` | List trainings with registration counts |
//! | GET | `/api/trainings/{id}` | Get one training |
//! | POST | `/api/trainings` | Create training |
//! | PUT | `/api/trainings/{id}` | Update training |
//! | DELETE | `/api/trainings/{id}` | Delete training |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::TrainingService;
