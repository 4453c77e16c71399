//! Training suggestions: officers propose trainings, coordinators triage them
//! and can implement an approved suggestion as a scheduled training.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/training-suggestions` | List suggestions with officer names |
//! | POST | `/api/training-suggestions` | Submit a suggestion |
//! | PATCH | `/api/training-suggestions/{id}/status` | Update suggestion status |
//! | POST | `/api/training-suggestions/{id}/implement` | Create a training from a suggestion |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SuggestionService;
