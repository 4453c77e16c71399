//! Cooperative registrations and their review lifecycle.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/cooperatives` | List cooperatives, optional `?status=` filter |
//! | GET | `/api/cooperatives/summary` | Status counts |
//! | GET | `/api/cooperatives/{id}` | Get a cooperative |
//! | POST | `/api/cooperatives` | Register a cooperative |
//! | PUT | `/api/cooperatives/{id}` | Replace details |
//! | PATCH | `/api/cooperatives/{id}/status` | Record a review decision |
//! | DELETE | `/api/cooperatives/{id}` | Delete a cooperative |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CooperativeService;
