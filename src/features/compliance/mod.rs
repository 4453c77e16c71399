//! Compliance requirements per cooperative and their review lifecycle.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/compliance` | List records, optional `?status=`, `?cooperative_id=`, `?year=` |
//! | GET | `/api/compliance/summary` | Status counts incl. past-due |
//! | GET | `/api/compliance/cooperative/{cooperative_id}` | A cooperative's records |
//! | GET | `/api/compliance/{id}` | Get a record |
//! | POST | `/api/compliance` | Create a requirement |
//! | PUT | `/api/compliance/{id}` | Replace details |
//! | PATCH | `/api/compliance/{id}/status` | Record a status decision |
//! | DELETE | `/api/compliance/{id}` | Delete a record |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ComplianceFilter, ComplianceService};
