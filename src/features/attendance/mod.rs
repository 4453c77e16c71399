//! Attendance tracking for trainings.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/attendance` | List attendance with officer and training names |
//! | GET | `/api/attendance/officer/{officer_id}` | An officer's attendance history |
//! | POST | `/api/attendance` | Record attendance (upsert per officer and training) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AttendanceService;
