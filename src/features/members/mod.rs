//! Cooperative member applications and their review lifecycle.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/members` | List members, optional `?status=` and `?cooperative_id=` filters |
//! | GET | `/api/members/summary` | Status counts |
//! | GET | `/api/members/{id}` | Get a member |
//! | POST | `/api/members` | Enroll a member |
//! | PUT | `/api/members/{id}` | Replace details |
//! | PATCH | `/api/members/{id}/status` | Record a review decision |
//! | DELETE | `/api/members/{id}` | Delete a member |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::MemberService;
