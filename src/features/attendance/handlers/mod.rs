pub mod attendance_handler;

pub use attendance_handler::*;
