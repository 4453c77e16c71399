pub mod compliance_handler;

pub use compliance_handler::*;
