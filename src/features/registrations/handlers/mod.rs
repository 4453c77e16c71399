pub mod companion_handler;
pub mod registration_handler;

pub use companion_handler::*;
pub use registration_handler::*;
