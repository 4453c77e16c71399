pub mod member_handler;

pub use member_handler::*;
