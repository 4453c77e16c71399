pub mod cooperative_handler;

pub use cooperative_handler::*;
