pub mod training_handler;

pub use training_handler::*;
