mod training;

pub use training::{Training, TrainingStatus, TrainingWithMetrics};
