mod training_service;

pub use training_service::TrainingService;
