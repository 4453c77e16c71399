mod training_dto;

pub use training_dto::{
    CreateTrainingDto, TrainingResponseDto, TrainingWithMetricsDto, UpdateTrainingDto,
};
