mod companion_dto;
mod registration_dto;

pub use companion_dto::{CompanionListItemDto, CompanionResponseDto, CreateCompanionDto};
pub use registration_dto::{
    CompanionDto, CreateRegistrationDto, EnrollWithCompanionsDto, EnrollmentResultDto,
    OfficerRegistrationOutcome, RegistrationListItemDto, RegistrationResponseDto,
    TrainingRosterEntryDto,
};
