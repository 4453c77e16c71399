mod companion_service;
mod registration_service;

pub use companion_service::CompanionService;
pub use registration_service::RegistrationService;
