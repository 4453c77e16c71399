mod companion;
mod registration;

pub use companion::{CompanionRegistration, CompanionWithContext};
pub use registration::{RegistrationWithContext, RosterEntry, TrainingRegistration};
