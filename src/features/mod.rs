pub mod attendance;
pub mod compliance;
pub mod cooperatives;
pub mod members;
pub mod profiles;
pub mod registrations;
pub mod suggestions;
pub mod trainings;
