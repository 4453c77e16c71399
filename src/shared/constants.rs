/// Maximum number of companions an officer may bring to one training
pub const MAX_COMPANIONS_PER_ENROLLMENT: usize = 3;

/// Fallback capacity when a suggestion is implemented without an override
pub const DEFAULT_TRAINING_CAPACITY: i32 = 50;

/// Fallback start time when a suggestion is implemented without an override
pub const DEFAULT_TRAINING_TIME: &str = "09:00";

/// Placeholder for venue/speaker fields that are still to be decided
pub const FIELD_TBD: &str = "TBD";
