mod suggestion;

pub use suggestion::{SuggestionStatus, SuggestionWithOfficer, TrainingSuggestion};
