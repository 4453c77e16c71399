mod cooperative;

pub use cooperative::{Cooperative, CooperativeStatus, CooperativeSummary};
