mod compliance;

pub use compliance::{
    ComplianceRecord, ComplianceStatus, ComplianceSummary, ComplianceWithCooperative,
};
