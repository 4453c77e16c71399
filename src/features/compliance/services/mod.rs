mod compliance_service;

pub use compliance_service::{ComplianceFilter, ComplianceService};
