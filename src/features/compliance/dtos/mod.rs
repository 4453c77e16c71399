mod compliance_dto;

pub use compliance_dto::{
    ComplianceResponseDto, ComplianceWithCooperativeDto, CreateComplianceDto, UpdateComplianceDto,
    UpdateComplianceStatusDto,
};
