use utoipa::{Modify, OpenApi};

use crate::features::attendance::{dtos as attendance_dtos, handlers as attendance_handlers};
use crate::features::compliance::{
    dtos as compliance_dtos, handlers as compliance_handlers, models as compliance_models,
};
use crate::features::cooperatives::{
    dtos as cooperatives_dtos, handlers as cooperatives_handlers, models as cooperatives_models,
};
use crate::features::members::{
    dtos as members_dtos, handlers as members_handlers, models as members_models,
};
use crate::features::profiles::{dtos as profiles_dtos, handlers as profiles_handlers};
use crate::features::registrations::{
    dtos as registrations_dtos, handlers as registrations_handlers,
};
use crate::features::suggestions::{
    dtos as suggestions_dtos, handlers as suggestions_handlers, models as suggestions_models,
};
use crate::features::trainings::{
    dtos as trainings_dtos, handlers as trainings_handlers, models as trainings_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Profiles
        profiles_handlers::list_profiles,
        profiles_handlers::get_profile,
        // Trainings
        trainings_handlers::list_trainings,
        trainings_handlers::list_trainings_with_metrics,
        trainings_handlers::get_training,
        trainings_handlers::create_training,
        trainings_handlers::update_training,
        trainings_handlers::delete_training,
        // Training registrations
        registrations_handlers::list_registrations,
        registrations_handlers::list_training_roster,
        registrations_handlers::create_registration,
        registrations_handlers::enroll_with_companions,
        // Companion registrations
        registrations_handlers::list_companions,
        registrations_handlers::list_companions_by_training,
        registrations_handlers::create_companion,
        // Attendance
        attendance_handlers::list_attendance,
        attendance_handlers::list_officer_attendance,
        attendance_handlers::record_attendance,
        // Training suggestions
        suggestions_handlers::list_suggestions,
        suggestions_handlers::create_suggestion,
        suggestions_handlers::update_suggestion_status,
        suggestions_handlers::implement_suggestion,
        // Cooperatives
        cooperatives_handlers::list_cooperatives,
        cooperatives_handlers::cooperative_summary,
        cooperatives_handlers::get_cooperative,
        cooperatives_handlers::create_cooperative,
        cooperatives_handlers::update_cooperative,
        cooperatives_handlers::update_cooperative_status,
        cooperatives_handlers::delete_cooperative,
        // Members
        members_handlers::list_members,
        members_handlers::member_summary,
        members_handlers::get_member,
        members_handlers::create_member,
        members_handlers::update_member,
        members_handlers::update_member_status,
        members_handlers::delete_member,
        // Compliance
        compliance_handlers::list_compliance,
        compliance_handlers::compliance_summary,
        compliance_handlers::list_cooperative_compliance,
        compliance_handlers::get_compliance,
        compliance_handlers::create_compliance,
        compliance_handlers::update_compliance,
        compliance_handlers::update_compliance_status,
        compliance_handlers::delete_compliance,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Profiles
            profiles_dtos::ProfileResponseDto,
            ApiResponse<Vec<profiles_dtos::ProfileResponseDto>>,
            ApiResponse<profiles_dtos::ProfileResponseDto>,
            // Trainings
            trainings_models::TrainingStatus,
            trainings_dtos::CreateTrainingDto,
            trainings_dtos::UpdateTrainingDto,
            trainings_dtos::TrainingResponseDto,
            trainings_dtos::TrainingWithMetricsDto,
            ApiResponse<Vec<trainings_dtos::TrainingResponseDto>>,
            ApiResponse<trainings_dtos::TrainingResponseDto>,
            ApiResponse<Vec<trainings_dtos::TrainingWithMetricsDto>>,
            // Registrations
            registrations_dtos::CreateRegistrationDto,
            registrations_dtos::CompanionDto,
            registrations_dtos::EnrollWithCompanionsDto,
            registrations_dtos::OfficerRegistrationOutcome,
            registrations_dtos::EnrollmentResultDto,
            registrations_dtos::RegistrationResponseDto,
            registrations_dtos::RegistrationListItemDto,
            registrations_dtos::TrainingRosterEntryDto,
            registrations_dtos::CreateCompanionDto,
            registrations_dtos::CompanionResponseDto,
            registrations_dtos::CompanionListItemDto,
            ApiResponse<Vec<registrations_dtos::RegistrationListItemDto>>,
            ApiResponse<Vec<registrations_dtos::TrainingRosterEntryDto>>,
            ApiResponse<registrations_dtos::RegistrationResponseDto>,
            ApiResponse<registrations_dtos::EnrollmentResultDto>,
            ApiResponse<Vec<registrations_dtos::CompanionListItemDto>>,
            ApiResponse<registrations_dtos::CompanionResponseDto>,
            // Attendance
            attendance_dtos::RecordAttendanceDto,
            attendance_dtos::AttendanceResponseDto,
            attendance_dtos::AttendanceListItemDto,
            attendance_dtos::OfficerAttendanceDto,
            ApiResponse<Vec<attendance_dtos::AttendanceListItemDto>>,
            ApiResponse<Vec<attendance_dtos::OfficerAttendanceDto>>,
            ApiResponse<attendance_dtos::AttendanceResponseDto>,
            // Training suggestions
            suggestions_models::SuggestionStatus,
            suggestions_dtos::CreateSuggestionDto,
            suggestions_dtos::UpdateSuggestionStatusDto,
            suggestions_dtos::ImplementSuggestionDto,
            suggestions_dtos::SuggestionResponseDto,
            suggestions_dtos::SuggestionListItemDto,
            suggestions_dtos::ImplementationResultDto,
            ApiResponse<Vec<suggestions_dtos::SuggestionListItemDto>>,
            ApiResponse<suggestions_dtos::SuggestionResponseDto>,
            ApiResponse<suggestions_dtos::ImplementationResultDto>,
            // Cooperatives
            cooperatives_models::CooperativeStatus,
            cooperatives_models::CooperativeSummary,
            cooperatives_dtos::CreateCooperativeDto,
            cooperatives_dtos::UpdateCooperativeDto,
            cooperatives_dtos::UpdateCooperativeStatusDto,
            cooperatives_dtos::CooperativeResponseDto,
            ApiResponse<Vec<cooperatives_dtos::CooperativeResponseDto>>,
            ApiResponse<cooperatives_dtos::CooperativeResponseDto>,
            ApiResponse<cooperatives_models::CooperativeSummary>,
            // Members
            members_models::MemberStatus,
            members_models::MemberSummary,
            members_dtos::CreateMemberDto,
            members_dtos::UpdateMemberDto,
            members_dtos::UpdateMemberStatusDto,
            members_dtos::MemberResponseDto,
            members_dtos::MemberWithCooperativeDto,
            ApiResponse<Vec<members_dtos::MemberWithCooperativeDto>>,
            ApiResponse<members_dtos::MemberWithCooperativeDto>,
            ApiResponse<members_dtos::MemberResponseDto>,
            ApiResponse<members_models::MemberSummary>,
            // Compliance
            compliance_models::ComplianceStatus,
            compliance_models::ComplianceSummary,
            compliance_dtos::CreateComplianceDto,
            compliance_dtos::UpdateComplianceDto,
            compliance_dtos::UpdateComplianceStatusDto,
            compliance_dtos::ComplianceResponseDto,
            compliance_dtos::ComplianceWithCooperativeDto,
            ApiResponse<Vec<compliance_dtos::ComplianceWithCooperativeDto>>,
            ApiResponse<compliance_dtos::ComplianceWithCooperativeDto>,
            ApiResponse<compliance_dtos::ComplianceResponseDto>,
            ApiResponse<compliance_models::ComplianceSummary>,
        )
    ),
    tags(
        (name = "profiles", description = "Officer profiles"),
        (name = "trainings", description = "Training catalog and schedules"),
        (name = "training-registrations", description = "Officer registrations for trainings"),
        (name = "companion-registrations", description = "Companion registrations for trainings"),
        (name = "attendance", description = "Training attendance records"),
        (name = "training-suggestions", description = "Officer training suggestions and implementation"),
        (name = "cooperatives", description = "Cooperative registrations and review"),
        (name = "members", description = "Cooperative member applications and review"),
        (name = "compliance", description = "Cooperative compliance requirements"),
    ),
    info(
        title = "Cooperative Portal API",
        version = "0.1.0",
        description = "API documentation for the cooperative development office portal",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
