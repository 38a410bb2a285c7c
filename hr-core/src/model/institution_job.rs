use super::GuidObject;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum JobStatus {
    Active,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum JobPreference {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SupervisorType {
    Primary,
    Alternative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JobSupervisor {
    pub supervisor: GuidObject,
    #[serde(rename = "type")]
    pub supervisor_type: SupervisorType,
}

/// Institution job, schema v8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionJobs {
    pub id: String,
    pub person: GuidObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<GuidObject>,
    pub position: GuidObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub start_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_on: Option<NaiveDate>,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<GuidObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<JobPreference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supervisors: Vec<JobSupervisor>,
}

/// Institution job, schema v11. Adds pay class and grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionJobs2 {
    pub id: String,
    pub person: GuidObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<GuidObject>,
    pub position: GuidObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub start_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_on: Option<NaiveDate>,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<GuidObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<JobPreference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supervisors: Vec<JobSupervisor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_class: Option<GuidObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

/// Institution job, schema v12. Adds the reason for the last job change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionJobs3 {
    pub id: String,
    pub person: GuidObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<GuidObject>,
    pub position: GuidObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub start_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_on: Option<NaiveDate>,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<GuidObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<JobPreference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supervisors: Vec<JobSupervisor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_class: Option<GuidObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_change_reason: Option<GuidObject>,
}

impl From<InstitutionJobs3> for InstitutionJobs2 {
    fn from(job: InstitutionJobs3) -> Self {
        Self {
            id: job.id,
            person: job.person,
            employer: job.employer,
            position: job.position,
            department: job.department,
            start_on: job.start_on,
            end_on: job.end_on,
            status: job.status,
            classification: job.classification,
            preference: job.preference,
            supervisors: job.supervisors,
            pay_class: job.pay_class,
            grade: job.grade,
        }
    }
}

impl From<InstitutionJobs3> for InstitutionJobs {
    fn from(job: InstitutionJobs3) -> Self {
        Self {
            id: job.id,
            person: job.person,
            employer: job.employer,
            position: job.position,
            department: job.department,
            start_on: job.start_on,
            end_on: job.end_on,
            status: job.status,
            classification: job.classification,
            preference: job.preference,
            supervisors: job.supervisors,
        }
    }
}
