use super::GuidObject;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PositionStatus {
    Active,
    Inactive,
    Frozen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ExemptionType {
    Exempt,
    NonExempt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum CompensationType {
    Salary,
    Wages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ReportsToType {
    Primary,
    Alternative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportsTo {
    pub position: GuidObject,
    #[serde(rename = "type")]
    pub reports_to_type: ReportsToType,
}

/// Institution position, schemas v7 and v11.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionPosition {
    pub id: String,
    pub campus: GuidObject,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub status: PositionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bargaining_unit: Option<GuidObject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reports_to: Vec<ReportsTo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemption_type: Option<ExemptionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensation_type: Option<CompensationType>,
    pub start_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_on: Option<NaiveDate>,
}

/// Institution position, schema v12. Adds the owning departments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionPosition2 {
    pub id: String,
    pub campus: GuidObject,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub status: PositionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bargaining_unit: Option<GuidObject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reports_to: Vec<ReportsTo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemption_type: Option<ExemptionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensation_type: Option<CompensationType>,
    pub start_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<GuidObject>,
}

impl From<InstitutionPosition2> for InstitutionPosition {
    fn from(position: InstitutionPosition2) -> Self {
        Self {
            id: position.id,
            campus: position.campus,
            title: position.title,
            code: position.code,
            status: position.status,
            bargaining_unit: position.bargaining_unit,
            reports_to: position.reports_to,
            exemption_type: position.exemption_type,
            compensation_type: position.compensation_type,
            start_on: position.start_on,
            end_on: position.end_on,
        }
    }
}
