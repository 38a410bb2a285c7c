use super::GuidObject;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeStatus {
    Active,
    Terminated,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ContractType {
    FullTime,
    PartTime,
    Contractual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeContract {
    #[serde(rename = "type")]
    pub contract_type: ContractType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<GuidObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum RehireEligibility {
    Eligible,
    Ineligible,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RehireableStatus {
    pub eligibility: RehireEligibility,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rehire_type: Option<GuidObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum BenefitsStatus {
    WithBenefits,
    WithoutBenefits,
}

/// Employee, schema v7.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub person: GuidObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus: Option<GuidObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<EmployeeContract>,
    pub status: EmployeeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_reason: Option<GuidObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rehireable_status: Option<RehireableStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits_status: Option<BenefitsStatus>,
}

/// Employee, schemas v11 and v12. Adds the home organization, which callers can
/// read but never set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee2 {
    pub id: String,
    pub person: GuidObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus: Option<GuidObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<EmployeeContract>,
    pub status: EmployeeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_reason: Option<GuidObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rehireable_status: Option<RehireableStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits_status: Option<BenefitsStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_organization: Option<GuidObject>,
}

impl From<Employee2> for Employee {
    fn from(employee: Employee2) -> Self {
        Self {
            id: employee.id,
            person: employee.person,
            campus: employee.campus,
            contract: employee.contract,
            status: employee.status,
            start_on: employee.start_on,
            end_on: employee.end_on,
            termination_reason: employee.termination_reason,
            rehireable_status: employee.rehireable_status,
            benefits_status: employee.benefits_status,
        }
    }
}
