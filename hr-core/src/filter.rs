//! Filters accepted by the list operations, either as plain query parameters
//! (older schema versions) or as the JSON `criteria` parameter.

use crate::model::{
    CompensationType, ContractType, EmployeeStatus, ExemptionType, GuidObject, JobPreference,
    JobStatus, PositionStatus, RehireEligibility,
};
use chrono::NaiveDate;
use eedm::EedmError;
use eedm::EedmResult;
use error_stack::Report;
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters of the employees v7 list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EmployeeQuery {
    pub person: Option<String>,
    pub campus: Option<String>,
    pub status: Option<String>,
    pub start_on: Option<String>,
    pub end_on: Option<String>,
    pub rehireable_status_eligibility: Option<String>,
    pub rehireable_status_type: Option<String>,
}

impl EmployeeQuery {
    pub fn values(&self) -> [Option<&str>; 7] {
        [
            self.person.as_deref(),
            self.campus.as_deref(),
            self.status.as_deref(),
            self.start_on.as_deref(),
            self.end_on.as_deref(),
            self.rehireable_status_eligibility.as_deref(),
            self.rehireable_status_type.as_deref(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RehireableStatusFilter {
    pub eligibility: Option<RehireEligibility>,
    #[serde(rename = "type")]
    pub rehire_type: Option<GuidObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractFilter {
    #[serde(rename = "type")]
    pub contract_type: Option<ContractType>,
    pub detail: Option<GuidObject>,
}

/// `criteria` of the employees v11 and v12 lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmployeeFilter {
    pub person: Option<GuidObject>,
    pub campus: Option<GuidObject>,
    pub status: Option<EmployeeStatus>,
    pub start_on: Option<NaiveDate>,
    pub end_on: Option<NaiveDate>,
    pub rehireable_status: Option<RehireableStatusFilter>,
    pub contract: Option<ContractFilter>,
}

/// `criteria` of every institution jobs list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InstitutionJobFilter {
    pub person: Option<GuidObject>,
    pub employer: Option<GuidObject>,
    pub position: Option<GuidObject>,
    pub department: Option<String>,
    pub start_on: Option<NaiveDate>,
    pub end_on: Option<NaiveDate>,
    pub status: Option<JobStatus>,
    pub classification: Option<GuidObject>,
    pub preference: Option<JobPreference>,
}

/// Query parameters of the payroll deduction arrangements v7 list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ArrangementQuery {
    pub person: Option<String>,
    pub contribution: Option<String>,
    pub deduction_type: Option<String>,
    pub status: Option<String>,
}

impl ArrangementQuery {
    pub fn values(&self) -> [Option<&str>; 4] {
        [
            self.person.as_deref(),
            self.contribution.as_deref(),
            self.deduction_type.as_deref(),
            self.status.as_deref(),
        ]
    }
}

const POSITION_STATUSES: [&str; 4] = ["active", "frozen", "cancelled", "inactive"];

/// Query parameters of the institution positions v7 list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PositionQuery {
    pub campus: Option<String>,
    pub status: Option<String>,
    pub bargaining_unit: Option<String>,
    pub reports_to_position: Option<String>,
    pub exemption_type: Option<String>,
    pub compensation_type: Option<String>,
    pub start_on: Option<String>,
    pub end_on: Option<String>,
}

impl PositionQuery {
    pub fn values(&self) -> [Option<&str>; 8] {
        [
            self.campus.as_deref(),
            self.status.as_deref(),
            self.bargaining_unit.as_deref(),
            self.reports_to_position.as_deref(),
            self.exemption_type.as_deref(),
            self.compensation_type.as_deref(),
            self.start_on.as_deref(),
            self.end_on.as_deref(),
        ]
    }

    /// v7 only knows a fixed set of statuses and refuses to filter on frozen
    /// positions.
    pub fn validate_status(&self) -> EedmResult<()> {
        let Some(status) = self.status.as_deref().filter(|status| !status.is_empty()) else {
            return Ok(());
        };

        if !POSITION_STATUSES.contains(&status) {
            return Err(Report::new(EedmError::validation(format!(
                "{status} is an invalid enumeration value"
            ))));
        }

        if status == "frozen" {
            return Err(Report::new(EedmError::validation(
                "The filter status frozen is not supported in Colleague",
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompensationFilter {
    #[serde(rename = "type")]
    pub compensation_type: Option<CompensationType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportsToFilter {
    pub position: GuidObject,
}

/// `criteria` of the institution positions v11 and v12 lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PositionFilter {
    pub campus: Option<GuidObject>,
    pub status: Option<PositionStatus>,
    pub bargaining_unit: Option<GuidObject>,
    pub reports_to: Option<Vec<ReportsToFilter>>,
    pub exemption_type: Option<ExemptionType>,
    pub compensation: Option<CompensationFilter>,
    pub start_on: Option<NaiveDate>,
    pub end_on: Option<NaiveDate>,
}

impl PositionFilter {
    /// Frozen positions are never returned by a criteria search.
    pub fn matches_nothing(&self) -> bool {
        self.status == Some(PositionStatus::Frozen)
    }
}

/// `criteria` of the pay classes 12.1.0 list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PayClassFilter {
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn with_status(status: &str) -> PositionQuery {
        PositionQuery {
            status: Some(status.to_owned()),
            ..Default::default()
        }
    }

    #[rstest]
    #[case("")]
    #[case("active")]
    #[case("inactive")]
    #[case("cancelled")]
    fn known_statuses_pass(#[case] status: &str) {
        assert!(with_status(status).validate_status().is_ok());
    }

    #[test]
    fn frozen_is_refused() {
        let error = with_status("frozen").validate_status().unwrap_err();

        assert_eq!(
            &EedmError::validation("The filter status frozen is not supported in Colleague"),
            error.current_context()
        );
    }

    #[test]
    fn unknown_status_is_refused() {
        let error = with_status("melted").validate_status().unwrap_err();

        assert_eq!(
            &EedmError::validation("melted is an invalid enumeration value"),
            error.current_context()
        );
    }

    #[test]
    fn criteria_on_frozen_positions_match_nothing() {
        let filter = PositionFilter {
            status: Some(PositionStatus::Frozen),
            ..Default::default()
        };

        assert!(filter.matches_nothing());
        assert!(!PositionFilter::default().matches_nothing());
    }
}
