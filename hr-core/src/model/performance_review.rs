use super::GuidObject;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReviewRating {
    pub detail: GuidObject,
}

/// Employment performance review, schema v10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentPerformanceReviews {
    pub id: String,
    pub person: GuidObject,
    pub job: GuidObject,
    pub completed_on: NaiveDate,
    #[serde(rename = "type")]
    pub review_type: GuidObject,
    pub rating: ReviewRating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<GuidObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
