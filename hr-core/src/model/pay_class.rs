use super::GuidObject;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PayClassStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PayClassClassification {
    Salary,
    Wages,
}

/// Pay class, schema v11.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayClasses {
    pub id: String,
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayClassStatus>,
}

/// Pay class, schema 12.1.0. Adds pay frequency and classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayClasses2 {
    pub id: String,
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayClassStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_frequency: Option<GuidObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<PayClassClassification>,
}

impl From<PayClasses2> for PayClasses {
    fn from(pay_class: PayClasses2) -> Self {
        Self {
            id: pay_class.id,
            code: pay_class.code,
            title: pay_class.title,
            description: pay_class.description,
            status: pay_class.status,
        }
    }
}
