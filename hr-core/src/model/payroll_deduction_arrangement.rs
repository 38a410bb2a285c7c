use super::GuidObject;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ArrangementStatus {
    Active,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArrangementDeduction {
    pub deduction_type: GuidObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArrangementPaymentTarget {
    pub deduction: ArrangementDeduction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AmountPerPayment {
    pub value: f64,
    pub currency: String,
}

/// Payroll deduction arrangement, schema v7.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayrollDeductionArrangements {
    pub id: String,
    pub person: GuidObject,
    pub payment_target: ArrangementPaymentTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution: Option<String>,
    pub status: ArrangementStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_per_payment: Option<AmountPerPayment>,
    pub start_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_reason: Option<GuidObject>,
}

impl PayrollDeductionArrangements {
    pub fn deduction_type(&self) -> &str {
        &self.payment_target.deduction.deduction_type.id
    }
}
