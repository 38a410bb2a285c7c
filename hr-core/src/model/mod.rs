use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod earning_type;
mod employee;
mod institution_job;
mod institution_position;
mod leave_type;
mod pay_class;
mod payroll_deduction_arrangement;
mod performance_review;

pub use earning_type::*;
pub use employee::*;
pub use institution_job::*;
pub use institution_position::*;
pub use leave_type::*;
pub use pay_class::*;
pub use payroll_deduction_arrangement::*;
pub use performance_review::*;

/// A reference to another resource by its GUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct GuidObject {
    pub id: String,
}

impl GuidObject {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Implements [`eedm::ethos::EedmResource`] for representations whose GUID
/// lives in an `id` field.
macro_rules! eedm_resource {
    ($($dto:ty),+ $(,)?) => {
        $(
            impl eedm::ethos::EedmResource for $dto {
                fn guid(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

eedm_resource!(
    Employee,
    Employee2,
    InstitutionJobs,
    InstitutionJobs2,
    InstitutionJobs3,
    InstitutionPosition,
    InstitutionPosition2,
    EarningTypes,
    LeaveTypes,
    PayClasses,
    PayClasses2,
    EmploymentPerformanceReviews,
    PayrollDeductionArrangements,
);
