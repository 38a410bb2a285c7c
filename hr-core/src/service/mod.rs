//! One service per resource family. Implementations own permissions, privacy,
//! persistence and caching; they report failures as an [`eedm::EedmError`]
//! context so the routes can translate them.

mod code_tables;
mod employees;
mod institution_jobs;
mod institution_positions;
mod payroll_deduction_arrangements;
mod performance_reviews;

pub use code_tables::{EarningTypeService, LeaveTypeService, PayClassService};
pub use employees::EmployeeService;
pub use institution_jobs::InstitutionJobService;
pub use institution_positions::InstitutionPositionService;
pub use payroll_deduction_arrangements::PayrollDeductionArrangementService;
pub use performance_reviews::PerformanceReviewService;
