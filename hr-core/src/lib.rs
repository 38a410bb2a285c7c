use eedm::ethos::EthosService;
use service::{
    EarningTypeService, EmployeeService, InstitutionJobService, InstitutionPositionService,
    LeaveTypeService, PayClassService, PayrollDeductionArrangementService, PerformanceReviewService,
};

pub mod filter;
pub mod model;
pub mod permissions;
pub mod service;

/// Ties the service implementations of every resource family together so the
/// routes only need to be generic over one type.
pub trait HrEngine: Clone + Send + Sync + 'static {
    type Ethos: EthosService;
    type Employees: EmployeeService;
    type InstitutionJobs: InstitutionJobService;
    type InstitutionPositions: InstitutionPositionService;
    type EarningTypes: EarningTypeService;
    type LeaveTypes: LeaveTypeService;
    type PayClasses: PayClassService;
    type PerformanceReviews: PerformanceReviewService;
    type PayrollDeductionArrangements: PayrollDeductionArrangementService;

    fn ethos(&self) -> &Self::Ethos;
    fn employees(&self) -> &Self::Employees;
    fn institution_jobs(&self) -> &Self::InstitutionJobs;
    fn institution_positions(&self) -> &Self::InstitutionPositions;
    fn earning_types(&self) -> &Self::EarningTypes;
    fn leave_types(&self) -> &Self::LeaveTypes;
    fn pay_classes(&self) -> &Self::PayClasses;
    fn performance_reviews(&self) -> &Self::PerformanceReviews;
    fn payroll_deduction_arrangements(&self) -> &Self::PayrollDeductionArrangements;
}
