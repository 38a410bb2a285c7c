//! Permission codes checked through
//! [`EthosService::validate_permissions`](eedm::ethos::EthosService::validate_permissions).

pub const VIEW_EMPLOYEE_DATA: &str = "VIEW.EMPLOYEE.DATA";
pub const UPDATE_EMPLOYEE: &str = "UPDATE.EMPLOYEE";

pub const VIEW_INSTITUTION_JOB: &str = "VIEW.INSTITUTION.JOB";
pub const CREATE_INSTITUTION_JOB: &str = "CREATE.INSTITUTION.JOB";

pub const VIEW_INSTITUTION_POSITION: &str = "VIEW.INSTITUTION.POSITION";

pub const VIEW_EMPLOYMENT_PERFORMANCE_REVIEW: &str = "VIEW.EMPLOYMENT.PERFORMANCE.REVIEW";
pub const CREATE_UPDATE_EMPLOYMENT_PERFORMANCE_REVIEW: &str =
    "CREATE.UPDATE.EMPLOYMENT.PERFORMANCE.REVIEW";
pub const DELETE_EMPLOYMENT_PERFORMANCE_REVIEW: &str = "DELETE.EMPLOYMENT.PERFORMANCE.REVIEW";

pub const CREATE_PAYROLL_DEDUCTION_ARRANGEMENTS: &str = "CREATE.PAYROLL.DEDUCTION.ARRANGEMENTS";
