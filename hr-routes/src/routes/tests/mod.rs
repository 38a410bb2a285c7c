//! Tests of the contract made by the API: status codes, version negotiation,
//! query and path parameters and the calls handed to the services.
use crate::routes;
use crate::state::{AppState, ApiSettings};
use axum_test::TestServer;
use eedm::EedmResult;
use eedm::ethos::{
    EthosService, ExtendedConfiguration, ExtendedData, ExtendedImport, PermissionsMetadata,
    ResourceRoute,
};
use eedm::paging::{Page, Paging};
use eedm::privacy::FieldMask;
use hr_core::HrEngine;
use hr_core::filter::{
    ArrangementQuery, EmployeeFilter, EmployeeQuery, InstitutionJobFilter, PositionFilter,
    PositionQuery,
};
use hr_core::model::{
    EarningTypes, Employee, Employee2, EmploymentPerformanceReviews, InstitutionJobs,
    InstitutionJobs2, InstitutionJobs3, InstitutionPosition, InstitutionPosition2, LeaveTypes,
    PayClasses, PayClasses2, PayrollDeductionArrangements,
};
use hr_core::service::{
    EarningTypeService, EmployeeService, InstitutionJobService, InstitutionPositionService,
    LeaveTypeService, PayClassService, PayrollDeductionArrangementService, PerformanceReviewService,
};
use mockall::mock;
use std::sync::Arc;

mod institution_job_endpoints;

const V7: &str = "application/vnd.hedtech.integration.v7+json";
const V8: &str = "application/vnd.hedtech.integration.v8+json";
const V10: &str = "application/vnd.hedtech.integration.v10+json";
const V11: &str = "application/vnd.hedtech.integration.v11+json";
const V12: &str = "application/vnd.hedtech.integration.v12+json";
const V12_1_0: &str = "application/vnd.hedtech.integration.v12.1.0+json";

mock! {
    pub Ethos {}

    impl EthosService for Ethos {
        fn validate_permissions(&self, permissions: &PermissionsMetadata) -> EedmResult<()>;

        fn data_privacy_list(
            &self,
            route: ResourceRoute,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<FieldMask>> + Send;

        fn extended_data(
            &self,
            route: ResourceRoute,
            ids: Vec<String>,
        ) -> impl Future<Output = EedmResult<ExtendedData>> + Send;

        fn extended_configuration(
            &self,
            route: ResourceRoute,
        ) -> impl Future<Output = EedmResult<Option<ExtendedConfiguration>>> + Send;

        fn import_extended_data(
            &self,
            import: ExtendedImport,
        ) -> impl Future<Output = EedmResult<()>> + Send;
    }
}

mock! {
    pub Employees {}

    impl EmployeeService for Employees {
        fn get_employees(
            &self,
            paging: Paging,
            query: EmployeeQuery,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<Page<Employee>>> + Send;

        fn get_employees2(
            &self,
            paging: Paging,
            filter: EmployeeFilter,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<Page<Employee2>>> + Send;

        fn get_employees3(
            &self,
            paging: Paging,
            filter: EmployeeFilter,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<Page<Employee2>>> + Send;

        fn get_employee_by_guid(&self, guid: String) -> impl Future<Output = EedmResult<Employee>> + Send;

        fn get_employee2_by_guid(&self, guid: String) -> impl Future<Output = EedmResult<Employee2>> + Send;

        fn get_employee3_by_guid(
            &self,
            guid: String,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<Employee2>> + Send;

        fn create_employee2(&self, employee: Employee2) -> impl Future<Output = EedmResult<Employee2>> + Send;

        fn update_employee2(
            &self,
            guid: String,
            employee: Employee2,
            original: Employee2,
        ) -> impl Future<Output = EedmResult<Employee2>> + Send;
    }
}

mock! {
    pub Jobs {}

    impl InstitutionJobService for Jobs {
        fn get_institution_jobs(
            &self,
            paging: Paging,
            filter: InstitutionJobFilter,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<Page<InstitutionJobs>>> + Send;

        fn get_institution_jobs2(
            &self,
            paging: Paging,
            filter: InstitutionJobFilter,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<Page<InstitutionJobs2>>> + Send;

        fn get_institution_jobs3(
            &self,
            paging: Paging,
            filter: InstitutionJobFilter,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<Page<InstitutionJobs3>>> + Send;

        fn get_institution_job_by_guid(
            &self,
            guid: String,
        ) -> impl Future<Output = EedmResult<InstitutionJobs>> + Send;

        fn get_institution_job2_by_guid(
            &self,
            guid: String,
        ) -> impl Future<Output = EedmResult<InstitutionJobs2>> + Send;

        fn get_institution_job3_by_guid(
            &self,
            guid: String,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<InstitutionJobs3>> + Send;

        fn create_institution_job(
            &self,
            job: InstitutionJobs3,
        ) -> impl Future<Output = EedmResult<InstitutionJobs3>> + Send;

        fn update_institution_job(
            &self,
            job: InstitutionJobs3,
        ) -> impl Future<Output = EedmResult<InstitutionJobs3>> + Send;
    }
}

mock! {
    pub Positions {}

    impl InstitutionPositionService for Positions {
        fn get_institution_positions(
            &self,
            paging: Paging,
            query: PositionQuery,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<Page<InstitutionPosition>>> + Send;

        fn get_institution_positions2(
            &self,
            paging: Paging,
            filter: PositionFilter,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<Page<InstitutionPosition>>> + Send;

        fn get_institution_positions3(
            &self,
            paging: Paging,
            filter: PositionFilter,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<Page<InstitutionPosition2>>> + Send;

        fn get_institution_position_by_guid(
            &self,
            guid: String,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<InstitutionPosition>> + Send;

        fn get_institution_position2_by_guid(
            &self,
            guid: String,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<InstitutionPosition>> + Send;

        fn get_institution_position3_by_guid(
            &self,
            guid: String,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<InstitutionPosition2>> + Send;
    }
}

mock! {
    pub EarningTypeTable {}

    impl EarningTypeService for EarningTypeTable {
        fn get_earning_types(
            &self,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<Vec<EarningTypes>>> + Send;

        fn get_earning_type_by_guid(
            &self,
            guid: String,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<EarningTypes>> + Send;
    }
}

mock! {
    pub LeaveTypeTable {}

    impl LeaveTypeService for LeaveTypeTable {
        fn get_leave_types(&self, bypass_cache: bool) -> impl Future<Output = EedmResult<Vec<LeaveTypes>>> + Send;

        fn get_leave_type_by_guid(
            &self,
            guid: String,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<LeaveTypes>> + Send;
    }
}

mock! {
    pub PayClassTable {}

    impl PayClassService for PayClassTable {
        fn get_pay_classes(&self, bypass_cache: bool) -> impl Future<Output = EedmResult<Vec<PayClasses>>> + Send;

        fn get_pay_class_by_guid(
            &self,
            guid: String,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<PayClasses>> + Send;

        fn get_pay_classes2(
            &self,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<Vec<PayClasses2>>> + Send;

        fn get_pay_class2_by_guid(
            &self,
            guid: String,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<PayClasses2>> + Send;
    }
}

mock! {
    pub Reviews {}

    impl PerformanceReviewService for Reviews {
        fn get_performance_reviews(
            &self,
            paging: Paging,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<Page<EmploymentPerformanceReviews>>> + Send;

        fn get_performance_review_by_guid(
            &self,
            guid: String,
        ) -> impl Future<Output = EedmResult<EmploymentPerformanceReviews>> + Send;

        fn create_performance_review(
            &self,
            review: EmploymentPerformanceReviews,
        ) -> impl Future<Output = EedmResult<EmploymentPerformanceReviews>> + Send;

        fn update_performance_review(
            &self,
            guid: String,
            review: EmploymentPerformanceReviews,
        ) -> impl Future<Output = EedmResult<EmploymentPerformanceReviews>> + Send;

        fn delete_performance_review(&self, guid: String) -> impl Future<Output = EedmResult<()>> + Send;
    }
}

mock! {
    pub Arrangements {}

    impl PayrollDeductionArrangementService for Arrangements {
        fn get_payroll_deduction_arrangements(
            &self,
            paging: Paging,
            query: ArrangementQuery,
            bypass_cache: bool,
        ) -> impl Future<Output = EedmResult<Page<PayrollDeductionArrangements>>> + Send;

        fn get_payroll_deduction_arrangement_by_guid(
            &self,
            guid: String,
        ) -> impl Future<Output = EedmResult<PayrollDeductionArrangements>> + Send;

        fn create_payroll_deduction_arrangement(
            &self,
            arrangement: PayrollDeductionArrangements,
        ) -> impl Future<Output = EedmResult<PayrollDeductionArrangements>> + Send;

        fn update_payroll_deduction_arrangement(
            &self,
            guid: String,
            arrangement: PayrollDeductionArrangements,
        ) -> impl Future<Output = EedmResult<PayrollDeductionArrangements>> + Send;
    }
}

/// Every service starts out without expectations, so a test panics on any
/// call it did not set up.
#[derive(Clone)]
struct TestEngine {
    ethos: Arc<MockEthos>,
    employees: Arc<MockEmployees>,
    institution_jobs: Arc<MockJobs>,
    institution_positions: Arc<MockPositions>,
    earning_types: Arc<MockEarningTypeTable>,
    leave_types: Arc<MockLeaveTypeTable>,
    pay_classes: Arc<MockPayClassTable>,
    performance_reviews: Arc<MockReviews>,
    payroll_deduction_arrangements: Arc<MockArrangements>,
}

impl TestEngine {
    fn new(ethos: MockEthos) -> Self {
        Self {
            ethos: Arc::new(ethos),
            employees: Arc::new(MockEmployees::new()),
            institution_jobs: Arc::new(MockJobs::new()),
            institution_positions: Arc::new(MockPositions::new()),
            earning_types: Arc::new(MockEarningTypeTable::new()),
            leave_types: Arc::new(MockLeaveTypeTable::new()),
            pay_classes: Arc::new(MockPayClassTable::new()),
            performance_reviews: Arc::new(MockReviews::new()),
            payroll_deduction_arrangements: Arc::new(MockArrangements::new()),
        }
    }

    fn with_employees(mut self, employees: MockEmployees) -> Self {
        self.employees = Arc::new(employees);
        self
    }

    fn with_institution_jobs(mut self, institution_jobs: MockJobs) -> Self {
        self.institution_jobs = Arc::new(institution_jobs);
        self
    }

    fn with_institution_positions(mut self, institution_positions: MockPositions) -> Self {
        self.institution_positions = Arc::new(institution_positions);
        self
    }

    fn with_earning_types(mut self, earning_types: MockEarningTypeTable) -> Self {
        self.earning_types = Arc::new(earning_types);
        self
    }

    fn with_leave_types(mut self, leave_types: MockLeaveTypeTable) -> Self {
        self.leave_types = Arc::new(leave_types);
        self
    }

    fn with_pay_classes(mut self, pay_classes: MockPayClassTable) -> Self {
        self.pay_classes = Arc::new(pay_classes);
        self
    }

    fn with_performance_reviews(mut self, performance_reviews: MockReviews) -> Self {
        self.performance_reviews = Arc::new(performance_reviews);
        self
    }

    fn with_payroll_deduction_arrangements(mut self, arrangements: MockArrangements) -> Self {
        self.payroll_deduction_arrangements = Arc::new(arrangements);
        self
    }

    fn into_server(self) -> TestServer {
        self.into_server_with(ApiSettings::default())
    }

    fn into_server_with(self, settings: ApiSettings) -> TestServer {
        let routes = routes::build(AppState::new(self, settings), None);

        TestServer::new(routes).expect("creation of test server")
    }
}

impl HrEngine for TestEngine {
    type Ethos = MockEthos;
    type Employees = MockEmployees;
    type InstitutionJobs = MockJobs;
    type InstitutionPositions = MockPositions;
    type EarningTypes = MockEarningTypeTable;
    type LeaveTypes = MockLeaveTypeTable;
    type PayClasses = MockPayClassTable;
    type PerformanceReviews = MockReviews;
    type PayrollDeductionArrangements = MockArrangements;

    fn ethos(&self) -> &Self::Ethos {
        &self.ethos
    }

    fn employees(&self) -> &Self::Employees {
        &self.employees
    }

    fn institution_jobs(&self) -> &Self::InstitutionJobs {
        &self.institution_jobs
    }

    fn institution_positions(&self) -> &Self::InstitutionPositions {
        &self.institution_positions
    }

    fn earning_types(&self) -> &Self::EarningTypes {
        &self.earning_types
    }

    fn leave_types(&self) -> &Self::LeaveTypes {
        &self.leave_types
    }

    fn pay_classes(&self) -> &Self::PayClasses {
        &self.pay_classes
    }

    fn performance_reviews(&self) -> &Self::PerformanceReviews {
        &self.performance_reviews
    }

    fn payroll_deduction_arrangements(&self) -> &Self::PayrollDeductionArrangements {
        &self.payroll_deduction_arrangements
    }
}

/// An ethos that grants every permission and has no privacy settings or
/// extended data.
fn permissive_ethos() -> MockEthos {
    ethos_with_mask(FieldMask::empty())
}

fn ethos_with_mask(mask: FieldMask) -> MockEthos {
    let mut ethos = MockEthos::new();
    ethos
        .expect_validate_permissions()
        .returning(|_| Ok(()));
    ethos
        .expect_data_privacy_list()
        .returning(move |_, _| return_scenario::ok(mask.clone()));
    ethos
        .expect_extended_data()
        .returning(|_, _| return_scenario::ok(ExtendedData::new()));
    ethos
        .expect_extended_configuration()
        .returning(|_| return_scenario::ok(None));
    ethos
        .expect_import_extended_data()
        .returning(|_| return_scenario::ok(()));
    ethos
}

/// An ethos refusing every permission check. Nothing else may be called.
fn denying_ethos() -> MockEthos {
    let mut ethos = MockEthos::new();
    ethos
        .expect_validate_permissions()
        .returning(|_| Err(error_stack::Report::new(eedm::EedmError::PermissionDenied)));
    ethos
}

mod return_scenario {
    use eedm::{EedmError, EedmResult};
    use error_stack::Report;
    use futures::{FutureExt, future::BoxFuture};

    pub fn ok<'a, T: Send + 'a>(value: T) -> BoxFuture<'a, EedmResult<T>> {
        async move { Ok(value) }.boxed()
    }

    pub fn error<'a, T: Send + 'a>(error: EedmError) -> BoxFuture<'a, EedmResult<T>> {
        async move { Err(Report::new(error)) }.boxed()
    }

    pub fn not_found<'a, T: Send + 'a>() -> BoxFuture<'a, EedmResult<T>> {
        error(EedmError::NotFound)
    }
}
