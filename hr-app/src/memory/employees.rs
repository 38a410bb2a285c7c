use super::{Store, convert_page, matches, matches_opt, wire_name};
use chrono::NaiveDate;
use eedm::EedmResult;
use eedm::paging::{Page, Paging};
use hr_core::filter::{EmployeeFilter, EmployeeQuery};
use hr_core::model::{Employee, Employee2};
use hr_core::service::EmployeeService;

const RESOURCE: &str = "employees";

pub struct MemoryEmployees {
    store: Store<Employee2>,
}

impl MemoryEmployees {
    pub fn new(employees: impl IntoIterator<Item = Employee2>) -> Self {
        Self {
            store: Store::new(RESOURCE, employees),
        }
    }
}

impl Default for MemoryEmployees {
    fn default() -> Self {
        Self::new([])
    }
}

fn matches_query(employee: &Employee2, query: &EmployeeQuery) -> bool {
    let equals = |filter: &Option<String>, value: Option<&str>| {
        filter.as_deref().is_none_or(|filter| value == Some(filter))
    };
    let date = |filter: &Option<String>, value: Option<NaiveDate>| {
        filter
            .as_deref()
            .is_none_or(|filter| filter.parse::<NaiveDate>().ok() == value)
    };
    let rehireable = employee.rehireable_status.as_ref();

    equals(&query.person, Some(employee.person.id.as_str()))
        && equals(&query.campus, employee.campus.as_ref().map(|campus| campus.id.as_str()))
        && equals(&query.status, wire_name(&employee.status).as_deref())
        && date(&query.start_on, employee.start_on)
        && date(&query.end_on, employee.end_on)
        && equals(
            &query.rehireable_status_eligibility,
            rehireable
                .and_then(|status| wire_name(&status.eligibility))
                .as_deref(),
        )
        && equals(
            &query.rehireable_status_type,
            rehireable
                .and_then(|status| status.rehire_type.as_ref())
                .map(|rehire_type| rehire_type.id.as_str()),
        )
}

fn matches_filter(employee: &Employee2, filter: &EmployeeFilter) -> bool {
    let rehireable = employee.rehireable_status.as_ref();
    let contract = employee.contract.as_ref();

    matches(filter.person.as_ref(), &employee.person)
        && matches_opt(filter.campus.as_ref(), employee.campus.as_ref())
        && matches(filter.status.as_ref(), &employee.status)
        && matches_opt(filter.start_on.as_ref(), employee.start_on.as_ref())
        && matches_opt(filter.end_on.as_ref(), employee.end_on.as_ref())
        && filter.rehireable_status.as_ref().is_none_or(|wanted| {
            matches_opt(
                wanted.eligibility.as_ref(),
                rehireable.map(|status| &status.eligibility),
            ) && matches_opt(
                wanted.rehire_type.as_ref(),
                rehireable.and_then(|status| status.rehire_type.as_ref()),
            )
        })
        && filter.contract.as_ref().is_none_or(|wanted| {
            matches_opt(
                wanted.contract_type.as_ref(),
                contract.map(|contract| &contract.contract_type),
            ) && matches_opt(
                wanted.detail.as_ref(),
                contract.and_then(|contract| contract.detail.as_ref()),
            )
        })
}

impl EmployeeService for MemoryEmployees {
    async fn get_employees(
        &self,
        paging: Paging,
        query: EmployeeQuery,
        _bypass_cache: bool,
    ) -> EedmResult<Page<Employee>> {
        let page = self
            .store
            .page(paging, |employee| matches_query(employee, &query))
            .await;
        Ok(convert_page(page))
    }

    async fn get_employees2(
        &self,
        paging: Paging,
        filter: EmployeeFilter,
        _bypass_cache: bool,
    ) -> EedmResult<Page<Employee2>> {
        Ok(self
            .store
            .page(paging, |employee| matches_filter(employee, &filter))
            .await)
    }

    async fn get_employees3(
        &self,
        paging: Paging,
        filter: EmployeeFilter,
        bypass_cache: bool,
    ) -> EedmResult<Page<Employee2>> {
        self.get_employees2(paging, filter, bypass_cache).await
    }

    async fn get_employee_by_guid(&self, guid: String) -> EedmResult<Employee> {
        self.store.get(&guid).await.map(Employee::from)
    }

    async fn get_employee2_by_guid(&self, guid: String) -> EedmResult<Employee2> {
        self.store.get(&guid).await
    }

    async fn get_employee3_by_guid(&self, guid: String, _bypass_cache: bool) -> EedmResult<Employee2> {
        self.store.get(&guid).await
    }

    async fn create_employee2(&self, employee: Employee2) -> EedmResult<Employee2> {
        self.store.create(employee).await
    }

    async fn update_employee2(
        &self,
        guid: String,
        mut employee: Employee2,
        original: Employee2,
    ) -> EedmResult<Employee2> {
        // the home organization is maintained elsewhere
        employee.home_organization = original.home_organization;
        employee.id = guid;
        self.store.replace(employee).await
    }
}
