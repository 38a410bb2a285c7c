use crate::filter::{EmployeeFilter, EmployeeQuery};
use crate::model::{Employee, Employee2};
use eedm::EedmResult;
use eedm::paging::{Page, Paging};

pub trait EmployeeService: Send + Sync + 'static {
    /// v7 list.
    fn get_employees(
        &self,
        paging: Paging,
        query: EmployeeQuery,
        bypass_cache: bool,
    ) -> impl Future<Output = EedmResult<Page<Employee>>> + Send;

    /// v11 list.
    fn get_employees2(
        &self,
        paging: Paging,
        filter: EmployeeFilter,
        bypass_cache: bool,
    ) -> impl Future<Output = EedmResult<Page<Employee2>>> + Send;

    /// v12 list.
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

    /// `employee` is the merged representation; `original` is what was stored
    /// before the merge.
    fn update_employee2(
        &self,
        guid: String,
        employee: Employee2,
        original: Employee2,
    ) -> impl Future<Output = EedmResult<Employee2>> + Send;
}
