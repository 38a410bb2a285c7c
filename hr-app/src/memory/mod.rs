//! An engine keeping every resource in memory. Nothing survives a restart;
//! it is what the binary serves until a Colleague backed engine is wired in.

use eedm::guid;
use eedm::paging::{Page, Paging};
use eedm::{EedmError, EedmResult};
use error_stack::Report;
use hr_core::HrEngine;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

mod code_tables;
mod employees;
mod ethos;
mod institution_jobs;
mod institution_positions;
mod payroll_deduction_arrangements;
mod performance_reviews;
mod seed;

pub use code_tables::{MemoryEarningTypes, MemoryLeaveTypes, MemoryPayClasses};
pub use employees::MemoryEmployees;
pub use ethos::MemoryEthos;
pub use institution_jobs::MemoryInstitutionJobs;
pub use institution_positions::MemoryInstitutionPositions;
pub use payroll_deduction_arrangements::MemoryPayrollDeductionArrangements;
pub use performance_reviews::MemoryPerformanceReviews;

#[derive(Clone, Default)]
pub struct MemoryEngine {
    ethos: Arc<MemoryEthos>,
    employees: Arc<MemoryEmployees>,
    institution_jobs: Arc<MemoryInstitutionJobs>,
    institution_positions: Arc<MemoryInstitutionPositions>,
    earning_types: Arc<MemoryEarningTypes>,
    leave_types: Arc<MemoryLeaveTypes>,
    pay_classes: Arc<MemoryPayClasses>,
    performance_reviews: Arc<MemoryPerformanceReviews>,
    payroll_deduction_arrangements: Arc<MemoryPayrollDeductionArrangements>,
}

impl MemoryEngine {
    /// Code tables and positions come preloaded; people data starts empty.
    pub fn seeded() -> Self {
        Self {
            institution_positions: Arc::new(MemoryInstitutionPositions::new(seed::positions())),
            earning_types: Arc::new(MemoryEarningTypes::new(seed::earning_types())),
            leave_types: Arc::new(MemoryLeaveTypes::new(seed::leave_types())),
            pay_classes: Arc::new(MemoryPayClasses::new(seed::pay_classes())),
            ..Default::default()
        }
    }
}

impl HrEngine for MemoryEngine {
    type Ethos = MemoryEthos;
    type Employees = MemoryEmployees;
    type InstitutionJobs = MemoryInstitutionJobs;
    type InstitutionPositions = MemoryInstitutionPositions;
    type EarningTypes = MemoryEarningTypes;
    type LeaveTypes = MemoryLeaveTypes;
    type PayClasses = MemoryPayClasses;
    type PerformanceReviews = MemoryPerformanceReviews;
    type PayrollDeductionArrangements = MemoryPayrollDeductionArrangements;

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

/// A stored representation with its GUID in an `id` field.
pub(crate) trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

macro_rules! record {
    ($($dto:ty),+ $(,)?) => {
        $(
            impl Record for $dto {
                fn id(&self) -> &str {
                    &self.id
                }

                fn set_id(&mut self, id: String) {
                    self.id = id;
                }
            }
        )+
    };
}

record!(
    hr_core::model::Employee2,
    hr_core::model::InstitutionJobs3,
    hr_core::model::InstitutionPosition2,
    hr_core::model::EarningTypes,
    hr_core::model::LeaveTypes,
    hr_core::model::PayClasses2,
    hr_core::model::EmploymentPerformanceReviews,
    hr_core::model::PayrollDeductionArrangements,
);

/// Records keyed by GUID. v7 GUIDs sort by creation time, so iteration order
/// is insertion order for everything created here.
pub(crate) struct Store<T> {
    resource: &'static str,
    records: RwLock<BTreeMap<String, T>>,
}

impl<T: Record> Store<T> {
    pub(crate) fn new(resource: &'static str, records: impl IntoIterator<Item = T>) -> Self {
        Self {
            resource,
            records: RwLock::new(
                records
                    .into_iter()
                    .map(|record| (record.id().to_lowercase(), record))
                    .collect(),
            ),
        }
    }

    pub(crate) async fn all(&self) -> Vec<T> {
        self.records.read().await.values().cloned().collect()
    }

    pub(crate) async fn page(&self, paging: Paging, keep: impl Fn(&T) -> bool) -> Page<T> {
        let records = self.records.read().await;
        let matching = records.values().filter(|record| keep(record)).collect::<Vec<_>>();

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(paging.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(paging.limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Page::new(items, total)
    }

    pub(crate) async fn get(&self, guid: &str) -> EedmResult<T> {
        self.records
            .read()
            .await
            .get(&guid.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| self.not_found(guid))
    }

    /// A nil or blank GUID gets a fresh one; any other GUID is kept, which is
    /// how a PUT for an unknown GUID ends up stored under that GUID.
    pub(crate) async fn create(&self, mut record: T) -> EedmResult<T> {
        let id = record.id().trim().to_lowercase();
        let id = if id.is_empty() || guid::is_nil(&id) {
            Uuid::now_v7().to_string()
        } else {
            id
        };
        record.set_id(id.clone());

        let mut records = self.records.write().await;
        if records.contains_key(&id) {
            return Err(Report::new(EedmError::existing_resource(format!(
                "{} {id} already exists",
                self.resource
            ))));
        }

        debug!("creating {} {id}", self.resource);
        records.insert(id, record.clone());
        Ok(record)
    }

    pub(crate) async fn replace(&self, mut record: T) -> EedmResult<T> {
        let id = record.id().trim().to_lowercase();
        record.set_id(id.clone());

        let mut records = self.records.write().await;
        let Some(stored) = records.get_mut(&id) else {
            return Err(self.not_found(&id));
        };

        debug!("replacing {} {id}", self.resource);
        *stored = record.clone();
        Ok(record)
    }

    pub(crate) async fn remove(&self, guid: &str) -> EedmResult<()> {
        match self.records.write().await.remove(&guid.trim().to_lowercase()) {
            Some(_) => Ok(()),
            None => Err(self.not_found(guid)),
        }
    }

    fn not_found(&self, guid: &str) -> Report<EedmError> {
        Report::new(EedmError::NotFound).attach(format!("no {} with guid {guid}", self.resource))
    }
}

pub(crate) fn convert_page<A, B: From<A>>(page: Page<A>) -> Page<B> {
    Page::new(page.items.into_iter().map(B::from).collect(), page.total)
}

/// The wire name of an enum value, e.g. `fullTime`.
pub(crate) fn wire_name<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(name)) => Some(name),
        _ => None,
    }
}

/// `filter` is unset or equal to `value`.
pub(crate) fn matches<T: PartialEq>(filter: Option<&T>, value: &T) -> bool {
    filter.is_none_or(|filter| filter == value)
}

/// `filter` is unset or equal to an optional `value`.
pub(crate) fn matches_opt<T: PartialEq>(filter: Option<&T>, value: Option<&T>) -> bool {
    filter.is_none_or(|filter| value == Some(filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_core::model::LeaveTypes;

    fn leave_type(id: &str) -> LeaveTypes {
        LeaveTypes {
            id: id.to_owned(),
            code: id.to_uppercase(),
            title: id.to_owned(),
            description: None,
        }
    }

    fn store() -> Store<LeaveTypes> {
        Store::new("leave-types", ["a", "b", "c", "d", "e"].map(leave_type))
    }

    #[tokio::test]
    async fn page_skips_and_takes_after_filtering() {
        let page = store()
            .page(Paging::new(1, 2), |leave_type| leave_type.id != "b")
            .await;

        assert_eq!(4, page.total);
        assert_eq!(vec![leave_type("c"), leave_type("d")], page.items);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_but_keeps_the_total() {
        let page = store().page(Paging::new(10, 2), |_| true).await;

        assert_eq!(5, page.total);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn create_replaces_the_nil_guid() {
        let created = store().create(leave_type(guid::NIL_GUID)).await.unwrap();

        assert!(Uuid::try_parse(&created.id).is_ok_and(|id| !id.is_nil()));
    }

    #[tokio::test]
    async fn create_keeps_a_given_guid_and_refuses_duplicates() {
        let store = store();

        store.create(leave_type("F")).await.unwrap();
        let duplicate = store.create(leave_type("f")).await.unwrap_err();

        assert!(store.get("f").await.is_ok());
        assert!(matches!(duplicate.current_context(), EedmError::ExistingResource(_)));
    }

    #[tokio::test]
    async fn unknown_guids_are_not_found() {
        let store = store();

        let get = store.get("z").await.unwrap_err();
        let replace = store.replace(leave_type("z")).await.unwrap_err();
        let remove = store.remove("z").await.unwrap_err();

        for error in [get, replace, remove] {
            assert_eq!(&EedmError::NotFound, error.current_context());
        }
    }
}
