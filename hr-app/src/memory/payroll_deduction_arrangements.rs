use super::{Store, wire_name};
use eedm::paging::{Page, Paging};
use eedm::{EedmError, EedmResult};
use hr_core::filter::ArrangementQuery;
use hr_core::model::PayrollDeductionArrangements;
use hr_core::service::PayrollDeductionArrangementService;

pub struct MemoryPayrollDeductionArrangements {
    store: Store<PayrollDeductionArrangements>,
}

impl MemoryPayrollDeductionArrangements {
    pub fn new(arrangements: impl IntoIterator<Item = PayrollDeductionArrangements>) -> Self {
        Self {
            store: Store::new("payroll-deduction-arrangements", arrangements),
        }
    }
}

impl Default for MemoryPayrollDeductionArrangements {
    fn default() -> Self {
        Self::new([])
    }
}

fn matches_query(arrangement: &PayrollDeductionArrangements, query: &ArrangementQuery) -> bool {
    let equals = |filter: &Option<String>, value: Option<&str>| {
        filter.as_deref().is_none_or(|filter| value == Some(filter))
    };

    equals(&query.person, Some(arrangement.person.id.as_str()))
        && equals(&query.contribution, arrangement.contribution.as_deref())
        && equals(&query.deduction_type, Some(arrangement.deduction_type()))
        && equals(&query.status, wire_name(&arrangement.status).as_deref())
}

impl PayrollDeductionArrangementService for MemoryPayrollDeductionArrangements {
    async fn get_payroll_deduction_arrangements(
        &self,
        paging: Paging,
        query: ArrangementQuery,
        _bypass_cache: bool,
    ) -> EedmResult<Page<PayrollDeductionArrangements>> {
        Ok(self
            .store
            .page(paging, |arrangement| matches_query(arrangement, &query))
            .await)
    }

    async fn get_payroll_deduction_arrangement_by_guid(
        &self,
        guid: String,
    ) -> EedmResult<PayrollDeductionArrangements> {
        self.store.get(&guid).await
    }

    async fn create_payroll_deduction_arrangement(
        &self,
        arrangement: PayrollDeductionArrangements,
    ) -> EedmResult<PayrollDeductionArrangements> {
        self.store.create(arrangement).await
    }

    async fn update_payroll_deduction_arrangement(
        &self,
        guid: String,
        mut arrangement: PayrollDeductionArrangements,
    ) -> EedmResult<PayrollDeductionArrangements> {
        arrangement.id = guid;
        match self.store.replace(arrangement.clone()).await {
            Err(report) if matches!(report.current_context(), EedmError::NotFound) => {
                self.store.create(arrangement).await
            }
            stored => stored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use eedm::guid::NIL_GUID;
    use hr_core::model::{ArrangementDeduction, ArrangementPaymentTarget, ArrangementStatus, GuidObject};
    use rstest::rstest;

    fn arrangement(id: &str, person: &str, status: ArrangementStatus) -> PayrollDeductionArrangements {
        PayrollDeductionArrangements {
            id: id.to_owned(),
            person: GuidObject::new(person),
            payment_target: ArrangementPaymentTarget {
                deduction: ArrangementDeduction {
                    deduction_type: GuidObject::new("dental"),
                },
            },
            contribution: Some("employee".to_owned()),
            status,
            amount_per_payment: None,
            start_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_on: None,
            change_reason: None,
        }
    }

    fn arrangements() -> MemoryPayrollDeductionArrangements {
        MemoryPayrollDeductionArrangements::new([
            arrangement("a1", "p1", ArrangementStatus::Active),
            arrangement("a2", "p1", ArrangementStatus::Cancelled),
            arrangement("a3", "p2", ArrangementStatus::Active),
        ])
    }

    #[rstest]
    #[case(ArrangementQuery::default(), 3)]
    #[case(ArrangementQuery { person: Some("p1".into()), ..Default::default() }, 2)]
    #[case(ArrangementQuery { status: Some("cancelled".into()), ..Default::default() }, 1)]
    #[case(ArrangementQuery { deduction_type: Some("vision".into()), ..Default::default() }, 0)]
    #[case(ArrangementQuery { contribution: Some("employee".into()), person: Some("p2".into()), ..Default::default() }, 1)]
    #[tokio::test]
    async fn v7_query_filters(#[case] query: ArrangementQuery, #[case] expected: u64) {
        let page = arrangements()
            .get_payroll_deduction_arrangements(Paging::new(0, 100), query, false)
            .await
            .unwrap();

        assert_eq!(expected, page.total);
    }

    #[tokio::test]
    async fn update_of_an_unknown_guid_stores_it_there() {
        let arrangements = MemoryPayrollDeductionArrangements::default();

        arrangements
            .update_payroll_deduction_arrangement(
                "A9".into(),
                arrangement(NIL_GUID, "p1", ArrangementStatus::Active),
            )
            .await
            .unwrap();

        let stored = arrangements
            .get_payroll_deduction_arrangement_by_guid("a9".into())
            .await
            .unwrap();
        assert_eq!("a9", stored.id);
    }

    #[tokio::test]
    async fn update_replaces_the_stored_arrangement() {
        let arrangements = arrangements();

        arrangements
            .update_payroll_deduction_arrangement(
                "a1".into(),
                arrangement("", "p1", ArrangementStatus::Cancelled),
            )
            .await
            .unwrap();

        let stored = arrangements
            .get_payroll_deduction_arrangement_by_guid("a1".into())
            .await
            .unwrap();
        assert_eq!(ArrangementStatus::Cancelled, stored.status);
    }
}
