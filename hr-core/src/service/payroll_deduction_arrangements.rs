use crate::filter::ArrangementQuery;
use crate::model::PayrollDeductionArrangements;
use eedm::EedmResult;
use eedm::paging::{Page, Paging};

pub trait PayrollDeductionArrangementService: Send + Sync + 'static {
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

    /// Stores `arrangement` under `guid`, creating it when nothing is stored
    /// there yet.
    fn update_payroll_deduction_arrangement(
        &self,
        guid: String,
        arrangement: PayrollDeductionArrangements,
    ) -> impl Future<Output = EedmResult<PayrollDeductionArrangements>> + Send;
}
