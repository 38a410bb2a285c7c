use crate::model::{EarningTypes, LeaveTypes, PayClasses, PayClasses2};
use eedm::EedmResult;

// Code tables are small, so the lists are never paged.

pub trait EarningTypeService: Send + Sync + 'static {
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

pub trait LeaveTypeService: Send + Sync + 'static {
    fn get_leave_types(&self, bypass_cache: bool) -> impl Future<Output = EedmResult<Vec<LeaveTypes>>> + Send;

    fn get_leave_type_by_guid(
        &self,
        guid: String,
        bypass_cache: bool,
    ) -> impl Future<Output = EedmResult<LeaveTypes>> + Send;
}

pub trait PayClassService: Send + Sync + 'static {
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
