use super::Store;
use eedm::EedmResult;
use hr_core::model::{EarningTypes, LeaveTypes, PayClasses, PayClasses2};
use hr_core::service::{EarningTypeService, LeaveTypeService, PayClassService};

pub struct MemoryEarningTypes {
    store: Store<EarningTypes>,
}

impl MemoryEarningTypes {
    pub fn new(earning_types: impl IntoIterator<Item = EarningTypes>) -> Self {
        Self {
            store: Store::new("earning-types", earning_types),
        }
    }
}

impl Default for MemoryEarningTypes {
    fn default() -> Self {
        Self::new([])
    }
}

impl EarningTypeService for MemoryEarningTypes {
    async fn get_earning_types(&self, _bypass_cache: bool) -> EedmResult<Vec<EarningTypes>> {
        Ok(self.store.all().await)
    }

    async fn get_earning_type_by_guid(&self, guid: String, _bypass_cache: bool) -> EedmResult<EarningTypes> {
        self.store.get(&guid).await
    }
}

pub struct MemoryLeaveTypes {
    store: Store<LeaveTypes>,
}

impl MemoryLeaveTypes {
    pub fn new(leave_types: impl IntoIterator<Item = LeaveTypes>) -> Self {
        Self {
            store: Store::new("leave-types", leave_types),
        }
    }
}

impl Default for MemoryLeaveTypes {
    fn default() -> Self {
        Self::new([])
    }
}

impl LeaveTypeService for MemoryLeaveTypes {
    async fn get_leave_types(&self, _bypass_cache: bool) -> EedmResult<Vec<LeaveTypes>> {
        Ok(self.store.all().await)
    }

    async fn get_leave_type_by_guid(&self, guid: String, _bypass_cache: bool) -> EedmResult<LeaveTypes> {
        self.store.get(&guid).await
    }
}

/// Holds the 12.1.0 representation; v11 is derived from it.
pub struct MemoryPayClasses {
    store: Store<PayClasses2>,
}

impl MemoryPayClasses {
    pub fn new(pay_classes: impl IntoIterator<Item = PayClasses2>) -> Self {
        Self {
            store: Store::new("pay-classes", pay_classes),
        }
    }
}

impl Default for MemoryPayClasses {
    fn default() -> Self {
        Self::new([])
    }
}

impl PayClassService for MemoryPayClasses {
    async fn get_pay_classes(&self, _bypass_cache: bool) -> EedmResult<Vec<PayClasses>> {
        Ok(self.store.all().await.into_iter().map(PayClasses::from).collect())
    }

    async fn get_pay_class_by_guid(&self, guid: String, _bypass_cache: bool) -> EedmResult<PayClasses> {
        self.store.get(&guid).await.map(PayClasses::from)
    }

    async fn get_pay_classes2(&self, _bypass_cache: bool) -> EedmResult<Vec<PayClasses2>> {
        Ok(self.store.all().await)
    }

    async fn get_pay_class2_by_guid(&self, guid: String, _bypass_cache: bool) -> EedmResult<PayClasses2> {
        self.store.get(&guid).await
    }
}
