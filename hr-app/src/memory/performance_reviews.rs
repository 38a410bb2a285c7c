use super::Store;
use eedm::EedmResult;
use eedm::paging::{Page, Paging};
use hr_core::model::EmploymentPerformanceReviews;
use hr_core::service::PerformanceReviewService;

pub struct MemoryPerformanceReviews {
    store: Store<EmploymentPerformanceReviews>,
}

impl MemoryPerformanceReviews {
    pub fn new(reviews: impl IntoIterator<Item = EmploymentPerformanceReviews>) -> Self {
        Self {
            store: Store::new("employment-performance-reviews", reviews),
        }
    }
}

impl Default for MemoryPerformanceReviews {
    fn default() -> Self {
        Self::new([])
    }
}

impl PerformanceReviewService for MemoryPerformanceReviews {
    async fn get_performance_reviews(
        &self,
        paging: Paging,
        _bypass_cache: bool,
    ) -> EedmResult<Page<EmploymentPerformanceReviews>> {
        Ok(self.store.page(paging, |_| true).await)
    }

    async fn get_performance_review_by_guid(&self, guid: String) -> EedmResult<EmploymentPerformanceReviews> {
        self.store.get(&guid).await
    }

    async fn create_performance_review(
        &self,
        review: EmploymentPerformanceReviews,
    ) -> EedmResult<EmploymentPerformanceReviews> {
        self.store.create(review).await
    }

    async fn update_performance_review(
        &self,
        guid: String,
        mut review: EmploymentPerformanceReviews,
    ) -> EedmResult<EmploymentPerformanceReviews> {
        review.id = guid;
        self.store.replace(review).await
    }

    async fn delete_performance_review(&self, guid: String) -> EedmResult<()> {
        self.store.remove(&guid).await
    }
}
