use crate::model::EmploymentPerformanceReviews;
use eedm::EedmResult;
use eedm::paging::{Page, Paging};

pub trait PerformanceReviewService: Send + Sync + 'static {
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
