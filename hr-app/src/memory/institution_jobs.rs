use super::{Store, convert_page, matches, matches_opt};
use eedm::EedmResult;
use eedm::paging::{Page, Paging};
use hr_core::filter::InstitutionJobFilter;
use hr_core::model::{InstitutionJobs, InstitutionJobs2, InstitutionJobs3};
use hr_core::service::InstitutionJobService;

/// Holds the v12 representation; the older schemas are derived from it.
pub struct MemoryInstitutionJobs {
    store: Store<InstitutionJobs3>,
}

impl MemoryInstitutionJobs {
    pub fn new(jobs: impl IntoIterator<Item = InstitutionJobs3>) -> Self {
        Self {
            store: Store::new("institution-jobs", jobs),
        }
    }

    async fn filtered(&self, paging: Paging, filter: &InstitutionJobFilter) -> Page<InstitutionJobs3> {
        self.store.page(paging, |job| matches_filter(job, filter)).await
    }
}

impl Default for MemoryInstitutionJobs {
    fn default() -> Self {
        Self::new([])
    }
}

fn matches_filter(job: &InstitutionJobs3, filter: &InstitutionJobFilter) -> bool {
    matches(filter.person.as_ref(), &job.person)
        && matches_opt(filter.employer.as_ref(), job.employer.as_ref())
        && matches(filter.position.as_ref(), &job.position)
        && matches_opt(filter.department.as_ref(), job.department.as_ref())
        && matches(filter.start_on.as_ref(), &job.start_on)
        && matches_opt(filter.end_on.as_ref(), job.end_on.as_ref())
        && matches(filter.status.as_ref(), &job.status)
        && matches_opt(filter.classification.as_ref(), job.classification.as_ref())
        && matches_opt(filter.preference.as_ref(), job.preference.as_ref())
}

impl InstitutionJobService for MemoryInstitutionJobs {
    async fn get_institution_jobs(
        &self,
        paging: Paging,
        filter: InstitutionJobFilter,
        _bypass_cache: bool,
    ) -> EedmResult<Page<InstitutionJobs>> {
        Ok(convert_page(self.filtered(paging, &filter).await))
    }

    async fn get_institution_jobs2(
        &self,
        paging: Paging,
        filter: InstitutionJobFilter,
        _bypass_cache: bool,
    ) -> EedmResult<Page<InstitutionJobs2>> {
        Ok(convert_page(self.filtered(paging, &filter).await))
    }

    async fn get_institution_jobs3(
        &self,
        paging: Paging,
        filter: InstitutionJobFilter,
        _bypass_cache: bool,
    ) -> EedmResult<Page<InstitutionJobs3>> {
        Ok(self.filtered(paging, &filter).await)
    }

    async fn get_institution_job_by_guid(&self, guid: String) -> EedmResult<InstitutionJobs> {
        self.store.get(&guid).await.map(InstitutionJobs::from)
    }

    async fn get_institution_job2_by_guid(&self, guid: String) -> EedmResult<InstitutionJobs2> {
        self.store.get(&guid).await.map(InstitutionJobs2::from)
    }

    async fn get_institution_job3_by_guid(
        &self,
        guid: String,
        _bypass_cache: bool,
    ) -> EedmResult<InstitutionJobs3> {
        self.store.get(&guid).await
    }

    async fn create_institution_job(&self, job: InstitutionJobs3) -> EedmResult<InstitutionJobs3> {
        self.store.create(job).await
    }

    async fn update_institution_job(&self, job: InstitutionJobs3) -> EedmResult<InstitutionJobs3> {
        self.store.replace(job).await
    }
}
