use crate::filter::InstitutionJobFilter;
use crate::model::{InstitutionJobs, InstitutionJobs2, InstitutionJobs3};
use eedm::EedmResult;
use eedm::paging::{Page, Paging};

pub trait InstitutionJobService: Send + Sync + 'static {
    fn get_institution_jobs(
        &self,
        paging: Paging,
        filter: InstitutionJobFilter,
        bypass_cache: bool,
    ) -> impl Future<Output = EedmResult<Page<InstitutionJobs>>> + Send;

    fn get_institution_jobs2(
        &self,
        paging: Paging,
        filter: InstitutionJobFilter,
        bypass_cache: bool,
    ) -> impl Future<Output = EedmResult<Page<InstitutionJobs2>>> + Send;

    fn get_institution_jobs3(
        &self,
        paging: Paging,
        filter: InstitutionJobFilter,
        bypass_cache: bool,
    ) -> impl Future<Output = EedmResult<Page<InstitutionJobs3>>> + Send;

    fn get_institution_job_by_guid(
        &self,
        guid: String,
    ) -> impl Future<Output = EedmResult<InstitutionJobs>> + Send;

    fn get_institution_job2_by_guid(
        &self,
        guid: String,
    ) -> impl Future<Output = EedmResult<InstitutionJobs2>> + Send;

    fn get_institution_job3_by_guid(
        &self,
        guid: String,
        bypass_cache: bool,
    ) -> impl Future<Output = EedmResult<InstitutionJobs3>> + Send;

    fn create_institution_job(
        &self,
        job: InstitutionJobs3,
    ) -> impl Future<Output = EedmResult<InstitutionJobs3>> + Send;

    fn update_institution_job(
        &self,
        job: InstitutionJobs3,
    ) -> impl Future<Output = EedmResult<InstitutionJobs3>> + Send;
}
