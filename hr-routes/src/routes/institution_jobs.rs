use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use eedm::EndpointError;
use eedm::cache::BypassCache;
use eedm::context::Upsert;
use eedm::criteria::{Criteria, CriteriaParams};
use eedm::error::IntegrationErrors;
use eedm::guid::GuidOperation;
use eedm::metrics;
use eedm::paging::{Paging, PagingParams};
use eedm::payload::WritePayload;
use eedm::router::{RouterBuilder, Verb};
use eedm::version::{RequestedVersion, RouteVersion, VersionTable};
use hr_core::HrEngine;
use hr_core::filter::InstitutionJobFilter;
use hr_core::model::{InstitutionJobs, InstitutionJobs2, InstitutionJobs3};
use hr_core::permissions::{CREATE_INSTITUTION_JOB, VIEW_INSTITUTION_JOB};
use hr_core::service::InstitutionJobService;
use tracing::instrument;
use utoipa::OpenApi;

const RESOURCE: &str = "institution-jobs";
const JOBS_PATH: &str = "/institution-jobs";
const JOB_PATH: &str = "/institution-jobs/{id}";

const DEFAULT_PAGE_LIMIT: u64 = 100;

const VIEW_PERMISSIONS: &[&str] = &[VIEW_INSTITUTION_JOB, CREATE_INSTITUTION_JOB];
const CREATE_PERMISSIONS: &[&str] = &[CREATE_INSTITUTION_JOB];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Schema {
    V8,
    V11,
    V12,
}

const READ_VERSIONS: VersionTable<Schema> = VersionTable::new(&[
    RouteVersion::supported("8", Schema::V8),
    RouteVersion::supported("11", Schema::V11),
    RouteVersion::default("12", Schema::V12),
]);

const WRITE_VERSIONS: VersionTable<()> = VersionTable::new(&[
    RouteVersion::not_supported("8"),
    RouteVersion::not_supported("11"),
    RouteVersion::default("12", ()),
]);

#[derive(OpenApi)]
#[openapi(
    paths(list_institution_jobs, get_institution_job, create_institution_job, update_institution_job),
    components(schemas(InstitutionJobs, InstitutionJobs2, InstitutionJobs3))
)]
pub(super) struct InstitutionJobDocs;

pub(super) fn routes<T: HrEngine>(builder: RouterBuilder<AppState<T>>) -> RouterBuilder<AppState<T>> {
    builder
        .get(JOBS_PATH, list_institution_jobs::<T>)
        .get(JOB_PATH, get_institution_job::<T>)
        .post(JOBS_PATH, create_institution_job::<T>)
        .put(JOB_PATH, update_institution_job::<T>)
        .not_supported(Verb::Delete, JOB_PATH)
}

#[utoipa::path(
    get,
    path = JOBS_PATH,
    tag = RESOURCE,
    params(PagingParams, CriteriaParams),
    responses(
        (status = OK, description = "One page of institution jobs", body = Vec<InstitutionJobs3>),
        (status = BAD_REQUEST, description = "The filter could not be used", body = IntegrationErrors),
        (status = FORBIDDEN, description = "The caller may not view institution jobs", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn list_institution_jobs<T: HrEngine>(
    State(state): State<AppState<T>>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
    uri: Uri,
    Query(paging): Query<PagingParams>,
    Query(criteria): Query<CriteriaParams>,
) -> Result<Response, EndpointError> {
    let resolved = READ_VERSIONS.resolve(&version)?;
    let paging = Paging::from_params(&paging, DEFAULT_PAGE_LIMIT);
    let request = state.read(RESOURCE, &resolved, bypass_cache);

    let Criteria::Filter(filter) = criteria.parse::<InstitutionJobFilter>()? else {
        return Ok(request.empty_page(&uri, paging));
    };

    request.authorize(VIEW_PERMISSIONS)?;

    let jobs = state.engine.institution_jobs();
    let response = match resolved.target {
        Schema::V8 => {
            let page = jobs.get_institution_jobs(paging, filter, bypass_cache).await?;
            request.page(&uri, paging, page).await?
        }
        Schema::V11 => {
            let page = jobs.get_institution_jobs2(paging, filter, bypass_cache).await?;
            request.page(&uri, paging, page).await?
        }
        Schema::V12 => {
            let page = jobs.get_institution_jobs3(paging, filter, bypass_cache).await?;
            request.page(&uri, paging, page).await?
        }
    };

    Ok(response)
}

#[utoipa::path(
    get,
    path = JOB_PATH,
    tag = RESOURCE,
    params(("id" = String, Path, description = "GUID of the institution job")),
    responses(
        (status = OK, description = "The institution job", body = InstitutionJobs3),
        (status = NOT_FOUND, description = "No institution job has the GUID", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn get_institution_job<T: HrEngine>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
) -> Result<Response, EndpointError> {
    let resolved = READ_VERSIONS.resolve(&version)?;
    let request = state.read(RESOURCE, &resolved, bypass_cache);

    request.authorize(VIEW_PERMISSIONS)?;

    let jobs = state.engine.institution_jobs();
    let response = match resolved.target {
        Schema::V8 => {
            let job = jobs.get_institution_job_by_guid(id).await?;
            request.respond(StatusCode::OK, &job).await?
        }
        Schema::V11 => {
            let job = jobs.get_institution_job2_by_guid(id).await?;
            request.respond(StatusCode::OK, &job).await?
        }
        Schema::V12 => {
            let job = jobs.get_institution_job3_by_guid(id, bypass_cache).await?;
            request.respond(StatusCode::OK, &job).await?
        }
    };

    Ok(response)
}

#[utoipa::path(
    post,
    path = JOBS_PATH,
    tag = RESOURCE,
    request_body(content = InstitutionJobs3, content_type = "application/json"),
    responses(
        (status = OK, description = "The created institution job", body = InstitutionJobs3),
        (status = BAD_REQUEST, description = "The body was rejected", body = IntegrationErrors),
        (status = METHOD_NOT_ALLOWED, description = "Only version 12 creates institution jobs", body = IntegrationErrors),
    )
)]
#[instrument(skip(state, body), err(Debug))]
async fn create_institution_job<T: HrEngine>(
    State(state): State<AppState<T>>,
    version: RequestedVersion,
    body: Bytes,
) -> Result<Response, EndpointError> {
    let resolved = WRITE_VERSIONS.resolve(&version)?;
    let request = state.write(RESOURCE, &resolved);

    let mut payload = WritePayload::parse(&body)?;
    request.authorize(CREATE_PERMISSIONS)?;
    payload.settle_guid(None, GuidOperation::Create)?;

    let jobs = state.engine.institution_jobs();
    let job = request
        .create(payload, |job| jobs.create_institution_job(job))
        .await?;

    metrics::increment_resources_created(RESOURCE);
    Ok(request.respond(StatusCode::OK, &job).await?)
}

/// Update an institution job with a full or partial representation. When
/// nothing is stored under the GUID yet the job is created instead.
#[utoipa::path(
    put,
    path = JOB_PATH,
    tag = RESOURCE,
    params(("id" = String, Path, description = "GUID of the institution job")),
    request_body(content = InstitutionJobs3, content_type = "application/json"),
    responses(
        (status = OK, description = "The updated institution job", body = InstitutionJobs3),
        (status = BAD_REQUEST, description = "The body was rejected", body = IntegrationErrors),
        (status = METHOD_NOT_ALLOWED, description = "Only version 12 updates institution jobs", body = IntegrationErrors),
    )
)]
#[instrument(skip(state, body), err(Debug))]
async fn update_institution_job<T: HrEngine>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    version: RequestedVersion,
    body: Bytes,
) -> Result<Response, EndpointError> {
    let resolved = WRITE_VERSIONS.resolve(&version)?;
    let request = state.write(RESOURCE, &resolved);

    let mut payload = WritePayload::parse(&body)?;
    let guid = payload.settle_guid(Some(&id), GuidOperation::Update)?;

    request.authorize(CREATE_PERMISSIONS)?;
    let mask = request.privacy_list().await?;
    request.import_extended(&payload, &guid).await?;

    let jobs = state.engine.institution_jobs();
    let job = match request
        .merge_update(payload, &mask, || jobs.get_institution_job3_by_guid(guid.clone(), true))
        .await?
    {
        Upsert::Update { merged, .. } => {
            let job = jobs.update_institution_job(merged).await?;
            metrics::increment_resources_updated(RESOURCE);
            job
        }
        Upsert::Create(job) => {
            let job = jobs.create_institution_job(job).await?;
            metrics::increment_resources_created(RESOURCE);
            job
        }
    };

    Ok(request.respond_with(StatusCode::OK, &job, mask).await?)
}
