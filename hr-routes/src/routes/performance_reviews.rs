use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use eedm::EndpointError;
use eedm::cache::BypassCache;
use eedm::context::Upsert;
use eedm::error::{EedmError, IntegrationErrors};
use eedm::guid::GuidOperation;
use eedm::metrics;
use eedm::paging::{Paging, PagingParams};
use eedm::payload::WritePayload;
use eedm::router::RouterBuilder;
use eedm::version::{RequestedVersion, RouteVersion, VersionTable};
use hr_core::HrEngine;
use hr_core::model::EmploymentPerformanceReviews;
use hr_core::permissions::{
    CREATE_UPDATE_EMPLOYMENT_PERFORMANCE_REVIEW, DELETE_EMPLOYMENT_PERFORMANCE_REVIEW,
    VIEW_EMPLOYMENT_PERFORMANCE_REVIEW,
};
use hr_core::service::PerformanceReviewService;
use tracing::{info, instrument};
use utoipa::OpenApi;

const RESOURCE: &str = "employment-performance-reviews";
const REVIEWS_PATH: &str = "/employment-performance-reviews";
const REVIEW_PATH: &str = "/employment-performance-reviews/{id}";

const DEFAULT_PAGE_LIMIT: u64 = 100;

const VIEW_PERMISSIONS: &[&str] = &[
    VIEW_EMPLOYMENT_PERFORMANCE_REVIEW,
    CREATE_UPDATE_EMPLOYMENT_PERFORMANCE_REVIEW,
];
const WRITE_PERMISSIONS: &[&str] = &[CREATE_UPDATE_EMPLOYMENT_PERFORMANCE_REVIEW];
const DELETE_PERMISSIONS: &[&str] = &[DELETE_EMPLOYMENT_PERFORMANCE_REVIEW];

const GUID_REQUIRED_ON_DELETE: &str = "Employment performance review guid cannot be null or empty";

const VERSIONS: VersionTable<()> = VersionTable::new(&[RouteVersion::default("10", ())]);

#[derive(OpenApi)]
#[openapi(
    paths(
        list_performance_reviews,
        get_performance_review,
        create_performance_review,
        update_performance_review,
        delete_performance_review
    ),
    components(schemas(EmploymentPerformanceReviews))
)]
pub(super) struct PerformanceReviewDocs;

pub(super) fn routes<T: HrEngine>(builder: RouterBuilder<AppState<T>>) -> RouterBuilder<AppState<T>> {
    builder
        .get(REVIEWS_PATH, list_performance_reviews::<T>)
        .get(REVIEW_PATH, get_performance_review::<T>)
        .post(REVIEWS_PATH, create_performance_review::<T>)
        .put(REVIEW_PATH, update_performance_review::<T>)
        .delete(REVIEW_PATH, delete_performance_review::<T>)
}

#[utoipa::path(
    get,
    path = REVIEWS_PATH,
    tag = RESOURCE,
    params(PagingParams),
    responses(
        (status = OK, description = "One page of performance reviews", body = Vec<EmploymentPerformanceReviews>),
        (status = FORBIDDEN, description = "The caller may not view performance reviews", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn list_performance_reviews<T: HrEngine>(
    State(state): State<AppState<T>>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
    uri: Uri,
    Query(paging): Query<PagingParams>,
) -> Result<Response, EndpointError> {
    let resolved = VERSIONS.resolve(&version)?;
    let paging = Paging::from_params(&paging, DEFAULT_PAGE_LIMIT);
    let request = state.read(RESOURCE, &resolved, bypass_cache);

    request.authorize(VIEW_PERMISSIONS)?;

    let page = state
        .engine
        .performance_reviews()
        .get_performance_reviews(paging, bypass_cache)
        .await?;
    Ok(request.page(&uri, paging, page).await?)
}

#[utoipa::path(
    get,
    path = REVIEW_PATH,
    tag = RESOURCE,
    params(("id" = String, Path, description = "GUID of the performance review")),
    responses(
        (status = OK, description = "The performance review", body = EmploymentPerformanceReviews),
        (status = NOT_FOUND, description = "No performance review has the GUID", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn get_performance_review<T: HrEngine>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
) -> Result<Response, EndpointError> {
    let resolved = VERSIONS.resolve(&version)?;
    let request = state.read(RESOURCE, &resolved, bypass_cache);

    request.authorize(VIEW_PERMISSIONS)?;

    let review = state
        .engine
        .performance_reviews()
        .get_performance_review_by_guid(id)
        .await?;
    Ok(request.respond(StatusCode::OK, &review).await?)
}

#[utoipa::path(
    post,
    path = REVIEWS_PATH,
    tag = RESOURCE,
    request_body(content = EmploymentPerformanceReviews, content_type = "application/json"),
    responses(
        (status = OK, description = "The created performance review", body = EmploymentPerformanceReviews),
        (status = BAD_REQUEST, description = "The body was rejected", body = IntegrationErrors),
    )
)]
#[instrument(skip(state, body), err(Debug))]
async fn create_performance_review<T: HrEngine>(
    State(state): State<AppState<T>>,
    version: RequestedVersion,
    body: Bytes,
) -> Result<Response, EndpointError> {
    let resolved = VERSIONS.resolve(&version)?;
    let request = state.write(RESOURCE, &resolved);

    let mut payload = WritePayload::parse(&body)?;
    request.authorize(WRITE_PERMISSIONS)?;
    payload.settle_guid(None, GuidOperation::Create)?;

    let reviews = state.engine.performance_reviews();
    let review = request
        .create(payload, |review| reviews.create_performance_review(review))
        .await?;

    metrics::increment_resources_created(RESOURCE);
    Ok(request.respond(StatusCode::OK, &review).await?)
}

#[utoipa::path(
    put,
    path = REVIEW_PATH,
    tag = RESOURCE,
    params(("id" = String, Path, description = "GUID of the performance review")),
    request_body(content = EmploymentPerformanceReviews, content_type = "application/json"),
    responses(
        (status = OK, description = "The updated performance review", body = EmploymentPerformanceReviews),
        (status = BAD_REQUEST, description = "The body was rejected", body = IntegrationErrors),
    )
)]
#[instrument(skip(state, body), err(Debug))]
async fn update_performance_review<T: HrEngine>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    version: RequestedVersion,
    body: Bytes,
) -> Result<Response, EndpointError> {
    let resolved = VERSIONS.resolve(&version)?;
    let request = state.write(RESOURCE, &resolved);

    let mut payload = WritePayload::parse(&body)?;
    let guid = payload.settle_guid(Some(&id), GuidOperation::Update)?;

    request.authorize(WRITE_PERMISSIONS)?;
    let mask = request.privacy_list().await?;
    request.import_extended(&payload, &guid).await?;

    let reviews = state.engine.performance_reviews();
    let review = match request
        .merge_update(payload, &mask, || reviews.get_performance_review_by_guid(guid.clone()))
        .await?
    {
        Upsert::Update { merged, .. } => {
            let review = reviews.update_performance_review(guid, merged).await?;
            metrics::increment_resources_updated(RESOURCE);
            review
        }
        Upsert::Create(review) => {
            let review = reviews.create_performance_review(review).await?;
            metrics::increment_resources_created(RESOURCE);
            review
        }
    };

    Ok(request.respond_with(StatusCode::OK, &review, mask).await?)
}

#[utoipa::path(
    delete,
    path = REVIEW_PATH,
    tag = RESOURCE,
    params(("id" = String, Path, description = "GUID of the performance review")),
    responses(
        (status = NO_CONTENT, description = "The performance review was deleted"),
        (status = NOT_FOUND, description = "No performance review has the GUID", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn delete_performance_review<T: HrEngine>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    version: RequestedVersion,
) -> Result<Response, EndpointError> {
    let resolved = VERSIONS.resolve(&version)?;
    let request = state.write(RESOURCE, &resolved);

    request.authorize(DELETE_PERMISSIONS)?;

    let guid = id.trim();
    if guid.is_empty() {
        return Err(EedmError::validation(GUID_REQUIRED_ON_DELETE).into());
    }

    state
        .engine
        .performance_reviews()
        .delete_performance_review(guid.to_owned())
        .await?;

    info!("deleted performance review {guid}");
    metrics::increment_resources_deleted(RESOURCE);
    Ok(StatusCode::NO_CONTENT.into_response())
}
