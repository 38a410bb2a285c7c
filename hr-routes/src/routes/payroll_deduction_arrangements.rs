use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use eedm::EndpointError;
use eedm::cache::BypassCache;
use eedm::context::Upsert;
use eedm::criteria::has_blank_filter;
use eedm::error::{EedmError, EedmResult, IntegrationErrors};
use eedm::guid::GuidOperation;
use eedm::metrics;
use eedm::paging::{Paging, PagingParams};
use eedm::payload::WritePayload;
use eedm::router::{RouterBuilder, Verb};
use eedm::version::{RequestedVersion, RouteVersion, VersionTable};
use error_stack::Report;
use hr_core::HrEngine;
use hr_core::filter::ArrangementQuery;
use hr_core::model::PayrollDeductionArrangements;
use hr_core::permissions::CREATE_PAYROLL_DEDUCTION_ARRANGEMENTS;
use hr_core::service::PayrollDeductionArrangementService;
use tracing::instrument;
use utoipa::OpenApi;

const RESOURCE: &str = "payroll-deduction-arrangements";
const ARRANGEMENTS_PATH: &str = "/payroll-deduction-arrangements";
const ARRANGEMENT_PATH: &str = "/payroll-deduction-arrangements/{id}";

const DEFAULT_PAGE_LIMIT: u64 = 100;

const PERMISSIONS: &[&str] = &[CREATE_PAYROLL_DEDUCTION_ARRANGEMENTS];

const PERSON_CHANGED: &str = "The person id cannot be changed on an update request.";

const VERSIONS: VersionTable<()> = VersionTable::new(&[RouteVersion::default("7", ())]);

#[derive(OpenApi)]
#[openapi(
    paths(
        list_arrangements,
        get_arrangement,
        create_arrangement,
        update_arrangement
    ),
    components(schemas(PayrollDeductionArrangements))
)]
pub(super) struct PayrollDeductionArrangementDocs;

pub(super) fn routes<T: HrEngine>(builder: RouterBuilder<AppState<T>>) -> RouterBuilder<AppState<T>> {
    builder
        .get(ARRANGEMENTS_PATH, list_arrangements::<T>)
        .get(ARRANGEMENT_PATH, get_arrangement::<T>)
        .post(ARRANGEMENTS_PATH, create_arrangement::<T>)
        .put(ARRANGEMENT_PATH, update_arrangement::<T>)
        .not_supported(Verb::Delete, ARRANGEMENT_PATH)
}

#[utoipa::path(
    get,
    path = ARRANGEMENTS_PATH,
    tag = RESOURCE,
    params(PagingParams, ArrangementQuery),
    responses(
        (status = OK, description = "One page of payroll deduction arrangements", body = Vec<PayrollDeductionArrangements>),
        (status = FORBIDDEN, description = "The caller may not view arrangements", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn list_arrangements<T: HrEngine>(
    State(state): State<AppState<T>>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
    uri: Uri,
    Query(paging): Query<PagingParams>,
    Query(query): Query<ArrangementQuery>,
) -> Result<Response, EndpointError> {
    let resolved = VERSIONS.resolve(&version)?;
    let paging = Paging::from_params(&paging, DEFAULT_PAGE_LIMIT);
    let request = state.read(RESOURCE, &resolved, bypass_cache);

    if has_blank_filter(query.values()) {
        return Ok(request.empty_page(&uri, paging));
    }

    request.authorize(PERMISSIONS)?;

    let page = state
        .engine
        .payroll_deduction_arrangements()
        .get_payroll_deduction_arrangements(paging, query, bypass_cache)
        .await?;
    Ok(request.page(&uri, paging, page).await?)
}

#[utoipa::path(
    get,
    path = ARRANGEMENT_PATH,
    tag = RESOURCE,
    params(("id" = String, Path, description = "GUID of the arrangement")),
    responses(
        (status = OK, description = "The payroll deduction arrangement", body = PayrollDeductionArrangements),
        (status = NOT_FOUND, description = "No arrangement has the GUID", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn get_arrangement<T: HrEngine>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
) -> Result<Response, EndpointError> {
    let resolved = VERSIONS.resolve(&version)?;
    let request = state.read(RESOURCE, &resolved, bypass_cache);

    request.authorize(PERMISSIONS)?;

    let arrangement = state
        .engine
        .payroll_deduction_arrangements()
        .get_payroll_deduction_arrangement_by_guid(id)
        .await?;
    Ok(request.respond(StatusCode::OK, &arrangement).await?)
}

#[utoipa::path(
    post,
    path = ARRANGEMENTS_PATH,
    tag = RESOURCE,
    request_body(content = PayrollDeductionArrangements, content_type = "application/json"),
    responses(
        (status = OK, description = "The created arrangement", body = PayrollDeductionArrangements),
        (status = BAD_REQUEST, description = "The body was rejected", body = IntegrationErrors),
    )
)]
#[instrument(skip(state, body), err(Debug))]
async fn create_arrangement<T: HrEngine>(
    State(state): State<AppState<T>>,
    version: RequestedVersion,
    body: Bytes,
) -> Result<Response, EndpointError> {
    let resolved = VERSIONS.resolve(&version)?;
    let request = state.write(RESOURCE, &resolved);

    let mut payload = WritePayload::parse(&body)?;
    request.authorize(PERMISSIONS)?;
    payload.settle_guid(None, GuidOperation::Create)?;

    let arrangements = state.engine.payroll_deduction_arrangements();
    let arrangement = request
        .create(payload, |arrangement| {
            arrangements.create_payroll_deduction_arrangement(arrangement)
        })
        .await?;

    metrics::increment_resources_created(RESOURCE);
    Ok(request.respond(StatusCode::OK, &arrangement).await?)
}

/// Update an arrangement with a full or partial representation. The person an
/// arrangement belongs to is fixed once stored.
#[utoipa::path(
    put,
    path = ARRANGEMENT_PATH,
    tag = RESOURCE,
    params(("id" = String, Path, description = "GUID of the arrangement")),
    request_body(content = PayrollDeductionArrangements, content_type = "application/json"),
    responses(
        (status = OK, description = "The updated arrangement", body = PayrollDeductionArrangements),
        (status = BAD_REQUEST, description = "The body was rejected or changes the person", body = IntegrationErrors),
    )
)]
#[instrument(skip(state, body), err(Debug))]
async fn update_arrangement<T: HrEngine>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    version: RequestedVersion,
    body: Bytes,
) -> Result<Response, EndpointError> {
    let resolved = VERSIONS.resolve(&version)?;
    let request = state.write(RESOURCE, &resolved);

    let mut payload = WritePayload::parse(&body)?;
    let guid = payload.settle_guid(Some(&id), GuidOperation::Update)?;

    request.authorize(PERMISSIONS)?;
    let mask = request.privacy_list().await?;
    request.import_extended(&payload, &guid).await?;

    let arrangements = state.engine.payroll_deduction_arrangements();
    let arrangement = match request
        .merge_update(payload, &mask, || {
            arrangements.get_payroll_deduction_arrangement_by_guid(guid.clone())
        })
        .await?
    {
        Upsert::Update { merged, original } => {
            keep_person(&original, &merged)?;
            let arrangement = arrangements
                .update_payroll_deduction_arrangement(guid, merged)
                .await?;
            metrics::increment_resources_updated(RESOURCE);
            arrangement
        }
        Upsert::Create(arrangement) => {
            let arrangement = arrangements
                .update_payroll_deduction_arrangement(guid, arrangement)
                .await?;
            metrics::increment_resources_created(RESOURCE);
            arrangement
        }
    };

    Ok(request.respond_with(StatusCode::OK, &arrangement, mask).await?)
}

fn keep_person(
    original: &PayrollDeductionArrangements,
    merged: &PayrollDeductionArrangements,
) -> EedmResult<()> {
    if original.person.id != merged.person.id {
        return Err(Report::new(EedmError::validation(PERSON_CHANGED)));
    }
    Ok(())
}
