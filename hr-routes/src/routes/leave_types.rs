use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use eedm::EndpointError;
use eedm::cache::BypassCache;
use eedm::error::IntegrationErrors;
use eedm::router::{RouterBuilder, Verb};
use eedm::version::{RequestedVersion, RouteVersion, VersionTable};
use hr_core::HrEngine;
use hr_core::model::LeaveTypes;
use hr_core::service::LeaveTypeService;
use tracing::instrument;
use utoipa::OpenApi;

const RESOURCE: &str = "leave-types";
const LEAVE_TYPES_PATH: &str = "/leave-types";
const LEAVE_TYPE_PATH: &str = "/leave-types/{id}";

const READ_VERSIONS: VersionTable<()> = VersionTable::new(&[RouteVersion::default("11", ())]);

#[derive(OpenApi)]
#[openapi(paths(list_leave_types, get_leave_type), components(schemas(LeaveTypes)))]
pub(super) struct LeaveTypeDocs;

pub(super) fn routes<T: HrEngine>(builder: RouterBuilder<AppState<T>>) -> RouterBuilder<AppState<T>> {
    builder
        .get(LEAVE_TYPES_PATH, list_leave_types::<T>)
        .get(LEAVE_TYPE_PATH, get_leave_type::<T>)
        .not_supported(Verb::Post, LEAVE_TYPES_PATH)
        .not_supported(Verb::Put, LEAVE_TYPE_PATH)
        .not_supported(Verb::Delete, LEAVE_TYPE_PATH)
}

#[utoipa::path(
    get,
    path = LEAVE_TYPES_PATH,
    tag = RESOURCE,
    responses(
        (status = OK, description = "All leave types", body = Vec<LeaveTypes>),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn list_leave_types<T: HrEngine>(
    State(state): State<AppState<T>>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
) -> Result<Response, EndpointError> {
    let resolved = READ_VERSIONS.resolve(&version)?;
    let request = state.read(RESOURCE, &resolved, bypass_cache);

    let leave_types = state.engine.leave_types().get_leave_types(bypass_cache).await?;
    Ok(request.collection(leave_types).await?)
}

#[utoipa::path(
    get,
    path = LEAVE_TYPE_PATH,
    tag = RESOURCE,
    params(("id" = String, Path, description = "GUID of the leave type")),
    responses(
        (status = OK, description = "The leave type", body = LeaveTypes),
        (status = NOT_FOUND, description = "No leave type has the GUID", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn get_leave_type<T: HrEngine>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
) -> Result<Response, EndpointError> {
    let resolved = READ_VERSIONS.resolve(&version)?;
    let request = state.read(RESOURCE, &resolved, bypass_cache);

    let leave_type = state
        .engine
        .leave_types()
        .get_leave_type_by_guid(id, bypass_cache)
        .await?;
    Ok(request.respond(StatusCode::OK, &leave_type).await?)
}
