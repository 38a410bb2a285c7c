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
use hr_core::model::EarningTypes;
use hr_core::service::EarningTypeService;
use tracing::instrument;
use utoipa::OpenApi;

const RESOURCE: &str = "earning-types";
const EARNING_TYPES_PATH: &str = "/earning-types";
const EARNING_TYPE_PATH: &str = "/earning-types/{id}";

const READ_VERSIONS: VersionTable<()> = VersionTable::new(&[RouteVersion::default("12", ())]);

#[derive(OpenApi)]
#[openapi(paths(list_earning_types, get_earning_type), components(schemas(EarningTypes)))]
pub(super) struct EarningTypeDocs;

pub(super) fn routes<T: HrEngine>(builder: RouterBuilder<AppState<T>>) -> RouterBuilder<AppState<T>> {
    builder
        .get(EARNING_TYPES_PATH, list_earning_types::<T>)
        .get(EARNING_TYPE_PATH, get_earning_type::<T>)
        .not_supported(Verb::Post, EARNING_TYPES_PATH)
        .not_supported(Verb::Put, EARNING_TYPE_PATH)
        .not_supported(Verb::Delete, EARNING_TYPE_PATH)
}

#[utoipa::path(
    get,
    path = EARNING_TYPES_PATH,
    tag = RESOURCE,
    responses(
        (status = OK, description = "All earning types", body = Vec<EarningTypes>),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn list_earning_types<T: HrEngine>(
    State(state): State<AppState<T>>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
) -> Result<Response, EndpointError> {
    let resolved = READ_VERSIONS.resolve(&version)?;
    let request = state.read(RESOURCE, &resolved, bypass_cache);

    let earning_types = state.engine.earning_types().get_earning_types(bypass_cache).await?;
    Ok(request.collection(earning_types).await?)
}

#[utoipa::path(
    get,
    path = EARNING_TYPE_PATH,
    tag = RESOURCE,
    params(("id" = String, Path, description = "GUID of the earning type")),
    responses(
        (status = OK, description = "The earning type", body = EarningTypes),
        (status = NOT_FOUND, description = "No earning type has the GUID", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn get_earning_type<T: HrEngine>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
) -> Result<Response, EndpointError> {
    let resolved = READ_VERSIONS.resolve(&version)?;
    let request = state.read(RESOURCE, &resolved, bypass_cache);

    let earning_type = state
        .engine
        .earning_types()
        .get_earning_type_by_guid(id, bypass_cache)
        .await?;
    Ok(request.respond(StatusCode::OK, &earning_type).await?)
}
