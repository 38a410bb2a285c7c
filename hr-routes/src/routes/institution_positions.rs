use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use eedm::EndpointError;
use eedm::cache::BypassCache;
use eedm::criteria::{Criteria, CriteriaParams, has_blank_filter};
use eedm::error::IntegrationErrors;
use eedm::paging::{Paging, PagingParams};
use eedm::router::{RouterBuilder, Verb};
use eedm::version::{RequestedVersion, RouteVersion, VersionTable};
use hr_core::HrEngine;
use hr_core::filter::{PositionFilter, PositionQuery};
use hr_core::model::{InstitutionPosition, InstitutionPosition2};
use hr_core::permissions::VIEW_INSTITUTION_POSITION;
use hr_core::service::InstitutionPositionService;
use tracing::{debug, instrument};
use utoipa::OpenApi;

const RESOURCE: &str = "institution-positions";
const POSITIONS_PATH: &str = "/institution-positions";
const POSITION_PATH: &str = "/institution-positions/{id}";

const DEFAULT_PAGE_LIMIT: u64 = 100;

const VIEW_PERMISSIONS: &[&str] = &[VIEW_INSTITUTION_POSITION];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Schema {
    V7,
    V11,
    V12,
}

const READ_VERSIONS: VersionTable<Schema> = VersionTable::new(&[
    RouteVersion::supported("7", Schema::V7),
    RouteVersion::supported("11", Schema::V11),
    RouteVersion::default("12", Schema::V12),
]);

#[derive(OpenApi)]
#[openapi(
    paths(list_institution_positions, get_institution_position),
    components(schemas(InstitutionPosition, InstitutionPosition2))
)]
pub(super) struct InstitutionPositionDocs;

pub(super) fn routes<T: HrEngine>(builder: RouterBuilder<AppState<T>>) -> RouterBuilder<AppState<T>> {
    builder
        .get(POSITIONS_PATH, list_institution_positions::<T>)
        .get(POSITION_PATH, get_institution_position::<T>)
        .not_supported(Verb::Post, POSITIONS_PATH)
        .not_supported(Verb::Put, POSITION_PATH)
        .not_supported(Verb::Delete, POSITION_PATH)
}

/// List institution positions. Frozen positions are only reachable through
/// the v7 status filter, which rejects them.
#[utoipa::path(
    get,
    path = POSITIONS_PATH,
    tag = RESOURCE,
    params(PagingParams, PositionQuery, CriteriaParams),
    responses(
        (status = OK, description = "One page of institution positions", body = Vec<InstitutionPosition2>),
        (status = BAD_REQUEST, description = "The filter could not be used", body = IntegrationErrors),
        (status = FORBIDDEN, description = "The caller may not view positions", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn list_institution_positions<T: HrEngine>(
    State(state): State<AppState<T>>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
    uri: Uri,
    Query(paging): Query<PagingParams>,
    Query(query): Query<PositionQuery>,
    Query(criteria): Query<CriteriaParams>,
) -> Result<Response, EndpointError> {
    let resolved = READ_VERSIONS.resolve(&version)?;
    let paging = Paging::from_params(&paging, DEFAULT_PAGE_LIMIT);
    let request = state.read(RESOURCE, &resolved, bypass_cache);
    let positions = state.engine.institution_positions();

    if resolved.target == Schema::V7 {
        if has_blank_filter(query.values()) {
            return Ok(request.empty_page(&uri, paging));
        }

        request.authorize(VIEW_PERMISSIONS)?;
        query.validate_status()?;

        let page = positions
            .get_institution_positions(paging, query, bypass_cache)
            .await?;
        return Ok(request.page(&uri, paging, page).await?);
    }

    request.authorize(VIEW_PERMISSIONS)?;

    let Criteria::Filter(filter) = criteria.parse::<PositionFilter>()? else {
        return Ok(request.empty_page(&uri, paging));
    };
    if filter.matches_nothing() {
        debug!("criteria asks for frozen positions");
        return Ok(request.empty_page(&uri, paging));
    }

    let response = match resolved.target {
        Schema::V12 => {
            let page = positions
                .get_institution_positions3(paging, filter, bypass_cache)
                .await?;
            request.page(&uri, paging, page).await?
        }
        _ => {
            let page = positions
                .get_institution_positions2(paging, filter, bypass_cache)
                .await?;
            request.page(&uri, paging, page).await?
        }
    };

    Ok(response)
}

#[utoipa::path(
    get,
    path = POSITION_PATH,
    tag = RESOURCE,
    params(("id" = String, Path, description = "GUID of the institution position")),
    responses(
        (status = OK, description = "The institution position", body = InstitutionPosition2),
        (status = NOT_FOUND, description = "No institution position has the GUID", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn get_institution_position<T: HrEngine>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
) -> Result<Response, EndpointError> {
    let resolved = READ_VERSIONS.resolve(&version)?;
    let request = state.read(RESOURCE, &resolved, bypass_cache);

    request.authorize(VIEW_PERMISSIONS)?;

    let positions = state.engine.institution_positions();
    let response = match resolved.target {
        Schema::V7 => {
            let position = positions
                .get_institution_position_by_guid(id, bypass_cache)
                .await?;
            request.respond(StatusCode::OK, &position).await?
        }
        Schema::V11 => {
            let position = positions
                .get_institution_position2_by_guid(id, bypass_cache)
                .await?;
            request.respond(StatusCode::OK, &position).await?
        }
        Schema::V12 => {
            let position = positions
                .get_institution_position3_by_guid(id, bypass_cache)
                .await?;
            request.respond(StatusCode::OK, &position).await?
        }
    };

    Ok(response)
}
