use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use eedm::EndpointError;
use eedm::cache::BypassCache;
use eedm::criteria::{Criteria, CriteriaParams};
use eedm::error::IntegrationErrors;
use eedm::router::{RouterBuilder, Verb};
use eedm::version::{RequestedVersion, RouteVersion, VersionTable};
use hr_core::HrEngine;
use hr_core::filter::PayClassFilter;
use hr_core::model::{PayClasses, PayClasses2};
use hr_core::service::PayClassService;
use tracing::instrument;
use utoipa::OpenApi;

const RESOURCE: &str = "pay-classes";
const PAY_CLASSES_PATH: &str = "/pay-classes";
const PAY_CLASS_PATH: &str = "/pay-classes/{id}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Schema {
    V11,
    V12,
}

const READ_VERSIONS: VersionTable<Schema> = VersionTable::new(&[
    RouteVersion::supported("11", Schema::V11),
    RouteVersion::default("12.1.0", Schema::V12),
]);

#[derive(OpenApi)]
#[openapi(
    paths(list_pay_classes, get_pay_class),
    components(schemas(PayClasses, PayClasses2))
)]
pub(super) struct PayClassDocs;

pub(super) fn routes<T: HrEngine>(builder: RouterBuilder<AppState<T>>) -> RouterBuilder<AppState<T>> {
    builder
        .get(PAY_CLASSES_PATH, list_pay_classes::<T>)
        .get(PAY_CLASS_PATH, get_pay_class::<T>)
        .not_supported(Verb::Post, PAY_CLASSES_PATH)
        .not_supported(Verb::Put, PAY_CLASS_PATH)
        .not_supported(Verb::Delete, PAY_CLASS_PATH)
}

/// List pay classes. 12.1.0 can narrow the list down by `code`.
#[utoipa::path(
    get,
    path = PAY_CLASSES_PATH,
    tag = RESOURCE,
    params(CriteriaParams),
    responses(
        (status = OK, description = "All matching pay classes", body = Vec<PayClasses2>),
        (status = BAD_REQUEST, description = "The filter could not be used", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn list_pay_classes<T: HrEngine>(
    State(state): State<AppState<T>>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
    Query(criteria): Query<CriteriaParams>,
) -> Result<Response, EndpointError> {
    let resolved = READ_VERSIONS.resolve(&version)?;
    let request = state.read(RESOURCE, &resolved, bypass_cache);
    let pay_classes = state.engine.pay_classes();

    if resolved.target == Schema::V11 {
        let pay_classes = pay_classes.get_pay_classes(bypass_cache).await?;
        return Ok(request.collection(pay_classes).await?);
    }

    let Criteria::Filter(filter) = criteria.parse::<PayClassFilter>()? else {
        return Ok(request.collection(Vec::<PayClasses2>::new()).await?);
    };

    let mut pay_classes = pay_classes.get_pay_classes2(bypass_cache).await?;
    if let Some(code) = filter.code.as_deref() {
        pay_classes.retain(|pay_class| pay_class.code == code);
    }

    Ok(request.collection(pay_classes).await?)
}

#[utoipa::path(
    get,
    path = PAY_CLASS_PATH,
    tag = RESOURCE,
    params(("id" = String, Path, description = "GUID of the pay class")),
    responses(
        (status = OK, description = "The pay class", body = PayClasses2),
        (status = NOT_FOUND, description = "No pay class has the GUID", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn get_pay_class<T: HrEngine>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
) -> Result<Response, EndpointError> {
    let resolved = READ_VERSIONS.resolve(&version)?;
    let request = state.read(RESOURCE, &resolved, bypass_cache);
    let pay_classes = state.engine.pay_classes();

    let response = match resolved.target {
        Schema::V11 => {
            let pay_class = pay_classes.get_pay_class_by_guid(id, bypass_cache).await?;
            request.respond(StatusCode::OK, &pay_class).await?
        }
        Schema::V12 => {
            let pay_class = pay_classes.get_pay_class2_by_guid(id, bypass_cache).await?;
            request.respond(StatusCode::OK, &pay_class).await?
        }
    };

    Ok(response)
}
