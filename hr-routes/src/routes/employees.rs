use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use eedm::EndpointError;
use eedm::cache::BypassCache;
use eedm::context::Upsert;
use eedm::criteria::{Criteria, CriteriaParams, has_blank_filter};
use eedm::error::{EedmError, EedmResult, IntegrationErrors};
use eedm::guid::{self, GuidOperation};
use eedm::metrics;
use eedm::paging::{Paging, PagingParams};
use eedm::payload::WritePayload;
use eedm::router::{RouterBuilder, Verb};
use eedm::version::{RequestedVersion, RouteVersion, VersionTable};
use error_stack::Report;
use hr_core::filter::{EmployeeFilter, EmployeeQuery};
use hr_core::model::{Employee, Employee2};
use hr_core::permissions::{UPDATE_EMPLOYEE, VIEW_EMPLOYEE_DATA};
use hr_core::service::EmployeeService;
use hr_core::HrEngine;
use serde_json::Value;
use tracing::instrument;
use utoipa::OpenApi;

const RESOURCE: &str = "employees";
const EMPLOYEES_PATH: &str = "/employees";
const EMPLOYEE_PATH: &str = "/employees/{id}";

const DEFAULT_PAGE_LIMIT: u64 = 100;

const VIEW_PERMISSIONS: &[&str] = &[VIEW_EMPLOYEE_DATA, UPDATE_EMPLOYEE];
const UPDATE_PERMISSIONS: &[&str] = &[UPDATE_EMPLOYEE];

const NIL_GUID_ON_PUT: &str = "Nil GUID cannot be used in PUT operation.";
const HOME_ORGANIZATION_NOT_ALLOWED: &str =
    "The Home Organization Id is not allowed for a PUT or POST request.";

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

const WRITE_VERSIONS: VersionTable<()> = VersionTable::new(&[
    RouteVersion::not_supported("7"),
    RouteVersion::not_supported("11"),
    RouteVersion::default("12", ()),
]);

#[derive(OpenApi)]
#[openapi(
    paths(list_employees, get_employee, create_employee, update_employee),
    components(schemas(Employee, Employee2))
)]
pub(super) struct EmployeeDocs;

pub(super) fn routes<T: HrEngine>(builder: RouterBuilder<AppState<T>>) -> RouterBuilder<AppState<T>> {
    builder
        .get(EMPLOYEES_PATH, list_employees::<T>)
        .get(EMPLOYEE_PATH, get_employee::<T>)
        .post(EMPLOYEES_PATH, create_employee::<T>)
        .put(EMPLOYEE_PATH, update_employee::<T>)
        .not_supported(Verb::Delete, EMPLOYEE_PATH)
}

/// List employees. v7 filters with plain query parameters, v11 and v12 with
/// `criteria`.
#[utoipa::path(
    get,
    path = EMPLOYEES_PATH,
    tag = RESOURCE,
    params(PagingParams, EmployeeQuery, CriteriaParams),
    responses(
        (status = OK, description = "One page of employees", body = Vec<Employee2>),
        (status = BAD_REQUEST, description = "The filter could not be used", body = IntegrationErrors),
        (status = FORBIDDEN, description = "The caller may not view employees", body = IntegrationErrors),
        (status = NOT_ACCEPTABLE, description = "Unknown schema version", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn list_employees<T: HrEngine>(
    State(state): State<AppState<T>>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
    uri: Uri,
    Query(paging): Query<PagingParams>,
    Query(query): Query<EmployeeQuery>,
    Query(criteria): Query<CriteriaParams>,
) -> Result<Response, EndpointError> {
    let resolved = READ_VERSIONS.resolve(&version)?;
    let paging = Paging::from_params(&paging, DEFAULT_PAGE_LIMIT);
    let request = state.read(RESOURCE, &resolved, bypass_cache);
    let employees = state.engine.employees();

    if resolved.target == Schema::V7 {
        if has_blank_filter(query.values()) {
            return Ok(request.empty_page(&uri, paging));
        }

        request.authorize(VIEW_PERMISSIONS)?;
        let page = employees.get_employees(paging, query, bypass_cache).await?;
        return Ok(request.page(&uri, paging, page).await?);
    }

    let Criteria::Filter(filter) = criteria.parse::<EmployeeFilter>()? else {
        return Ok(request.empty_page(&uri, paging));
    };

    request.authorize(VIEW_PERMISSIONS)?;
    let page = if resolved.target == Schema::V11 {
        employees.get_employees2(paging, filter, bypass_cache).await?
    } else {
        employees.get_employees3(paging, filter, bypass_cache).await?
    };

    Ok(request.page(&uri, paging, page).await?)
}

/// Get one employee.
#[utoipa::path(
    get,
    path = EMPLOYEE_PATH,
    tag = RESOURCE,
    params(("id" = String, Path, description = "GUID of the employee")),
    responses(
        (status = OK, description = "The employee", body = Employee2),
        (status = NOT_FOUND, description = "No employee has the GUID", body = IntegrationErrors),
        (status = FORBIDDEN, description = "The caller may not view employees", body = IntegrationErrors),
    )
)]
#[instrument(skip(state), err(Debug))]
async fn get_employee<T: HrEngine>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    version: RequestedVersion,
    BypassCache(bypass_cache): BypassCache,
) -> Result<Response, EndpointError> {
    let resolved = READ_VERSIONS.resolve(&version)?;
    let request = state.read(RESOURCE, &resolved, bypass_cache);
    let employees = state.engine.employees();

    request.authorize(VIEW_PERMISSIONS)?;

    let response = match resolved.target {
        Schema::V7 => {
            let employee = employees.get_employee_by_guid(id).await?;
            request.respond(StatusCode::OK, &employee).await?
        }
        Schema::V11 => {
            let employee = employees.get_employee2_by_guid(id).await?;
            request.respond(StatusCode::OK, &employee).await?
        }
        Schema::V12 => {
            let employee = employees.get_employee3_by_guid(id, bypass_cache).await?;
            request.respond(StatusCode::OK, &employee).await?
        }
    };

    Ok(response)
}

/// Create an employee. The body must carry the nil GUID.
#[utoipa::path(
    post,
    path = EMPLOYEES_PATH,
    tag = RESOURCE,
    request_body(content = Employee2, content_type = "application/json"),
    responses(
        (status = OK, description = "The created employee", body = Employee2),
        (status = BAD_REQUEST, description = "The body was rejected", body = IntegrationErrors),
        (status = METHOD_NOT_ALLOWED, description = "Versions 7 and 11 cannot create employees", body = IntegrationErrors),
    )
)]
#[instrument(skip(state, body), err(Debug))]
async fn create_employee<T: HrEngine>(
    State(state): State<AppState<T>>,
    version: RequestedVersion,
    body: Bytes,
) -> Result<Response, EndpointError> {
    let resolved = WRITE_VERSIONS.resolve(&version)?;
    let request = state.write(RESOURCE, &resolved);

    let mut payload = WritePayload::parse(&body)?;
    payload.settle_guid(None, GuidOperation::Create)?;

    request.authorize(UPDATE_PERMISSIONS)?;
    reject_home_organization(&payload)?;

    let employees = state.engine.employees();
    let employee = request
        .create(payload, |employee| employees.create_employee2(employee))
        .await?;

    metrics::increment_resources_created(RESOURCE);
    Ok(request.respond(StatusCode::OK, &employee).await?)
}

/// Update an employee with a full or partial representation. Fields the body
/// leaves out keep their stored value.
#[utoipa::path(
    put,
    path = EMPLOYEE_PATH,
    tag = RESOURCE,
    params(("id" = String, Path, description = "GUID of the employee")),
    request_body(content = Employee2, content_type = "application/json"),
    responses(
        (status = OK, description = "The updated employee", body = Employee2),
        (status = BAD_REQUEST, description = "The body was rejected", body = IntegrationErrors),
        (status = METHOD_NOT_ALLOWED, description = "Versions 7 and 11 cannot update employees", body = IntegrationErrors),
    )
)]
#[instrument(skip(state, body), err(Debug))]
async fn update_employee<T: HrEngine>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    version: RequestedVersion,
    body: Bytes,
) -> Result<Response, EndpointError> {
    let resolved = WRITE_VERSIONS.resolve(&version)?;
    let request = state.write(RESOURCE, &resolved);

    let mut payload = WritePayload::parse(&body)?;
    if guid::is_nil(&id) {
        return Err(EedmError::validation(NIL_GUID_ON_PUT).into());
    }
    let guid = payload.settle_guid(Some(&id), GuidOperation::Update)?;

    request.authorize(UPDATE_PERMISSIONS)?;
    reject_home_organization(&payload)?;

    let mask = request.privacy_list().await?;
    request.import_extended(&payload, &guid).await?;

    let employees = state.engine.employees();
    let employee = match request
        .merge_update(payload, &mask, || employees.get_employee3_by_guid(guid.clone(), true))
        .await?
    {
        Upsert::Update { merged, original } => {
            let employee = employees.update_employee2(guid, merged, original).await?;
            metrics::increment_resources_updated(RESOURCE);
            employee
        }
        Upsert::Create(employee) => {
            let employee = employees.create_employee2(employee).await?;
            metrics::increment_resources_created(RESOURCE);
            employee
        }
    };

    Ok(request.respond_with(StatusCode::OK, &employee, mask).await?)
}

fn reject_home_organization(payload: &WritePayload) -> EedmResult<()> {
    let home_organization = payload
        .pointer("/homeOrganization/id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty());

    match home_organization {
        Some(_) => Err(Report::new(EedmError::validation(HOME_ORGANIZATION_NOT_ALLOWED))),
        None => Ok(()),
    }
}
