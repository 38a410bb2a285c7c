use crate::state::AppState;
use axum::Router;
use eedm::router::RouterBuilder;
use hr_core::HrEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use utoipa::OpenApi;

mod earning_types;
mod employees;
mod institution_jobs;
mod institution_positions;
mod leave_types;
mod pay_classes;
mod payroll_deduction_arrangements;
mod performance_reviews;

#[cfg(test)]
mod tests;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR API",
        description = "Human resources resources in the Ethos EEDM format. Pick a schema version with the `Accept` header, e.g. `application/vnd.hedtech.integration.v12+json`."
    ),
    components(schemas(eedm::error::IntegrationErrors, eedm::error::IntegrationError))
)]
struct ApiDoc;

pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut api = ApiDoc::openapi();
    api.merge(employees::EmployeeDocs::openapi());
    api.merge(institution_jobs::InstitutionJobDocs::openapi());
    api.merge(institution_positions::InstitutionPositionDocs::openapi());
    api.merge(earning_types::EarningTypeDocs::openapi());
    api.merge(leave_types::LeaveTypeDocs::openapi());
    api.merge(pay_classes::PayClassDocs::openapi());
    api.merge(performance_reviews::PerformanceReviewDocs::openapi());
    api.merge(payroll_deduction_arrangements::PayrollDeductionArrangementDocs::openapi());
    api
}

/// `metrics_handle` is `None` when metrics are disabled.
pub fn build<T: HrEngine>(app_state: AppState<T>, metrics_handle: Option<PrometheusHandle>) -> Router {
    let builder = RouterBuilder::new();
    let builder = employees::routes(builder);
    let builder = institution_jobs::routes(builder);
    let builder = institution_positions::routes(builder);
    let builder = earning_types::routes(builder);
    let builder = leave_types::routes(builder);
    let builder = pay_classes::routes(builder);
    let builder = performance_reviews::routes(builder);
    let builder = payroll_deduction_arrangements::routes(builder);

    builder.build(app_state, api_doc(), metrics_handle)
}
