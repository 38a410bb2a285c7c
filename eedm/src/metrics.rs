use axum::extract::{MatchedPath, Request};
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::IntoResponse;
use error_stack::{Report, ResultExt};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use tokio::time::Instant;

const REQUESTS_TOTAL_METRIC_NAME: &str = "http_requests_total";
const REQUEST_DURATION_METRIC_NAME: &str = "http_requests_duration_seconds";
const REQUEST_SIZE_METRIC_NAME: &str = "http_request_size";

const ITEMS_RETURNED_METRIC_NAME: &str = "eedm_items_returned";
const RESOURCES_CREATED_METRIC_NAME: &str = "eedm_resources_created";
const RESOURCES_UPDATED_METRIC_NAME: &str = "eedm_resources_updated";
const RESOURCES_DELETED_METRIC_NAME: &str = "eedm_resources_deleted";

#[derive(Debug, thiserror::Error)]
#[error("failed to install the prometheus recorder")]
pub struct MetricsError;

pub fn setup_recorder() -> Result<PrometheusHandle, Report<MetricsError>> {
    const EXPONENTIAL_SECONDS: &[f64] = &[0.005, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

    const REQ_RES_BUCKETS: &[f64] = &[128.0, 256.0, 512.0, 1024.0, 2048.0, 4096.0, 8192.0, 16384.0];

    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(REQUEST_DURATION_METRIC_NAME.to_string()),
            EXPONENTIAL_SECONDS,
        )
        .change_context(MetricsError)?
        .set_buckets_for_metric(
            Matcher::Full(REQUEST_SIZE_METRIC_NAME.to_string()),
            REQ_RES_BUCKETS,
        )
        .change_context(MetricsError)?
        .install_recorder()
        .change_context(MetricsError)
}

pub async fn track_http(req: Request, next: Next) -> impl IntoResponse {
    let path = if let Some(matched_path) = req.extensions().get::<MatchedPath>() {
        matched_path.as_str().to_owned()
    } else {
        req.uri().path().to_owned()
    };

    if path.ends_with("metrics") {
        return next.run(req).await;
    }

    let method = req.method().clone();

    let req_size = req
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<usize>().ok());

    if let Some(req_size) = req_size {
        metrics::histogram!(REQUEST_SIZE_METRIC_NAME).record(req_size as f64);
    }

    let start = Instant::now();
    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    let labels = [
        ("method", method.to_string()),
        ("path", path),
        ("status", status),
    ];

    metrics::counter!(REQUESTS_TOTAL_METRIC_NAME, &labels).increment(1);
    metrics::histogram!(REQUEST_DURATION_METRIC_NAME, &labels).record(latency);

    response
}

#[inline]
#[cfg(not(target_pointer_width = "64"))]
pub fn increment_items_returned_by(resource: &'static str, amt: usize) {
    match TryInto::<u64>::try_into(amt) {
        Ok(amt) => {
            metrics::counter!(ITEMS_RETURNED_METRIC_NAME, "resource" => resource).increment(amt);
        }
        Err(e) => {
            tracing::error!("could not increment items returned metric: {e}");
        }
    }
}

#[inline]
#[cfg(target_pointer_width = "64")]
pub fn increment_items_returned_by(resource: &'static str, amt: usize) {
    metrics::counter!(ITEMS_RETURNED_METRIC_NAME, "resource" => resource).increment(amt as u64);
}

#[inline]
pub fn increment_resources_created(resource: &'static str) {
    metrics::counter!(RESOURCES_CREATED_METRIC_NAME, "resource" => resource).increment(1);
}

#[inline]
pub fn increment_resources_updated(resource: &'static str) {
    metrics::counter!(RESOURCES_UPDATED_METRIC_NAME, "resource" => resource).increment(1);
}

#[inline]
pub fn increment_resources_deleted(resource: &'static str) {
    metrics::counter!(RESOURCES_DELETED_METRIC_NAME, "resource" => resource).increment(1);
}
