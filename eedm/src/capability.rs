use crate::error::EedmError;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use tracing::debug;

/// Handler for a (path, verb) pair that is routed but deliberately not
/// implemented. Answers with the fixed "not supported" error.
pub async fn not_supported(method: Method, uri: Uri) -> Response {
    debug!("{method} {} is not supported", uri.path());
    EedmError::NotSupported.into_response()
}
