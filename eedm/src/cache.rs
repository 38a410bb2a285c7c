use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::{CacheControl, HeaderMapExt};
use std::convert::Infallible;

/// Set when the caller sent `Cache-Control: no-cache`, asking the service layer
/// to skip its caches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BypassCache(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for BypassCache {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(BypassCache(
            parts
                .headers
                .typed_get::<CacheControl>()
                .is_some_and(|cache_control| cache_control.no_cache()),
        ))
    }
}
