use crate::capability;
use crate::metrics;
use axum::Router;
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{MethodFilter, delete, get, on, post, put};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fmt::{Display, Formatter};
use tracing::{debug, info};
use utoipa::openapi::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

const METRICS_PATH: &str = "/metrics";
const SWAGGER_UI_PATH: &str = "/swagger-ui";
const OPENAPI_PATH: &str = "/api-docs/openapi.json";

struct Route {
    method: &'static str,
    path: &'static str,
    supported: bool,
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.method, self.path)?;

        if !self.supported {
            write!(f, " (not supported)")?;
        }

        Ok(())
    }
}

/// Collects the resource routes of the service and assembles them with the
/// metrics endpoint and the swagger UI.
pub struct RouterBuilder<S> {
    inner: OpenApiRouter<S>,
    routes: Vec<Route>,
}

impl<S> Default for RouterBuilder<S>
where
    S: Send + Sync + Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RouterBuilder<S>
where
    S: Send + Sync + Clone + 'static,
{
    pub fn new() -> Self {
        Self {
            inner: OpenApiRouter::new(),
            routes: Vec::new(),
        }
    }

    pub fn get<T, F>(mut self, path: &'static str, handler: F) -> Self
    where
        F: Handler<T, S>,
        T: 'static,
    {
        self.inner = self.inner.route(path, get(handler));
        self.push(Verb::Get.name(), path, true);
        self
    }

    pub fn post<T, F>(mut self, path: &'static str, handler: F) -> Self
    where
        F: Handler<T, S>,
        T: 'static,
    {
        self.inner = self.inner.route(path, post(handler));
        self.push(Verb::Post.name(), path, true);
        self
    }

    pub fn put<T, F>(mut self, path: &'static str, handler: F) -> Self
    where
        F: Handler<T, S>,
        T: 'static,
    {
        self.inner = self.inner.route(path, put(handler));
        self.push(Verb::Put.name(), path, true);
        self
    }

    pub fn delete<T, F>(mut self, path: &'static str, handler: F) -> Self
    where
        F: Handler<T, S>,
        T: 'static,
    {
        self.inner = self.inner.route(path, delete(handler));
        self.push(Verb::Delete.name(), path, true);
        self
    }

    /// Routes `method` on `path` to the fixed "not supported" answer so the
    /// caller gets the integration error envelope instead of a bare 405.
    pub fn not_supported(mut self, verb: Verb, path: &'static str) -> Self {
        self.inner = self
            .inner
            .route(path, on(verb.filter(), capability::not_supported));
        self.push(verb.name(), path, false);
        self
    }

    fn push(&mut self, method: &'static str, path: &'static str, supported: bool) {
        self.routes.push(Route {
            method,
            path,
            supported,
        });
    }

    /// `metrics_handle` is `None` when metrics are disabled; the metrics
    /// endpoint then answers 503.
    pub fn build(self, app_state: S, api_doc: OpenApi, metrics_handle: Option<PrometheusHandle>) -> Router {
        for route in &self.routes {
            debug!("Building route - {route}")
        }

        let main_router = match metrics_handle {
            Some(metrics_handle) => {
                info!("metrics enabled, setting up metrics handler");
                self.inner
                    .route(METRICS_PATH, get(|| async move { metrics_handle.render() }))
                    .route_layer(middleware::from_fn(metrics::track_http))
            }
            None => {
                info!("metrics not enabled, setting up service unavailable metrics handler");
                self.inner.route(
                    METRICS_PATH,
                    get(|| async {
                        (
                            StatusCode::SERVICE_UNAVAILABLE,
                            "Metrics endpoint is disabled. Metrics must be enabled and the service restarted",
                        )
                    }),
                )
            }
        };

        let (router, api) = OpenApiRouter::with_openapi(api_doc)
            .merge(main_router.with_state(app_state))
            .split_for_parts();

        router.merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, api))
    }
}

/// The HTTP verbs a resource route can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn filter(self) -> MethodFilter {
        match self {
            Verb::Get => MethodFilter::GET,
            Verb::Post => MethodFilter::POST,
            Verb::Put => MethodFilter::PUT,
            Verb::Delete => MethodFilter::DELETE,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}
