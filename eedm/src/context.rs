use crate::error::{EedmError, EedmResult};
use crate::ethos::{EedmResource, EthosContext, EthosService, PermissionsMetadata, ResourceRoute};
use crate::merge;
use crate::metrics;
use crate::paging::{Page, Paging};
use crate::payload::{self as write_payload, WritePayload};
use crate::privacy::FieldMask;
use crate::stream::StreamingResponse;
use crate::version::Resolved;
use axum::Json;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use error_stack::ResultExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

pub const X_MEDIA_TYPE: HeaderName = HeaderName::from_static("x-media-type");
pub const X_CONTENT_RESTRICTED: HeaderName = HeaderName::from_static("x-content-restricted");

/// Which service operation a PUT ends in.
#[derive(Debug, Clone, PartialEq)]
pub enum Upsert<R> {
    Update { merged: R, original: R },
    /// Nothing was stored under the GUID yet.
    Create(R),
}

/// Everything a handler needs to run the EEDM request flow for one resolved
/// route: permission checks, privacy and extended data, merging and the
/// response headers.
pub struct EedmRequest<'a, E> {
    ethos: &'a E,
    route: ResourceRoute,
    media_type: String,
    bypass_cache: bool,
    include_self_link: bool,
}

impl<'a, E: EthosService> EedmRequest<'a, E> {
    pub fn new<V>(ethos: &'a E, resource: &'static str, resolved: &Resolved<V>, bypass_cache: bool) -> Self {
        Self {
            ethos,
            route: ResourceRoute::new(resource, resolved.token),
            media_type: resolved.media_type(),
            bypass_cache,
            include_self_link: false,
        }
    }

    /// Requests that change data always read privacy settings around the cache.
    pub fn for_write<V>(ethos: &'a E, resource: &'static str, resolved: &Resolved<V>) -> Self {
        Self::new(ethos, resource, resolved, true)
    }

    pub fn with_self_link(mut self, include_self_link: bool) -> Self {
        self.include_self_link = include_self_link;
        self
    }

    pub fn route(&self) -> &ResourceRoute {
        &self.route
    }

    pub fn bypass_cache(&self) -> bool {
        self.bypass_cache
    }

    pub fn authorize(&self, permissions: &'static [&'static str]) -> EedmResult<()> {
        self.ethos.validate_permissions(&PermissionsMetadata {
            route: self.route.clone(),
            permissions,
        })
    }

    pub async fn privacy_list(&self) -> EedmResult<FieldMask> {
        self.ethos
            .data_privacy_list(self.route.clone(), self.bypass_cache)
            .await
    }

    /// Hands the configured extended properties found in `payload` to the
    /// service layer.
    #[instrument(skip_all, name = "eedm#import_extended", fields(route = %self.route))]
    pub async fn import_extended(&self, payload: &WritePayload, resource_id: &str) -> EedmResult<()> {
        let Some(configuration) = self.ethos.extended_configuration(self.route.clone()).await? else {
            debug!("no extended configuration for route");
            return Ok(());
        };

        let import = configuration.extract(&self.route, resource_id, payload.body());
        self.ethos.import_extended_data(import).await
    }

    /// Hands the payload to `create`, then imports the configured extended
    /// properties under the GUID the new resource was given.
    #[instrument(skip_all, name = "eedm#create", fields(route = %self.route))]
    pub async fn create<R, F, Fut>(&self, payload: WritePayload, create: F) -> EedmResult<R>
    where
        R: EedmResource + DeserializeOwned,
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = EedmResult<R>>,
    {
        let created = create(payload.to_resource()?).await?;
        self.import_extended(&payload, created.guid()).await?;
        Ok(created)
    }

    /// Lays `payload` over the stored representation returned by
    /// `fetch_original`. A `NotFound` from the fetch means there is nothing to
    /// merge with and the payload is taken as is for the create path.
    #[instrument(skip_all, name = "eedm#merge_update", fields(route = %self.route))]
    pub async fn merge_update<R, F, Fut>(
        &self,
        payload: WritePayload,
        mask: &FieldMask,
        fetch_original: F,
    ) -> EedmResult<Upsert<R>>
    where
        R: EedmResource + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = EedmResult<R>>,
    {
        let original = match fetch_original().await {
            Ok(original) => original,
            Err(report) if matches!(report.current_context(), EedmError::NotFound) => {
                debug!("no stored representation, taking the create path");
                return payload.deserialize().map(Upsert::Create);
            }
            Err(report) => return Err(report),
        };

        let stored = serde_json::to_value(&original)
            .change_context(EedmError::Unclassified)
            .attach("failed to serialize the stored representation")?;

        let merged = merge::merge(payload.into_value(), Some(&stored), mask)?.into_inner();

        Ok(Upsert::Update {
            merged: write_payload::deserialize(merged)?,
            original,
        })
    }

    async fn context(&self, ids: Vec<String>, mask: Option<FieldMask>) -> EedmResult<EthosContext> {
        let privacy = match mask {
            Some(mask) => mask,
            None => self.privacy_list().await?,
        };
        let extended = self.ethos.extended_data(self.route.clone(), ids).await?;

        Ok(EthosContext::new(privacy, extended))
    }

    fn headers(&self, restricted: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(media_type) = HeaderValue::from_str(&self.media_type) {
            headers.insert(X_MEDIA_TYPE, media_type);
        }
        if restricted {
            headers.insert(X_CONTENT_RESTRICTED, HeaderValue::from_static("partial"));
        }
        headers
    }

    pub async fn respond<R: EedmResource>(&self, status: StatusCode, resource: &R) -> EedmResult<Response> {
        let context = self.context(vec![resource.guid().to_owned()], None).await?;
        self.present(status, resource, &context)
    }

    /// Like [`Self::respond`] with a privacy list the handler already holds.
    pub async fn respond_with<R: EedmResource>(
        &self,
        status: StatusCode,
        resource: &R,
        mask: FieldMask,
    ) -> EedmResult<Response> {
        let context = self.context(vec![resource.guid().to_owned()], Some(mask)).await?;
        self.present(status, resource, &context)
    }

    fn present<R: EedmResource>(
        &self,
        status: StatusCode,
        resource: &R,
        context: &EthosContext,
    ) -> EedmResult<Response> {
        let presented = context.present(resource)?;
        Ok((status, self.headers(presented.restricted), Json(presented.body)).into_response())
    }

    async fn present_all<R: EedmResource>(&self, items: &[R]) -> EedmResult<(Vec<Value>, bool)> {
        if items.is_empty() {
            return Ok((Vec::new(), false));
        }

        let ids = items.iter().map(|item| item.guid().to_owned()).collect();
        let context = self.context(ids, None).await?;

        let mut restricted = false;
        let mut bodies = Vec::with_capacity(items.len());
        for item in items {
            let presented = context.present(item)?;
            restricted |= presented.restricted;
            bodies.push(presented.body);
        }

        metrics::increment_items_returned_by(self.route.resource, bodies.len());
        Ok((bodies, restricted))
    }

    /// An unpaged collection.
    pub async fn collection<R: EedmResource>(&self, items: Vec<R>) -> EedmResult<Response> {
        let (bodies, restricted) = self.present_all(&items).await?;

        Ok(StreamingResponse::ok(bodies)
            .with_headers(self.headers(restricted))
            .into_response())
    }

    pub async fn page<R: EedmResource>(&self, uri: &Uri, paging: Paging, page: Page<R>) -> EedmResult<Response> {
        let (bodies, restricted) = self.present_all(&page.items).await?;

        let mut headers = self.headers(restricted);
        headers.extend(paging.headers(uri, page.total, self.include_self_link));

        Ok(StreamingResponse::ok(bodies).with_headers(headers).into_response())
    }

    /// The answer to a filter that cannot match anything.
    pub fn empty_page(&self, uri: &Uri, paging: Paging) -> Response {
        let mut headers = self.headers(false);
        headers.extend(paging.headers(uri, 0, self.include_self_link));

        StreamingResponse::<Value>::ok(Vec::new())
            .with_headers(headers)
            .into_response()
    }
}
