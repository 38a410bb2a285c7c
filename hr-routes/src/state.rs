use eedm::context::EedmRequest;
use eedm::version::Resolved;
use hr_core::HrEngine;

/// Settings that change how responses are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApiSettings {
    /// Adds a `rel="self"` entry to the paging `Link` header.
    pub include_link_self_headers: bool,
}

#[derive(Clone)]
pub struct AppState<T: HrEngine> {
    pub engine: T,
    pub settings: ApiSettings,
}

impl<T: HrEngine> AppState<T> {
    pub fn new(engine: T, settings: ApiSettings) -> Self {
        Self { engine, settings }
    }

    pub fn read<V>(
        &self,
        resource: &'static str,
        resolved: &Resolved<V>,
        bypass_cache: bool,
    ) -> EedmRequest<'_, T::Ethos> {
        EedmRequest::new(self.engine.ethos(), resource, resolved, bypass_cache)
            .with_self_link(self.settings.include_link_self_headers)
    }

    pub fn write<V>(&self, resource: &'static str, resolved: &Resolved<V>) -> EedmRequest<'_, T::Ethos> {
        EedmRequest::for_write(self.engine.ethos(), resource, resolved)
    }
}
