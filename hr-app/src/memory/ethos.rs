use eedm::EedmResult;
use eedm::ethos::{
    EthosService, ExtendedConfiguration, ExtendedData, ExtendedImport, PermissionsMetadata,
    ResourceRoute,
};
use eedm::privacy::FieldMask;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Grants every permission. Privacy settings and extended properties are
/// configured per resource name and apply to every version of it.
#[derive(Default)]
pub struct MemoryEthos {
    privacy: HashMap<&'static str, FieldMask>,
    configuration: HashMap<&'static str, ExtendedConfiguration>,
    extended: RwLock<HashMap<&'static str, ExtendedData>>,
}

#[cfg(test)]
impl MemoryEthos {
    pub fn with_privacy(mut self, resource: &'static str, mask: FieldMask) -> Self {
        self.privacy.insert(resource, mask);
        self
    }

    pub fn with_extended_properties<I, S>(mut self, resource: &'static str, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.configuration.insert(
            resource,
            ExtendedConfiguration {
                properties: properties.into_iter().map(Into::into).collect(),
            },
        );
        self
    }
}

impl EthosService for MemoryEthos {
    fn validate_permissions(&self, permissions: &PermissionsMetadata) -> EedmResult<()> {
        debug!(
            "granting {:?} on {}",
            permissions.permissions, permissions.route
        );
        Ok(())
    }

    async fn data_privacy_list(&self, route: ResourceRoute, _bypass_cache: bool) -> EedmResult<FieldMask> {
        Ok(self.privacy.get(route.resource).cloned().unwrap_or_default())
    }

    async fn extended_data(&self, route: ResourceRoute, ids: Vec<String>) -> EedmResult<ExtendedData> {
        let extended = self.extended.read().await;
        let Some(stored) = extended.get(route.resource) else {
            return Ok(ExtendedData::new());
        };

        Ok(ids
            .into_iter()
            .filter_map(|id| stored.get(&id).cloned().map(|properties| (id, properties)))
            .collect())
    }

    async fn extended_configuration(
        &self,
        route: ResourceRoute,
    ) -> EedmResult<Option<ExtendedConfiguration>> {
        Ok(self.configuration.get(route.resource).cloned())
    }

    async fn import_extended_data(&self, import: ExtendedImport) -> EedmResult<()> {
        if import.properties.is_empty() {
            return Ok(());
        }

        debug!(
            "storing {} extended properties for {} {}",
            import.properties.len(),
            import.route,
            import.resource_id
        );
        self.extended
            .write()
            .await
            .entry(import.route.resource)
            .or_default()
            .entry(import.resource_id)
            .or_default()
            .extend(import.properties);
        Ok(())
    }
}
