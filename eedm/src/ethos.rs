//! Ethos context: the per-resource metadata the service layer keeps alongside
//! the core representation, and the operations that read and write it.

use crate::error::{EedmError, EedmResult};
use crate::privacy::FieldMask;
use error_stack::ResultExt;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Identifies the route a request came in on, as the ethos operations key
/// their configuration by resource name and version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRoute {
    pub resource: &'static str,
    pub version: &'static str,
}

impl ResourceRoute {
    pub const fn new(resource: &'static str, version: &'static str) -> Self {
        Self { resource, version }
    }
}

impl Display for ResourceRoute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.resource, self.version)
    }
}

/// The permission codes a caller needs for the route being invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionsMetadata {
    pub route: ResourceRoute,
    pub permissions: &'static [&'static str],
}

/// Extended properties per resource GUID.
pub type ExtendedData = HashMap<String, Map<String, Value>>;

/// The extended property names configured for a route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendedConfiguration {
    pub properties: Vec<String>,
}

/// Extended property values taken from a request body, keyed to the GUID of
/// the resource they belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedImport {
    pub route: ResourceRoute,
    pub resource_id: String,
    pub properties: Map<String, Value>,
}

impl ExtendedConfiguration {
    pub fn extract(&self, route: &ResourceRoute, resource_id: &str, body: &Value) -> ExtendedImport {
        let properties = self
            .properties
            .iter()
            .filter_map(|name| body.get(name).map(|value| (name.clone(), value.clone())))
            .collect();

        ExtendedImport {
            route: route.clone(),
            resource_id: resource_id.to_owned(),
            properties,
        }
    }
}

/// The ethos operations every resource family shares.
pub trait EthosService: Send + Sync + 'static {
    fn validate_permissions(&self, permissions: &PermissionsMetadata) -> EedmResult<()>;

    fn data_privacy_list(
        &self,
        route: ResourceRoute,
        bypass_cache: bool,
    ) -> impl Future<Output = EedmResult<FieldMask>> + Send;

    fn extended_data(
        &self,
        route: ResourceRoute,
        ids: Vec<String>,
    ) -> impl Future<Output = EedmResult<ExtendedData>> + Send;

    fn extended_configuration(
        &self,
        route: ResourceRoute,
    ) -> impl Future<Output = EedmResult<Option<ExtendedConfiguration>>> + Send;

    fn import_extended_data(
        &self,
        import: ExtendedImport,
    ) -> impl Future<Output = EedmResult<()>> + Send;
}

/// A representation with an external identity.
pub trait EedmResource: Serialize {
    fn guid(&self) -> &str;
}

/// Privacy list and extended data attached to an outgoing response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EthosContext {
    pub privacy: FieldMask,
    pub extended: ExtendedData,
}

/// A representation after the ethos context was applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Presented {
    pub body: Value,
    pub restricted: bool,
}

impl EthosContext {
    pub fn new(privacy: FieldMask, extended: ExtendedData) -> Self {
        Self { privacy, extended }
    }

    /// Serializes `resource`, adds its extended properties and strips the
    /// fields the caller may not see.
    pub fn present<R: EedmResource>(&self, resource: &R) -> EedmResult<Presented> {
        let mut body = serde_json::to_value(resource)
            .change_context(EedmError::Unclassified)
            .attach("failed to serialize the response representation")?;

        if let (Some(extended), Value::Object(fields)) =
            (self.extended.get(resource.guid()), &mut body)
        {
            for (name, value) in extended {
                fields.entry(name.clone()).or_insert_with(|| value.clone());
            }
        }

        let restricted = self.privacy.redact(&mut body);
        Ok(Presented { body, restricted })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Job {
        id: String,
        title: String,
        salary: u32,
    }

    impl EedmResource for Job {
        fn guid(&self) -> &str {
            &self.id
        }
    }

    fn job() -> Job {
        Job {
            id: "j1".into(),
            title: "Registrar".into(),
            salary: 100,
        }
    }

    #[test]
    fn present_without_context_is_plain_serialization() {
        let presented = EthosContext::default().present(&job()).unwrap();

        assert_eq!(json!({ "id": "j1", "title": "Registrar", "salary": 100 }), presented.body);
        assert!(!presented.restricted);
    }

    #[test]
    fn present_adds_extended_data_without_overwriting_core_fields() {
        let extended = HashMap::from([(
            "j1".to_owned(),
            json!({ "title": "ignored", "x-building": "Main" })
                .as_object()
                .cloned()
                .unwrap(),
        )]);

        let presented = EthosContext::new(FieldMask::empty(), extended)
            .present(&job())
            .unwrap();

        assert_eq!(json!("Registrar"), presented.body["title"]);
        assert_eq!(json!("Main"), presented.body["x-building"]);
    }

    #[test]
    fn present_strips_private_fields_and_flags_the_response() {
        let presented = EthosContext::new(FieldMask::new(["salary"]), ExtendedData::new())
            .present(&job())
            .unwrap();

        assert_eq!(json!({ "id": "j1", "title": "Registrar" }), presented.body);
        assert!(presented.restricted);
    }

    #[test]
    fn extract_takes_configured_properties_from_the_body() {
        let config = ExtendedConfiguration {
            properties: vec!["x-building".into(), "x-missing".into()],
        };
        let route = ResourceRoute::new("institution-jobs", "12");

        let import = config.extract(&route, "j1", &json!({ "id": "j1", "x-building": "Main" }));

        assert_eq!(route, import.route);
        assert_eq!("j1", import.resource_id);
        assert_eq!(
            json!({ "x-building": "Main" }).as_object().cloned().unwrap(),
            import.properties
        );
    }
}
