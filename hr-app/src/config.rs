use error_stack::{Report, ResultExt};
use std::str::FromStr;
use tracing::info;

pub const HR_API_LOG: &str = "HR_API_LOG";
const HR_API_PORT: &str = "HR_API_PORT";
const HR_API_METRICS: &str = "HR_API_METRICS";
const HR_API_INCLUDE_LINK_SELF_HEADERS: &str = "HR_API_INCLUDE_LINK_SELF_HEADERS";

const DEFAULT_PORT: u16 = 3001;

pub type ConfigResult<T> = Result<T, Report<InvalidConfigProperty>>;

#[derive(Debug, thiserror::Error)]
#[error("{0} has an invalid value")]
pub struct InvalidConfigProperty(&'static str);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub port: u16,
    pub metrics_enabled: bool,
    /// Adds `rel="self"` to the paging `Link` header.
    pub include_link_self_headers: bool,
}

impl ApiConfig {
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        Ok(Self {
            port: property(&lookup, HR_API_PORT)?.unwrap_or_else(|| {
                info!("{HR_API_PORT} not specified, going with {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            metrics_enabled: property(&lookup, HR_API_METRICS)?.unwrap_or_default(),
            include_link_self_headers: property(&lookup, HR_API_INCLUDE_LINK_SELF_HEADERS)?
                .unwrap_or_default(),
        })
    }
}

fn property<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> ConfigResult<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = lookup(key).filter(|raw| !raw.trim().is_empty()) else {
        return Ok(None);
    };

    raw.trim()
        .parse()
        .map(Some)
        .change_context(InvalidConfigProperty(key))
        .attach(format!("'{raw}' could not be parsed"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ConfigResult<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(
            ApiConfig {
                port: 3001,
                metrics_enabled: false,
                include_link_self_headers: false,
            },
            config
        );
    }

    #[test]
    fn values_are_read_from_the_environment() {
        let config = config_from(&[
            (HR_API_PORT, "8080"),
            (HR_API_METRICS, "true"),
            (HR_API_INCLUDE_LINK_SELF_HEADERS, " true "),
        ])
        .unwrap();

        assert_eq!(8080, config.port);
        assert!(config.metrics_enabled);
        assert!(config.include_link_self_headers);
    }

    #[rstest]
    #[case(HR_API_PORT, "http")]
    #[case(HR_API_PORT, "70000")]
    #[case(HR_API_METRICS, "yes")]
    #[case(HR_API_INCLUDE_LINK_SELF_HEADERS, "1")]
    fn invalid_values_fail(#[case] key: &'static str, #[case] value: &str) {
        let error = config_from(&[(key, value)]).unwrap_err();

        assert_eq!(key, error.current_context().0);
    }
}
