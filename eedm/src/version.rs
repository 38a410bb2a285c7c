//! Media type versioning.
//!
//! Callers pick a schema version through the `Accept` header, e.g.
//! `application/vnd.hedtech.integration.v12+json`. Each (path, verb) pair has a
//! [`VersionTable`] naming the versions it serves and the one used when the
//! caller does not ask for a version.

use crate::error::{EedmError, EedmResult};
use axum::extract::FromRequestParts;
use axum::http::header::ACCEPT;
use axum::http::request::Parts;
use const_format::formatcp;
use error_stack::Report;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const MEDIA_TYPE_VENDOR: &str = "application/vnd.hedtech.integration";
const MEDIA_TYPE_SUFFIX: &str = "+json";
const VERSION_PREFIX: &str = formatcp!("{}.v", MEDIA_TYPE_VENDOR);

/// The version a caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedVersion {
    Default,
    Explicit(String),
}

impl RequestedVersion {
    /// Takes the first versioned vendor media type in the header. Anything
    /// else, including `*/*` and `application/json`, asks for the default.
    pub fn from_accept(accept: Option<&str>) -> Self {
        accept
            .into_iter()
            .flat_map(|accept| accept.split(','))
            .filter_map(|media_type| media_type.split(';').next())
            .map(|media_type| media_type.trim().to_ascii_lowercase())
            .find_map(|media_type| {
                media_type
                    .strip_prefix(VERSION_PREFIX)
                    .and_then(|rest| rest.strip_suffix(MEDIA_TYPE_SUFFIX))
                    .filter(|token| !token.is_empty())
                    .map(str::to_owned)
            })
            .map_or(RequestedVersion::Default, RequestedVersion::Explicit)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RequestedVersion {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_accept(
            parts
                .headers
                .get(ACCEPT)
                .and_then(|value| value.to_str().ok()),
        ))
    }
}

/// A `major[.minor[.patch]]` version token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ApiVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

impl ApiVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }
}

#[derive(Debug, thiserror::Error)]
#[error("'{0}' is not a valid version token")]
pub struct InvalidVersion(String);

impl FromStr for ApiVersion {
    type Err = InvalidVersion;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidVersion(token.to_owned());
        let mut parts = token.split('.');

        let mut next = |required: bool| match parts.next() {
            Some(part) => part.parse::<u32>().map_err(|_| invalid()),
            None if required => Err(invalid()),
            None => Ok(0),
        };

        let version = Self::new(next(true)?, next(false)?, next(false)?);

        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }
}

impl Display for ApiVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.minor == 0 && self.patch == 0 {
            write!(f, "{}", self.major)
        } else {
            write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
        }
    }
}

/// One version a route answers to. A version without a target is routed but
/// rejected with the fixed "not supported" error.
#[derive(Debug)]
pub struct RouteVersion<V: 'static> {
    token: &'static str,
    target: Option<V>,
    default: bool,
}

impl<V> RouteVersion<V> {
    pub const fn supported(token: &'static str, target: V) -> Self {
        Self {
            token,
            target: Some(target),
            default: false,
        }
    }

    pub const fn default(token: &'static str, target: V) -> Self {
        Self {
            token,
            target: Some(target),
            default: true,
        }
    }

    pub const fn not_supported(token: &'static str) -> Self {
        Self {
            token,
            target: None,
            default: false,
        }
    }
}

/// The versions served by one (path, verb) pair.
#[derive(Debug)]
pub struct VersionTable<V: 'static> {
    versions: &'static [RouteVersion<V>],
}

impl<V: Copy> VersionTable<V> {
    /// Fails const evaluation unless exactly one version is the default.
    pub const fn new(versions: &'static [RouteVersion<V>]) -> Self {
        let mut defaults = 0;
        let mut i = 0;
        while i < versions.len() {
            if versions[i].default {
                defaults += 1;
            }
            i += 1;
        }
        assert!(defaults == 1, "a version table needs exactly one default version");

        Self { versions }
    }

    pub fn resolve(&self, requested: &RequestedVersion) -> EedmResult<Resolved<V>> {
        let route = match requested {
            RequestedVersion::Default => self.versions.iter().find(|version| version.default),
            RequestedVersion::Explicit(token) => self.find(token)?,
        };

        let Some(route) = route else {
            return Err(Report::new(EedmError::UnsupportedVersion(match requested {
                RequestedVersion::Default => "default".to_owned(),
                RequestedVersion::Explicit(token) => token.clone(),
            })));
        };

        match route.target {
            Some(target) => Ok(Resolved {
                target,
                token: route.token,
            }),
            None => Err(Report::new(EedmError::NotSupported)
                .attach(format!("version {} is not supported", route.token))),
        }
    }

    /// Exact match first; a bare major version then picks the newest release
    /// of that major.
    fn find(&self, token: &str) -> EedmResult<Option<&RouteVersion<V>>> {
        let requested = token.parse::<ApiVersion>().map_err(|e| {
            Report::new(EedmError::UnsupportedVersion(token.to_owned())).attach(e.to_string())
        })?;

        let mut candidates = Vec::with_capacity(self.versions.len());
        for route in self.versions {
            let version = route
                .token
                .parse::<ApiVersion>()
                .map_err(|e| Report::new(EedmError::Configuration).attach(e.to_string()))?;
            candidates.push((version, route));
        }

        if let Some((_, route)) = candidates.iter().find(|(version, _)| *version == requested) {
            return Ok(Some(*route));
        }

        if token.contains('.') {
            return Ok(None);
        }

        Ok(candidates
            .into_iter()
            .filter(|(version, _)| version.major() == requested.major())
            .max_by_key(|(version, _)| *version)
            .map(|(_, route)| route))
    }
}

/// The version picked for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<V> {
    pub target: V,
    pub token: &'static str,
}

impl<V> Resolved<V> {
    pub fn media_type(&self) -> String {
        format!("{VERSION_PREFIX}{}{MEDIA_TYPE_SUFFIX}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Schema {
        One,
        Two,
        Three,
    }

    const TABLE: VersionTable<Schema> = VersionTable::new(&[
        RouteVersion::supported("7", Schema::One),
        RouteVersion::supported("11", Schema::Two),
        RouteVersion::default("12.1.0", Schema::Three),
        RouteVersion::not_supported("6"),
    ]);

    fn explicit(token: &str) -> RequestedVersion {
        RequestedVersion::Explicit(token.to_owned())
    }

    #[rstest]
    #[case(None, RequestedVersion::Default)]
    #[case(Some("application/json"), RequestedVersion::Default)]
    #[case(Some("*/*"), RequestedVersion::Default)]
    #[case(Some("application/vnd.hedtech.integration+json"), RequestedVersion::Default)]
    #[case(Some("application/vnd.hedtech.integration.v+json"), RequestedVersion::Default)]
    #[case(Some("application/vnd.hedtech.integration.v12+json"), explicit("12"))]
    #[case(Some("Application/Vnd.Hedtech.Integration.V12.1.0+JSON"), explicit("12.1.0"))]
    #[case(
        Some("application/json, application/vnd.hedtech.integration.v11+json; q=0.9"),
        explicit("11")
    )]
    fn accept_header_parsing(#[case] accept: Option<&str>, #[case] expected: RequestedVersion) {
        assert_eq!(expected, RequestedVersion::from_accept(accept));
    }

    #[rstest]
    #[case("12", ApiVersion::new(12, 0, 0))]
    #[case("12.1", ApiVersion::new(12, 1, 0))]
    #[case("12.1.0", ApiVersion::new(12, 1, 0))]
    fn version_tokens_parse(#[case] token: &str, #[case] expected: ApiVersion) {
        assert_eq!(expected, token.parse().unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("v12")]
    #[case("12.x")]
    #[case("1.2.3.4")]
    fn bad_version_tokens_fail(#[case] token: &str) {
        assert!(token.parse::<ApiVersion>().is_err());
    }

    #[test]
    fn default_request_resolves_to_the_default_version() {
        let resolved = TABLE.resolve(&RequestedVersion::Default).unwrap();

        assert_eq!(Schema::Three, resolved.target);
        assert_eq!(
            "application/vnd.hedtech.integration.v12.1.0+json",
            resolved.media_type()
        );
    }

    #[rstest]
    #[case("7", Schema::One)]
    #[case("7.0.0", Schema::One)]
    #[case("11", Schema::Two)]
    #[case("12", Schema::Three)]
    #[case("12.1.0", Schema::Three)]
    fn explicit_versions_resolve(#[case] token: &str, #[case] expected: Schema) {
        assert_eq!(expected, TABLE.resolve(&explicit(token)).unwrap().target);
    }

    #[rstest]
    #[case("8")]
    #[case("12.2.0")]
    #[case("abc")]
    fn unknown_versions_are_not_acceptable(#[case] token: &str) {
        let error = TABLE.resolve(&explicit(token)).unwrap_err();

        assert!(matches!(
            error.current_context(),
            EedmError::UnsupportedVersion(_)
        ));
    }

    #[test]
    fn versions_without_target_are_not_supported() {
        let error = TABLE.resolve(&explicit("6")).unwrap_err();

        assert_eq!(&EedmError::NotSupported, error.current_context());
    }
}
