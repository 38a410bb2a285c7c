use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use error_stack::Report;
use serde::Serialize;
use std::borrow::Cow;
use utoipa::ToSchema;

pub type EedmResult<T> = Result<T, Report<EedmError>>;

/// The closed set of failures a request can end in.
///
/// Service implementations report one of these as the current context of their
/// `Report`; handlers never inspect anything deeper than that.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EedmError {
    #[error("the requested resource was not found")]
    NotFound,
    #[error("the caller does not hold the permissions required for this request")]
    PermissionDenied,
    #[error("the caller's session has expired")]
    SessionExpired,
    #[error("{0}")]
    Validation(Cow<'static, str>),
    #[error("the request attempted to change the restricted field '{0}'")]
    DataPrivacyViolation(String),
    #[error("{0}")]
    ExistingResource(Cow<'static, str>),
    #[error("the record is locked by another process")]
    RecordLocked,
    #[error("the service is not configured correctly")]
    Configuration,
    #[error("the requested operation is not supported")]
    NotSupported,
    #[error("version '{0}' of the requested media type is not supported")]
    UnsupportedVersion(String),
    #[error("an unclassified failure occurred")]
    Unclassified,
}

impl EedmError {
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation(message.into())
    }

    pub fn existing_resource(message: impl Into<Cow<'static, str>>) -> Self {
        Self::ExistingResource(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            EedmError::NotFound => StatusCode::NOT_FOUND,
            EedmError::PermissionDenied => StatusCode::FORBIDDEN,
            EedmError::SessionExpired => StatusCode::UNAUTHORIZED,
            EedmError::Validation(_)
            | EedmError::DataPrivacyViolation(_)
            | EedmError::Configuration
            | EedmError::Unclassified => StatusCode::BAD_REQUEST,
            EedmError::ExistingResource(_) | EedmError::RecordLocked => StatusCode::CONFLICT,
            EedmError::NotSupported => StatusCode::METHOD_NOT_ALLOWED,
            EedmError::UnsupportedVersion(_) => StatusCode::NOT_ACCEPTABLE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            EedmError::NotFound => "Global.NotFound",
            EedmError::PermissionDenied => "Global.PermissionDenied",
            EedmError::SessionExpired => "Global.SessionExpired",
            EedmError::Validation(_) => "Validation.Exception",
            EedmError::DataPrivacyViolation(_) => "Global.DataPrivacy.Violation",
            EedmError::ExistingResource(_) => "Global.ExistingResource",
            EedmError::RecordLocked => "Global.RecordLocked",
            EedmError::Configuration | EedmError::Unclassified => "Global.Internal.Error",
            EedmError::NotSupported => "Global.UnsupportedRequest",
            EedmError::UnsupportedVersion(_) => "Global.UnsupportedVersion",
        }
    }

    /// The text shown to the caller. Only validation and conflict messages are
    /// passed through; everything else gets a fixed message.
    pub fn client_message(&self) -> Cow<'static, str> {
        match self {
            EedmError::Validation(message) | EedmError::ExistingResource(message) => {
                message.clone()
            }
            EedmError::UnsupportedVersion(_) => Cow::Owned(self.to_string()),
            EedmError::NotFound => Cow::Borrowed("The requested resource could not be found."),
            EedmError::PermissionDenied => {
                Cow::Borrowed("Permission denied for the requested operation.")
            }
            EedmError::SessionExpired => Cow::Borrowed("The session has expired."),
            EedmError::DataPrivacyViolation(_) => Cow::Borrowed(
                "The request attempted to modify data restricted by data privacy settings.",
            ),
            EedmError::RecordLocked => {
                Cow::Borrowed("The record is currently locked by another process.")
            }
            EedmError::NotSupported => Cow::Borrowed("Unsupported Request"),
            EedmError::Configuration | EedmError::Unclassified => {
                Cow::Borrowed("An unexpected error occurred while processing the request.")
            }
        }
    }
}

impl IntoResponse for EedmError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(IntegrationErrors::from(&self))).into_response()
    }
}

/// Error envelope returned on every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct IntegrationErrors {
    errors: Vec<IntegrationError>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IntegrationError {
    code: &'static str,
    message: Cow<'static, str>,
}

impl From<&EedmError> for IntegrationErrors {
    fn from(error: &EedmError) -> Self {
        Self {
            errors: vec![IntegrationError {
                code: error.code(),
                message: error.client_message(),
            }],
        }
    }
}

#[derive(thiserror::Error)]
#[error("there was an error running the endpoint")]
pub struct EndpointError(Report<EedmError>);

impl EndpointError {
    pub fn kind(&self) -> &EedmError {
        self.0.current_context()
    }
}

impl std::fmt::Debug for EndpointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.0, f)
    }
}

impl From<Report<EedmError>> for EndpointError {
    fn from(value: Report<EedmError>) -> Self {
        Self(value)
    }
}

impl From<EedmError> for EndpointError {
    fn from(value: EedmError) -> Self {
        Self(Report::new(value))
    }
}

impl IntoResponse for EndpointError {
    fn into_response(self) -> Response {
        self.kind().clone().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(EedmError::NotFound, StatusCode::NOT_FOUND)]
    #[case(EedmError::PermissionDenied, StatusCode::FORBIDDEN)]
    #[case(EedmError::SessionExpired, StatusCode::UNAUTHORIZED)]
    #[case(EedmError::validation("bad"), StatusCode::BAD_REQUEST)]
    #[case(EedmError::DataPrivacyViolation("person".into()), StatusCode::BAD_REQUEST)]
    #[case(EedmError::existing_resource("dup"), StatusCode::CONFLICT)]
    #[case(EedmError::RecordLocked, StatusCode::CONFLICT)]
    #[case(EedmError::Configuration, StatusCode::BAD_REQUEST)]
    #[case(EedmError::Unclassified, StatusCode::BAD_REQUEST)]
    fn every_kind_maps_to_a_client_error(#[case] error: EedmError, #[case] expected: StatusCode) {
        assert_eq!(expected, error.status_code());
        assert!(error.status_code().is_client_error());
    }

    #[test]
    fn validation_and_conflict_messages_are_passed_through() {
        assert_eq!(
            "GUID must be specified.",
            EedmError::validation("GUID must be specified.").client_message()
        );
        assert_eq!(
            "already exists",
            EedmError::existing_resource("already exists").client_message()
        );
    }

    #[test]
    fn unclassified_message_does_not_leak_detail() {
        let report = Report::new(EedmError::Unclassified).attach("connection reset by peer");
        let error = EndpointError::from(report);

        assert!(!error.kind().client_message().contains("connection reset"));
    }

    #[test]
    fn privacy_violation_does_not_name_the_field() {
        let error = EedmError::DataPrivacyViolation("person.id".into());

        assert!(!error.client_message().contains("person.id"));
    }
}
