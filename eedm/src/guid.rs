//! Identity rules shared by every write endpoint.
//!
//! A resource is created with the nil GUID in its body and receives its real
//! GUID from the service. Afterwards the GUID in the URL and the body must agree.

use crate::error::{EedmError, EedmResult};
use error_stack::Report;
use uuid::Uuid;

pub const NIL_GUID: &str = "00000000-0000-0000-0000-000000000000";

pub const NIL_REQUIRED_ON_CREATE: &str = "Nil GUID must be used in POST operation.";
pub const URL_GUID_REQUIRED: &str = "The GUID must be specified in the request URL.";
pub const GUID_REQUIRED: &str = "GUID must be specified.";
pub const GUID_MISMATCH: &str = "GUID not the same as in request body.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidOperation {
    Create,
    Update,
}

pub fn is_nil(guid: &str) -> bool {
    Uuid::try_parse(guid.trim()).is_ok_and(|guid| guid.is_nil())
}

fn non_blank(guid: Option<&str>) -> Option<&str> {
    guid.map(str::trim).filter(|guid| !guid.is_empty())
}

/// Checks the GUIDs of a write request and returns the GUID the body must carry.
///
/// `url_guid` is ignored for [`GuidOperation::Create`].
pub fn validate(
    url_guid: Option<&str>,
    body_guid: Option<&str>,
    operation: GuidOperation,
) -> EedmResult<String> {
    match operation {
        GuidOperation::Create => validate_create(body_guid),
        GuidOperation::Update => validate_update(url_guid, body_guid),
    }
}

fn validate_create(body_guid: Option<&str>) -> EedmResult<String> {
    match body_guid {
        Some(guid) if is_nil(guid) => Ok(NIL_GUID.to_owned()),
        _ => Err(Report::new(EedmError::validation(NIL_REQUIRED_ON_CREATE))),
    }
}

fn validate_update(url_guid: Option<&str>, body_guid: Option<&str>) -> EedmResult<String> {
    let Some(url_guid) = non_blank(url_guid).map(str::to_lowercase) else {
        return Err(Report::new(EedmError::validation(URL_GUID_REQUIRED)));
    };

    let body_guid = non_blank(body_guid)
        .map(str::to_lowercase)
        .unwrap_or_else(|| url_guid.clone());

    if is_nil(&url_guid) || is_nil(&body_guid) {
        return Err(Report::new(EedmError::validation(GUID_REQUIRED)));
    }

    if url_guid != body_guid {
        return Err(Report::new(EedmError::validation(GUID_MISMATCH))
            .attach(format!("url guid '{url_guid}', body guid '{body_guid}'")));
    }

    Ok(body_guid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const GUID: &str = "11111111-1111-1111-1111-111111111111";

    fn validation_message(result: EedmResult<String>) -> String {
        match result.expect_err("validation should fail").current_context() {
            EedmError::Validation(message) => message.to_string(),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[rstest]
    #[case(NIL_GUID)]
    #[case("00000000-0000-0000-0000-000000000000 ")]
    #[case("00000000000000000000000000000000")]
    fn create_accepts_nil_guid(#[case] body_guid: &str) {
        let guid = validate(None, Some(body_guid), GuidOperation::Create).unwrap();

        assert_eq!(NIL_GUID, guid);
    }

    #[rstest]
    #[case(Some(GUID))]
    #[case(Some("not-a-guid"))]
    #[case(Some(""))]
    #[case(None)]
    fn create_rejects_anything_but_nil(#[case] body_guid: Option<&str>) {
        let result = validate(None, body_guid, GuidOperation::Create);

        assert_eq!(NIL_REQUIRED_ON_CREATE, validation_message(result));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn update_requires_url_guid(#[case] url_guid: Option<&str>) {
        let result = validate(url_guid, Some(GUID), GuidOperation::Update);

        assert_eq!(URL_GUID_REQUIRED, validation_message(result));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn update_fills_blank_body_guid_from_url(#[case] body_guid: Option<&str>) {
        let guid = validate(
            Some("11111111-1111-1111-1111-11111111111A"),
            body_guid,
            GuidOperation::Update,
        )
        .unwrap();

        assert_eq!("11111111-1111-1111-1111-11111111111a", guid);
    }

    #[rstest]
    #[case(NIL_GUID, Some(NIL_GUID))]
    #[case(NIL_GUID, None)]
    #[case(GUID, Some(NIL_GUID))]
    #[case(NIL_GUID, Some(GUID))]
    fn update_rejects_nil_guids(#[case] url_guid: &str, #[case] body_guid: Option<&str>) {
        let result = validate(Some(url_guid), body_guid, GuidOperation::Update);

        assert_eq!(GUID_REQUIRED, validation_message(result));
    }

    #[rstest]
    #[case(GUID, "22222222-2222-2222-2222-222222222222")]
    #[case("abc", "abd")]
    fn update_rejects_mismatched_guids(#[case] url_guid: &str, #[case] body_guid: &str) {
        let result = validate(Some(url_guid), Some(body_guid), GuidOperation::Update);

        assert_eq!(GUID_MISMATCH, validation_message(result));
    }

    #[test]
    fn update_compares_guids_case_insensitively() {
        let guid = validate(
            Some("AAAAAAAA-1111-1111-1111-111111111111"),
            Some("aaaaaaaa-1111-1111-1111-111111111111"),
            GuidOperation::Update,
        )
        .unwrap();

        assert_eq!("aaaaaaaa-1111-1111-1111-111111111111", guid);
    }
}
