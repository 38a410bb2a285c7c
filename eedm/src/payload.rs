use crate::error::{EedmError, EedmResult};
use crate::guid::{self, GuidOperation};
use error_stack::{Report, ResultExt};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const BODY_REQUIRED: &str = "The request body is required.";

const ID_FIELD: &str = "id";

/// A POST or PUT body, kept as raw JSON until its identity is settled so that
/// a partial payload can still be merged over the stored representation.
#[derive(Debug, Clone, PartialEq)]
pub struct WritePayload {
    body: Value,
}

impl WritePayload {
    pub fn parse(bytes: &[u8]) -> EedmResult<Self> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(Report::new(EedmError::validation(BODY_REQUIRED)));
        }

        let body = serde_json::from_slice::<Value>(bytes)
            .change_context(EedmError::validation("The request body is not valid JSON."))?;

        match body {
            Value::Null => Err(Report::new(EedmError::validation(BODY_REQUIRED))),
            Value::Object(_) => Ok(Self { body }),
            _ => Err(Report::new(EedmError::validation(
                "The request body must be a JSON object.",
            ))),
        }
    }

    pub fn guid(&self) -> Option<&str> {
        self.body.get(ID_FIELD).and_then(Value::as_str)
    }

    /// Applies the GUID rules for `operation` and writes the resulting GUID
    /// back into the body.
    pub fn settle_guid(&mut self, url_guid: Option<&str>, operation: GuidOperation) -> EedmResult<String> {
        let settled = guid::validate(url_guid, self.guid(), operation)?;
        if let Value::Object(fields) = &mut self.body {
            fields.insert(ID_FIELD.to_owned(), Value::String(settled.clone()));
        }
        Ok(settled)
    }

    /// Looks up a value by JSON pointer, e.g. `/homeOrganization/id`.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.body.pointer(pointer)
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_value(self) -> Value {
        self.body
    }

    pub fn deserialize<R: DeserializeOwned>(self) -> EedmResult<R> {
        deserialize(self.body)
    }

    /// Like [`Self::deserialize`] but keeps the body for later use.
    pub fn to_resource<R: DeserializeOwned>(&self) -> EedmResult<R> {
        R::deserialize(&self.body).map_err(invalid_body)
    }
}

pub fn deserialize<R: DeserializeOwned>(body: Value) -> EedmResult<R> {
    serde_json::from_value(body).map_err(invalid_body)
}

fn invalid_body(e: serde_json::Error) -> Report<EedmError> {
    Report::new(EedmError::validation(format!("The request body is invalid: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(b"")]
    #[case(b"  \n")]
    #[case(b"null")]
    fn missing_body_is_required(#[case] bytes: &[u8]) {
        let error = WritePayload::parse(bytes).unwrap_err();

        assert_eq!(&EedmError::validation(BODY_REQUIRED), error.current_context());
    }

    #[rstest]
    #[case(b"{")]
    #[case(b"[]")]
    #[case(b"\"id\"")]
    fn malformed_body_is_a_validation_error(#[case] bytes: &[u8]) {
        let error = WritePayload::parse(bytes).unwrap_err();

        assert!(matches!(error.current_context(), EedmError::Validation(_)));
    }

    #[test]
    fn settle_guid_fills_a_blank_id() {
        let mut payload = WritePayload::parse(br#"{"id":"","title":"x"}"#).unwrap();

        let guid = payload
            .settle_guid(Some("ABC-1"), GuidOperation::Update)
            .unwrap();

        assert_eq!("abc-1", guid);
        assert_eq!(json!({ "id": "abc-1", "title": "x" }), payload.into_value());
    }

    #[derive(Debug, serde::Deserialize)]
    struct Titled {
        title: String,
    }

    #[test]
    fn to_resource_leaves_the_body_in_place() {
        let payload = WritePayload::parse(br#"{"id":"a","title":"x"}"#).unwrap();

        let titled = payload.to_resource::<Titled>().unwrap();

        assert_eq!("x", titled.title);
        assert_eq!(Some("a"), payload.guid());
        assert!(matches!(
            payload.to_resource::<Vec<String>>().unwrap_err().current_context(),
            EedmError::Validation(_)
        ));
    }

    #[test]
    fn pointer_reaches_nested_values() {
        let payload = WritePayload::parse(br#"{"homeOrganization":{"id":"o1"}}"#).unwrap();

        assert_eq!(Some(&json!("o1")), payload.pointer("/homeOrganization/id"));
        assert_eq!(None, payload.pointer("/campus/id"));
    }
}
