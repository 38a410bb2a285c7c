//! Partial payload merge for PUT requests.
//!
//! The caller's body is laid over the stored representation: fields the body
//! leaves out keep their stored value, objects merge member by member and
//! every other value (arrays included) is replaced whole. Fields covered by the
//! caller's [`FieldMask`] always keep the stored value, and a body that tries to
//! change one is rejected.

use crate::error::{EedmError, EedmResult};
use crate::privacy::FieldMask;
use error_stack::Report;
use serde_json::{Map, Value};

/// Outcome of a merge, telling the caller which service operation to use.
#[derive(Debug, Clone, PartialEq)]
pub enum Merged<T> {
    /// A stored representation existed and `T` is the merged result.
    Update(T),
    /// Nothing was stored yet; `T` is the incoming payload unchanged.
    Create(T),
}

impl<T> Merged<T> {
    pub fn is_create(&self) -> bool {
        matches!(self, Merged::Create(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Merged::Update(value) | Merged::Create(value) => value,
        }
    }
}

pub fn merge(incoming: Value, original: Option<&Value>, mask: &FieldMask) -> EedmResult<Merged<Value>> {
    let Some(original) = original else {
        return Ok(Merged::Create(incoming));
    };

    match (incoming, original) {
        (Value::Object(incoming), Value::Object(original)) => {
            let mut path = Vec::new();
            merge_object(incoming, original, mask, &mut path)
                .map(Value::Object)
                .map(Merged::Update)
        }
        _ => Err(Report::new(EedmError::validation(
            "The request body must be a JSON object.",
        ))),
    }
}

fn merge_object(
    incoming: Map<String, Value>,
    original: &Map<String, Value>,
    mask: &FieldMask,
    path: &mut Vec<String>,
) -> EedmResult<Map<String, Value>> {
    let mut merged = original.clone();

    for (key, value) in incoming {
        let stored = original.get(&key);

        path.push(key.clone());
        let field = merge_field(value, stored, mask, path)?;
        path.pop();

        match field {
            Some(value) => {
                merged.insert(key, value);
            }
            None => {
                merged.remove(&key);
            }
        }
    }

    Ok(merged)
}

/// Returns the value the merged object holds for the field at `path`, `None`
/// meaning the field is left out.
fn merge_field(
    incoming: Value,
    stored: Option<&Value>,
    mask: &FieldMask,
    path: &mut Vec<String>,
) -> EedmResult<Option<Value>> {
    let dotted = path.join(".");

    if mask.is_masked(&dotted) {
        if changes(&incoming, stored) {
            return Err(Report::new(EedmError::DataPrivacyViolation(dotted)));
        }
        return Ok(stored.cloned());
    }

    match (incoming, stored) {
        (Value::Object(incoming), Some(Value::Object(stored))) => {
            merge_object(incoming, stored, mask, path).map(|merged| Some(Value::Object(merged)))
        }
        (incoming, stored) => {
            if mask.masks_below(&dotted) && changes(&incoming, stored) {
                return Err(Report::new(EedmError::DataPrivacyViolation(dotted)));
            }
            Ok(Some(incoming))
        }
    }
}

/// Whether laying `incoming` over `stored` would leave a different value.
fn changes(incoming: &Value, stored: Option<&Value>) -> bool {
    match (incoming, stored) {
        (Value::Object(incoming), Some(Value::Object(stored))) => incoming
            .iter()
            .any(|(key, value)| changes(value, stored.get(key))),
        (incoming, stored) => !equivalent(Some(incoming), stored),
    }
}

// null and absent are the same thing on the wire
fn equivalent(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (None | Some(Value::Null), None | Some(Value::Null)) => true,
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}
