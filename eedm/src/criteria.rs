//! The `criteria` query parameter: a JSON object shaped like the resource
//! schema, e.g. `?criteria={"person":{"id":"..."}}`.

use crate::error::{EedmError, EedmResult};
use error_stack::Report;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CriteriaParams {
    /// JSON filter object shaped like the resource representation
    pub criteria: Option<String>,
}

/// What a list request should do with its filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criteria<F> {
    Filter(F),
    /// A filter named a field but gave it no value; nothing can match.
    NoMatches,
}

impl CriteriaParams {
    pub fn parse<F>(&self) -> EedmResult<Criteria<F>>
    where
        F: DeserializeOwned + Default,
    {
        parse(self.criteria.as_deref())
    }
}

pub fn parse<F>(raw: Option<&str>) -> EedmResult<Criteria<F>>
where
    F: DeserializeOwned + Default,
{
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(Criteria::Filter(F::default()));
    };

    let value = serde_json::from_str::<Value>(raw).map_err(|e| {
        Report::new(EedmError::validation(
            "The 'criteria' query parameter is not valid JSON.",
        ))
        .attach(e.to_string())
    })?;

    let Value::Object(fields) = &value else {
        return Err(Report::new(EedmError::validation(
            "The 'criteria' query parameter must be a JSON object.",
        )));
    };

    if fields.values().any(has_empty_value) {
        return Ok(Criteria::NoMatches);
    }

    serde_json::from_value::<F>(value)
        .map(Criteria::Filter)
        .map_err(|e| Report::new(EedmError::validation(format!("Invalid 'criteria' filter: {e}"))))
}

fn has_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Object(fields) => fields.is_empty() || fields.values().any(has_empty_value),
        Value::Array(items) => items.is_empty() || items.iter().any(has_empty_value),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// For endpoints filtered by plain query parameters: true when a parameter
/// was supplied without a usable value (`?person=` or `?person=""`).
pub fn has_blank_filter<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> bool {
    values
        .into_iter()
        .flatten()
        .any(|value| value.replace('"', "").trim().is_empty())
}
