use itertools::Itertools;
use serde_json::Value;

const PATH_SEPARATOR: char = '.';

/// Fields the caller may neither see nor change, as dotted JSON paths.
///
/// A masked path also masks everything below it, so `person` covers `person.id`.
/// Paths walk through arrays, applying to every element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMask {
    fields: Vec<String>,
}

impl FieldMask {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(Into::into)
                .map(|field| field.trim().to_owned())
                .filter(|field| !field.is_empty())
                .unique()
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn is_masked(&self, path: &str) -> bool {
        self.fields
            .iter()
            .any(|field| field == path || is_descendant(path, field))
    }

    /// True when some masked field lives strictly below `path`.
    pub fn masks_below(&self, path: &str) -> bool {
        self.fields.iter().any(|field| is_descendant(field, path))
    }

    /// Removes every masked field from `value`, returning whether anything was removed.
    pub fn redact(&self, value: &mut Value) -> bool {
        self.fields.iter().fold(false, |removed, field| {
            let segments = field.split(PATH_SEPARATOR).collect::<Vec<_>>();
            remove_path(value, &segments) || removed
        })
    }
}

impl<S: Into<String>> FromIterator<S> for FieldMask {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

fn is_descendant(path: &str, ancestor: &str) -> bool {
    path.strip_prefix(ancestor)
        .is_some_and(|rest| rest.starts_with(PATH_SEPARATOR))
}

fn remove_path(value: &mut Value, segments: &[&str]) -> bool {
    match value {
        Value::Object(map) => match segments {
            [] => false,
            [last] => map.remove(*last).is_some(),
            [first, rest @ ..] => map
                .get_mut(*first)
                .is_some_and(|child| remove_path(child, rest)),
        },
        Value::Array(items) => items
            .iter_mut()
            .fold(false, |removed, item| remove_path(item, segments) || removed),
        _ => false,
    }
}
