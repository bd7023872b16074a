//! Field wrappers and record-sequence normalization.
//!
//! Every leaf of a KSeF record is a [`Field`]: an optional wrapper around raw
//! text. Absence is modelled with `Option<Field>`; a present wrapper may still
//! carry an empty string, which is *not* treated as a value.

use serde::{Deserialize, Serialize};

/// A raw text value taken from the source invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FieldRepr", into = "String")]
pub struct Field {
    text: String,
}

impl Field {
    /// Create a field holding the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Raw text of the field (possibly empty).
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Field {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Field {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<Field> for String {
    fn from(field: Field) -> Self {
        field.text
    }
}

/// Accepted input shapes: a bare string, a number, or an XML-to-JSON style
/// `{"_text": "..."}` object.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldRepr {
    Text(String),
    Number(serde_json::Number),
    Wrapped {
        #[serde(rename = "_text", default)]
        text: String,
    },
}

impl From<FieldRepr> for Field {
    fn from(repr: FieldRepr) -> Self {
        match repr {
            FieldRepr::Text(text) => Self::new(text),
            FieldRepr::Number(number) => Self::new(number.to_string()),
            FieldRepr::Wrapped { text } => Self::new(text),
        }
    }
}

/// Check whether a field is present and non-empty.
pub fn has_value<'a>(field: impl Into<Option<&'a Field>>) -> bool {
    field.into().is_some_and(|f| !f.text.is_empty())
}

/// Get the text of a field, or an empty string when absent.
pub fn get_value<'a>(field: impl Into<Option<&'a Field>>) -> &'a str {
    field.into().map(Field::text).unwrap_or_default()
}

/// Check whether a flag field is set (`"1"`).
pub fn is_set<'a>(field: impl Into<Option<&'a Field>>) -> bool {
    get_value(field) == "1"
}

/// Zero, one or many records stored under one field name.
///
/// Source documents encode a repeated element as a single object when it
/// occurs once and as an array otherwise.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// Array form.
    Many(Vec<T>),
    /// Single-record form.
    One(T),
}

impl<T> OneOrMany<T> {
    /// Records as an ordered slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::Many(records) => records,
            OneOrMany::One(record) => std::slice::from_ref(record),
        }
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(records: Vec<T>) -> Self {
        OneOrMany::Many(records)
    }
}

/// Normalize an optional record sequence into an ordered slice.
///
/// Order is preserved and nothing is deduplicated.
pub fn get_table<T>(records: Option<&OneOrMany<T>>) -> &[T] {
    records.map(OneOrMany::as_slice).unwrap_or_default()
}

/// Name-based field access, used to build tables from a column list.
pub trait Record {
    /// Look up a field by its schema name.
    fn field(&self, name: &str) -> Option<&Field>;
}
