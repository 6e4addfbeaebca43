use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::errors::ConversionError;

/// Fields whose data is a list of names separated by “ and ”
pub const NAME_FIELDS: [&str; 2] = ["author", "editor"];

/// The data of one field: plain text, or the names of an `author`/`editor` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Names(Vec<String>),
}

impl FieldValue {
    /// Build the value for field `name` from its raw, brace-free data.
    /// Name lists are split on “ and ”, everything else is trimmed.
    pub fn from_data(name: &str, data: &str) -> FieldValue {
        if NAME_FIELDS.contains(&name) {
            FieldValue::Names(data.split(" and ").map(|n| n.trim().to_string()).collect())
        } else {
            FieldValue::Text(data.trim().to_string())
        }
    }

    /// Is this value absent for the purpose of optional description parts?
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Names(names) => names.is_empty(),
        }
    }

    /// String used for ordering and grouping records.
    pub fn sort_key(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Names(names) => Cow::Owned(names.join(" and ")),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sort_key())
    }
}

/// One converted entry of a `.bib` file.
///
/// Fields keep their insertion order: `pubtype`, `key`, the entry's own
/// fields in source order, then the synthesized `desc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Generate a new, empty record. Can also be called through the `Default` implementation.
    pub fn new() -> Record {
        Record {
            fields: IndexMap::new(),
        }
    }

    /// Set a field, replacing earlier data but keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Like `get`, but reports an absent field as `MissingField`.
    pub fn require(&self, name: &str) -> Result<&FieldValue, ConversionError> {
        self.get(name).ok_or_else(|| ConversionError::MissingField {
            field: name.to_string(),
            key: self.key().to_string(),
        })
    }

    /// Returns the field only if it holds non-empty data.
    pub fn non_empty(&self, name: &str) -> Option<&FieldValue> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// The citation identifier, e.g. “DBLP:books/lib/Knuth97”
    pub fn key(&self) -> Cow<'_, str> {
        self.get("key").map(FieldValue::sort_key).unwrap_or_default()
    }

    /// The publication type, e.g. “article”
    pub fn pubtype(&self) -> Cow<'_, str> {
        self.get("pubtype").map(FieldValue::sort_key).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
