use std::error;
use std::fmt;

/// Represents an error that aborts the conversion of a `.bib` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The entry carries no `@type{key,` header.
    MissingType { entry: String },
    /// The entry's type is none of the supported publication types.
    UnknownType { pubtype: String, entry: String },
    /// A field required to describe (or sort) a record is absent.
    MissingField { field: String, key: String },
    /// A non-blank field chunk without any `=` assignment.
    MalformedField { chunk: String, key: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingType { entry } => {
                write!(f, "missing publication type - bib entry: {entry}")
            }
            Self::UnknownType { pubtype, entry } => {
                write!(f, "undefined publication type '{pubtype}': {entry}")
            }
            Self::MissingField { field, key } => {
                write!(f, "missing field '{field}' in entry '{key}'")
            }
            Self::MalformedField { chunk, key } => {
                write!(f, "expected 'name = value' in entry '{key}', found '{chunk}'")
            }
        }
    }
}

impl error::Error for ConversionError {}

// Raised while grouping; never leaves the `group` module.
#[derive(Debug)]
pub(crate) struct GroupKeyAbsent {
    pub(crate) field: String,
    pub(crate) key: String,
}

impl fmt::Display for GroupKeyAbsent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry '{}' has no field '{}' to group by", self.key, self.field)
    }
}

impl error::Error for GroupKeyAbsent {}
