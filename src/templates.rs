//! Description templates, one per supported publication type.
//!
//! Each template is a list of parts rendered against a record and joined
//! with “, ”. Adding a publication type means adding a row to `TEMPLATES`.

use crate::errors::ConversionError;
use crate::types::Record;

/// One segment of a description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// `prefix` followed by a required field
    Required(&'static str, &'static str),
    /// `prefix` followed by a field, left out if the field is absent or empty
    Optional(&'static str, &'static str),
    /// A required volume, followed by “(number)” if a number is given
    VolumeNumber,
}

/// A publication type and how to describe it
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub pubtype: &'static str,
    pub parts: &'static [Part],
}

use Part::*;

pub static TEMPLATES: [Template; 5] = [
    Template {
        pubtype: "inproceedings",
        parts: &[
            Required("In ", "booktitle"),
            Optional("pp.", "_pages"),
            Required("", "publisher"),
        ],
    },
    Template {
        pubtype: "proceedings",
        parts: &[
            Required("", "series"),
            Required("volume ", "volume"),
            Required("", "publisher"),
        ],
    },
    Template {
        pubtype: "article",
        parts: &[
            Required("", "journal"),
            VolumeNumber,
            Optional("pp.", "_pages"),
            Required("", "year"),
        ],
    },
    Template {
        pubtype: "book",
        parts: &[
            Required("", "series"),
            Required("", "volume"),
            Required("", "publisher"),
            Required("", "year"),
        ],
    },
    Template {
        pubtype: "incollection",
        parts: &[
            Required("", "booktitle"),
            Required("", "series"),
            Required("volume ", "volume"),
            Optional("", "_pages"),
            Required("", "year"),
        ],
    },
];

/// Find the template of a publication type
pub fn lookup(pubtype: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.pubtype == pubtype)
}

impl Part {
    /// Render this part, `None` if it is optional and the record lacks its data.
    fn render(&self, record: &Record) -> Result<Option<String>, ConversionError> {
        match *self {
            Required(prefix, field) => Ok(Some(format!("{prefix}{}", record.require(field)?))),
            Optional(prefix, field) => Ok(record
                .non_empty(field)
                .map(|value| format!("{prefix}{value}"))),
            VolumeNumber => {
                let volume = record.require("volume")?;
                Ok(Some(match record.non_empty("number") {
                    Some(number) => format!("{volume}({number})"),
                    None => volume.to_string(),
                }))
            }
        }
    }
}

impl Template {
    /// Fields without which a record of this type cannot be described
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Required(_, field) => Some(*field),
                VolumeNumber => Some("volume"),
                Optional(..) => None,
            })
            .collect()
    }

    /// Fields used only if present and non-empty
    pub fn optional_fields(&self) -> Vec<&'static str> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Optional(_, field) => Some(*field),
                VolumeNumber => Some("number"),
                Required(..) => None,
            })
            .collect()
    }

    /// Synthesize the human-readable `desc` of a record.
    pub fn describe(&self, record: &Record) -> Result<String, ConversionError> {
        let mut segments = Vec::with_capacity(self.parts.len());
        for part in self.parts {
            if let Some(segment) = part.render(record)? {
                segments.push(segment);
            }
        }
        Ok(segments.join(", "))
    }
}
