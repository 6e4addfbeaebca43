use std::fs;
use std::io;
use std::path;
use std::str;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ConversionError;
use crate::splitter::RawEntries;
use crate::templates;
use crate::types::{FieldValue, Record};

/// `@type{key,` at the head of an entry
static HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(\w+?)\{(.+?),").unwrap());

/// Separator between two fields of an entry
const FIELD_SEPARATOR: &str = "},";

/// Parser converting a `.bib` file into `Record` instances, one entry at a time
pub struct Parser {
    pub(crate) src: String,
}

impl Parser {
    /// Use a file at some filepath as source for the parsing process.
    /// The file is read entirely and closed before this returns.
    pub fn from_file<P: AsRef<path::Path>>(path: P) -> Result<Parser, io::Error> {
        let src = fs::read_to_string(path)?;
        Ok(Parser { src })
    }

    /// Use a string as source for the parsing process.
    pub fn from_string(data: String) -> Parser {
        Parser { src: data }
    }

    pub fn iter(&self) -> Records<'_> {
        Records {
            entries: RawEntries::new(self.src.lines()),
        }
    }

    /// Convert all entries, stopping at the first error.
    pub fn records(&self) -> Result<Vec<Record>, ConversionError> {
        self.iter().collect()
    }
}

impl str::FromStr for Parser {
    type Err = io::Error;

    /// Use a string as source for the parsing process.
    fn from_str(data: &str) -> Result<Self, Self::Err> {
        Ok(Parser::from_string(data.to_string()))
    }
}

/// An iterator yielding one converted Record after another
pub struct Records<'s> {
    pub(crate) entries: RawEntries<str::Lines<'s>>,
}

impl<'s> Iterator for Records<'s> {
    type Item = Result<Record, ConversionError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| parse_entry(&entry))
    }
}

/// Convert one raw entry, i.e. the joined lines of one `@type{key, …}` block.
pub fn parse_entry(entry: &str) -> Result<Record, ConversionError> {
    let header = HEADER_RE
        .captures(entry)
        .ok_or_else(|| ConversionError::MissingType {
            entry: entry.to_string(),
        })?;

    let mut record = Record::new();
    record.insert("pubtype", FieldValue::Text(header[1].to_string()));
    record.insert("key", FieldValue::Text(header[2].trim().to_string()));

    // lines absorbed before the header carry no fields
    let head = header.get(0).map_or(0..0, |m| m.range());
    let body = entry[head.end..].replace(&entry[head], "");
    for chunk in body.split(FIELD_SEPARATOR) {
        let chunk = chunk.replace(['{', '}'], "");
        if chunk.trim().is_empty() {
            continue;
        }
        let (name, data) = chunk
            .split_once('=')
            .ok_or_else(|| ConversionError::MalformedField {
                chunk: chunk.trim().to_string(),
                key: record.key().to_string(),
            })?;
        let name = name.trim();
        record.insert(name, FieldValue::from_data(name, data));
    }

    let pubtype = record.pubtype().into_owned();
    let template = templates::lookup(&pubtype).ok_or_else(|| ConversionError::UnknownType {
        pubtype: pubtype.clone(),
        entry: entry.to_string(),
    })?;
    let desc = template.describe(&record)?;
    record.insert("desc", FieldValue::Text(desc));

    debug!("parsed {} entry '{}'", pubtype, record.key());
    Ok(record)
}
