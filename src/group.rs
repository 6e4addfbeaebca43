//! Sorting and grouping of converted records, and their JSON output.

use std::cmp::Ordering;
use std::io;

use indexmap::IndexMap;
use log::{info, warn};

use crate::errors::{ConversionError, GroupKeyAbsent};
use crate::types::Record;

/// Name of the single group used when records are not grouped by a field
pub const DEFAULT_GROUP: &str = "items";

/// Field records are ordered by, most recent first
pub const YEAR: &str = "year";

/// Group name mapped to its records, sorted descending by year
pub type Grouped = IndexMap<String, Vec<Record>>;

/// Sort `records` by year, most recent first, and group them by the
/// data of field `by`. If no field is given, or some record lacks it,
/// all records end up in the single group “items”.
///
/// Every record must carry a `year`; otherwise `MissingField` is returned.
pub fn group(records: Vec<Record>, by: Option<&str>) -> Result<Grouped, ConversionError> {
    for record in &records {
        record.require(YEAR)?;
    }

    let grouped = match by {
        Some(field) => match partition(&records, field) {
            Ok(grouped) => grouped,
            Err(absent) => {
                warn!("{}; putting all entries under '{}'", absent, DEFAULT_GROUP);
                single(records)
            }
        },
        None => single(records),
    };

    info!(
        "grouped {} entries into {} group(s)",
        grouped.values().map(Vec::len).sum::<usize>(),
        grouped.len()
    );
    Ok(grouped)
}

/// Serialize `grouped` as one JSON document followed by a newline.
pub fn write_json<W: io::Write>(
    mut writer: W,
    grouped: &Grouped,
    pretty: bool,
) -> Result<(), io::Error> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, grouped)?;
    } else {
        serde_json::to_writer(&mut writer, grouped)?;
    }
    writeln!(writer)?;
    writer.flush()
}

fn single(mut records: Vec<Record>) -> Grouped {
    sort_by_year(&mut records);
    let mut grouped = Grouped::new();
    grouped.insert(DEFAULT_GROUP.to_string(), records);
    grouped
}

fn partition(records: &[Record], field: &str) -> Result<Grouped, GroupKeyAbsent> {
    let mut keyed = Vec::with_capacity(records.len());
    for record in records {
        let value = record.get(field).ok_or_else(|| GroupKeyAbsent {
            field: field.to_string(),
            key: record.key().into_owned(),
        })?;
        keyed.push((value.sort_key().into_owned(), record.clone()));
    }
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut grouped = Grouped::new();
    for (value, record) in keyed {
        grouped.entry(value).or_default().push(record);
    }
    for members in grouped.values_mut() {
        sort_by_year(members);
    }
    Ok(grouped)
}

// Stable, so records of the same year keep their input order.
fn sort_by_year(records: &mut [Record]) {
    records.sort_by(|a, b| by_year(b, a));
}

fn by_year(a: &Record, b: &Record) -> Ordering {
    let year = |r: &Record| r.get(YEAR).map(|v| v.sort_key().into_owned());
    year(a).cmp(&year(b))
}
