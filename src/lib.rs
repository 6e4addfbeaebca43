//! This crate converts `.bib` files exported from DBLP into JSON records,
//! e.g. to maintain a publication list on a website.
//!
//! One entry in such a file can look like this:
//!
//! ```tex
//! @article{DBLP:journals/cacm/Knuth74,
//!   author    = {Donald E. Knuth},
//!   journal   = {Commun. {ACM}},
//!   volume    = {17},
//!   number    = {12},
//!   year      = {1974}
//! }
//! ```
//!
//! We call `article` the `pubtype` and `DBLP:journals/cacm/Knuth74` the `key`.
//! Each entry becomes a `Record` holding these two, every field of the entry
//! (`author` and `editor` as lists of names) and a synthesized one-line
//! description `desc`, here “Commun. ACM, 17(12), 1974”.
//!
//! Only the publication types `inproceedings`, `proceedings`, `article`,
//! `book` and `incollection` are supported. The grammar is deliberately
//! small: fields are separated by `},`, and braces are simply dropped.
//!
//! ```rust
//! use bib2json::{group, Parser};
//! use std::str::FromStr;
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     //let p = Parser::from_file("dblp.bib")?;
//!     let p = Parser::from_str("@book{b1, series={LNCS}, volume={1}, publisher={Springer}, year={2001}}")?;
//!     let grouped = group(p.records()?, None)?;
//!     assert_eq!(grouped["items"].len(), 1);
//!     Ok(())
//! }
//! ```

mod errors;
mod group;
mod parser;
mod splitter;
mod templates;
mod types;

pub use crate::errors::ConversionError;
pub use crate::group::{group, write_json, Grouped, DEFAULT_GROUP};
pub use crate::parser::{parse_entry, Parser, Records};
pub use crate::splitter::RawEntries;
pub use crate::templates::{lookup, Part, Template, TEMPLATES};
pub use crate::types::{FieldValue, Record};
