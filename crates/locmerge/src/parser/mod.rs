//! Parser for semicolon-delimited translation tables.
//!
//! A table is a header line `Key;Lang1;Lang2;...` followed by data lines
//! `key;value1;value2;...`. Blank lines and lines starting with `#` or `//`
//! are skipped. There is no quoting: a `;` always separates fields.

pub mod error;
mod table;

pub use error::ParseError;
pub use table::{
    Header, LineKind, SEPARATOR, Table, TableRow, classify_line, parse_table, split_fields,
};
