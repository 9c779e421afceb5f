//! Parse error types for translation tables.

use thiserror::Error;

/// An error that occurred while parsing a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input has no header line at all.
    #[error("table is empty")]
    Empty,

    /// The input has a header line but nothing after it.
    #[error("table has a header but no rows")]
    NoRows,
}
