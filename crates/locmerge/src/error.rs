//! Error and warning types for table merging and checking.

use std::io::Error as IoError;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A merge pass that could not complete.
///
/// The never-failing entry points on [`TableMerger`](crate::TableMerger)
/// report these through the diagnostic sink instead of returning them.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The plugin root passed to a directory scan does not exist.
    #[error("plugins root does not exist: {}", path.display())]
    MissingRoot { path: PathBuf },

    /// File I/O error when reading a table or listing a directory.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// The table has a header line and nothing else.
    #[error("{source_name} has no rows")]
    NoRows { source_name: String },
}

impl MergeError {
    /// Whether this is reported on the warning channel rather than error.
    pub fn is_warning(&self) -> bool {
        matches!(self, MergeError::NoRows { .. })
    }
}

/// Result of a successful [`try_merge_table`](crate::TableMerger::try_merge_table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The source was parsed; carries the number of touched keys.
    Merged(usize),
    /// The source was already claimed in the ledger and was skipped.
    AlreadyMerged,
}

impl MergeOutcome {
    /// Touched keys, zero when skipped.
    pub fn touched(self) -> usize {
        match self {
            MergeOutcome::Merged(count) => count,
            MergeOutcome::AlreadyMerged => 0,
        }
    }
}

/// A problem found by [`lint_table`](crate::lint_table).
///
/// None of these stop a merge; they describe input the merger silently
/// ignores or resolves by position.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableWarning {
    /// Header names a language outside the language set.
    #[error("unknown language '{name}' in column {column}{}", format_suggestions(suggestions))]
    UnknownLanguage {
        column: usize,
        name: String,
        suggestions: Vec<String>,
    },

    /// Header names the same language twice; the later column wins.
    #[error("language '{name}' repeated in column {column}")]
    DuplicateLanguage { column: usize, name: String },

    /// Key appears on more than one row of the same table.
    #[error("line {line}: key '{key}' already defined on line {first_line}")]
    DuplicateKey {
        line: usize,
        key: String,
        first_line: usize,
    },

    /// Row has more fields than the header; the extras are ignored.
    #[error("line {line}: key '{key}' has {found} fields, header has {expected}")]
    ExtraFields {
        line: usize,
        key: String,
        expected: usize,
        found: usize,
    },

    /// Only a header line.
    #[error("table has a header but no rows")]
    NoRows,
}

impl TableWarning {
    /// 1-based line the warning refers to; header warnings point at line 1.
    pub fn line(&self) -> usize {
        match self {
            TableWarning::DuplicateKey { line, .. } | TableWarning::ExtraFields { line, .. } => {
                *line
            }
            TableWarning::UnknownLanguage { .. }
            | TableWarning::DuplicateLanguage { .. }
            | TableWarning::NoRows => 1,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean '{}'?", suggestions.join("', '"))
    }
}
