//! Miette diagnostic wrapper for table lint warnings.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use locmerge::TableWarning;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing at the line a warning refers to.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(locmerge::table), severity(Warning))]
pub struct TableDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TableDiagnostic {
    /// Create a diagnostic from a lint warning with source context.
    pub fn from_warning(path: &Path, content: &str, warning: &TableWarning) -> Self {
        let line = warning.line();

        // Byte offset of the start of the line, plus the line's length.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>();
        let length = content
            .lines()
            .nth(line.saturating_sub(1))
            .map_or(0, str::len)
            .max(1);

        // Clamp to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());
        let length = length.min(content.len().saturating_sub(offset));

        TableDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, length).into(),
            message: warning.to_string(),
            help: help_for(warning),
        }
    }
}

fn help_for(warning: &TableWarning) -> Option<String> {
    match warning {
        TableWarning::UnknownLanguage { .. } => {
            Some("columns for unknown languages are skipped when merging".to_string())
        }
        TableWarning::DuplicateLanguage { .. } => {
            Some("the rightmost column wins for each row".to_string())
        }
        TableWarning::DuplicateKey { .. } => {
            Some("later rows overwrite the cells they fill".to_string())
        }
        TableWarning::ExtraFields { .. } => {
            Some("fields past the last header column are ignored; `;` cannot be escaped".to_string())
        }
        TableWarning::NoRows => None,
    }
}
