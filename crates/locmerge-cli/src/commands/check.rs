//! Implementation of the `locmerge check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use locmerge::{lint_table, TableWarning, TranslationStore};
use miette::{IntoDiagnostic, Report};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::output::TableDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Tables to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if any table has warnings
    #[arg(long)]
    pub strict: bool,
}

/// JSON output format for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: PathBuf,
    readable: bool,
    warnings: Vec<TableWarning>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs, store: &TranslationStore) -> miette::Result<i32> {
    let languages = store.languages();
    let mut reports = Vec::new();

    for file in &args.files {
        let content = match read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                if !args.json {
                    eprintln!("Cannot read {}: {}", file.display(), e);
                }
                reports.push(FileReport {
                    file: file.clone(),
                    readable: false,
                    warnings: Vec::new(),
                });
                continue;
            }
        };

        let warnings = lint_table(&content, &languages);
        if !args.json {
            for warning in &warnings {
                let diagnostic = TableDiagnostic::from_warning(file, &content, warning);
                eprintln!("{:?}", Report::new(diagnostic));
            }
            let summary = format!("{}: {} warning(s)", file.display(), warnings.len());
            if warnings.is_empty() {
                println!("{}", summary.if_supports_color(Stream::Stdout, |s| s.green()));
            } else {
                println!("{}", summary.if_supports_color(Stream::Stdout, |s| s.yellow()));
            }
        }
        reports.push(FileReport {
            file: file.clone(),
            readable: true,
            warnings,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports).into_diagnostic()?);
    }

    let any_unreadable = reports.iter().any(|report| !report.readable);
    let any_warnings = reports.iter().any(|report| !report.warnings.is_empty());
    if any_unreadable {
        Ok(exitcode::NOINPUT)
    } else if args.strict && any_warnings {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
