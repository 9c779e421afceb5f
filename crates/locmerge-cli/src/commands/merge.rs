//! Implementation of the `locmerge merge` and `locmerge scan` commands.

use std::path::PathBuf;

use locmerge::{MergeLedger, TableMerger, TranslationStore};
use miette::IntoDiagnostic;

use crate::output::table::format_store_table;
use crate::output::ReportingSink;

/// Arguments for the merge command.
#[derive(Debug, clap::Args)]
pub struct MergeArgs {
    /// Tables to merge, in order; later tables win per cell
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output the merged dictionary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the scan command.
#[derive(Debug, clap::Args)]
pub struct ScanArgs {
    /// Directory whose immediate subdirectories are plugins
    pub root: PathBuf,

    /// Table path inside each plugin directory (e.g. MCM/languages.csv)
    pub relative: PathBuf,

    /// Output the merged dictionary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the merge command.
pub fn run_merge(args: MergeArgs, store: &TranslationStore) -> miette::Result<i32> {
    let ledger = MergeLedger::new();
    let sink = ReportingSink::default();
    let merger = TableMerger::new(store, &ledger).with_sink(&sink);

    let touched: usize = args
        .files
        .iter()
        .map(|file| merger.merge_table(file, None))
        .sum();
    tracing::debug!(touched, files = args.files.len(), "Merge finished");

    print_store(store, args.json)?;
    Ok(sink.exit_code())
}

/// Run the scan command.
pub fn run_scan(args: ScanArgs, store: &TranslationStore) -> miette::Result<i32> {
    let ledger = MergeLedger::new();
    let sink = ReportingSink::default();
    let merger = TableMerger::new(store, &ledger).with_sink(&sink);

    let touched = merger.merge_tables_under(&args.root, &args.relative);
    tracing::debug!(touched, tables = ledger.len(), "Scan finished");

    print_store(store, args.json)?;
    Ok(sink.exit_code())
}

fn print_store(store: &TranslationStore, json: bool) -> miette::Result<()> {
    if json {
        let output = serde_json::to_string_pretty(&store.snapshot()).into_diagnostic()?;
        println!("{}", output);
    } else {
        println!("{}", format_store_table(&store.snapshot()));
    }
    Ok(())
}
