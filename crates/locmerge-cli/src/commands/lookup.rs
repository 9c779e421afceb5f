//! Implementation of the `locmerge lookup` command.

use std::path::PathBuf;

use clap::ArgGroup;
use locmerge::{
    description_key_for, option_key_for, MergeLedger, Resolver, TableMerger, TranslationStore,
    DEFAULT_LANGUAGE,
};
use miette::{miette, IntoDiagnostic};
use serde::Serialize;

use crate::output::ReportingSink;

/// Arguments for the lookup command.
#[derive(Debug, clap::Args)]
#[command(group(ArgGroup::new("target").required(true).args(["key", "option", "description"])))]
pub struct LookupArgs {
    /// Translation key to resolve
    pub key: Option<String>,

    /// Resolve the key `<MOD>_<OPTION>_<FIELD>`
    #[arg(long, num_args = 3, value_names = ["MOD", "OPTION", "FIELD"])]
    pub option: Option<Vec<String>>,

    /// Resolve the key `<MOD>_description`
    #[arg(long, value_name = "MOD")]
    pub description: Option<String>,

    /// Tables to merge before resolving
    #[arg(short, long = "table", required = true)]
    pub tables: Vec<PathBuf>,

    /// Text returned when no translation is found
    #[arg(long, default_value = "")]
    pub fallback: String,

    /// Language tried after the active one
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub default_language: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for lookup results.
#[derive(Serialize)]
pub struct LookupResult {
    pub key: String,
    pub found: bool,
    pub result: String,
}

/// Run the lookup command.
pub fn run_lookup(args: LookupArgs, store: &TranslationStore) -> miette::Result<i32> {
    let ledger = MergeLedger::new();
    let sink = ReportingSink::default();
    let merger = TableMerger::new(store, &ledger).with_sink(&sink);
    for table in &args.tables {
        merger.merge_table(table, None);
    }

    let resolver = Resolver::builder()
        .store(store)
        .default_language(args.default_language.as_str())
        .build();

    let key = match (&args.key, &args.option, &args.description) {
        (Some(key), _, _) => key.clone(),
        (None, Some(parts), _) => match parts.as_slice() {
            [mod_id, option_key, field] => option_key_for(mod_id, option_key, field),
            _ => return Err(miette!("--option takes exactly three values")),
        },
        (None, None, Some(mod_id)) => description_key_for(mod_id),
        (None, None, None) => return Err(miette!("no key given")),
    };

    let found = resolver.lookup(&key);
    let output = LookupResult {
        found: found.is_some(),
        result: found.unwrap_or_else(|| args.fallback.clone()),
        key,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", output.result);
    }

    if output.found {
        Ok(sink.exit_code())
    } else {
        Ok(exitcode::DATAERR)
    }
}
