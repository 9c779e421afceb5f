//! locmerge CLI entry point.
//!
//! Provides command-line tools for plugin translation tables:
//! - `locmerge merge` - Merge tables and print the resulting dictionary
//! - `locmerge scan` - Merge every plugin's table under a plugins directory
//! - `locmerge lookup` - Resolve one key after merging tables
//! - `locmerge check` - Lint tables against a language list

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_lookup, run_merge, run_scan, CheckArgs, LookupArgs, MergeArgs, ScanArgs,
};
use locmerge::{LanguageSet, TranslationStore};
use tracing_subscriber::EnvFilter;

/// Plugin translation table tools.
#[derive(Debug, Parser)]
#[command(name = "locmerge")]
#[command(about = "Plugin translation table tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Known languages in authoritative order (comma-separated)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "English",
        env = "LOCMERGE_LANGUAGES",
        global = true
    )]
    pub languages: Vec<String>,

    /// Active language used for lookups
    #[arg(long, env = "LOCMERGE_LANGUAGE", global = true)]
    pub active: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Fresh store over the configured languages.
    fn store(&self) -> TranslationStore {
        let languages = LanguageSet::new(self.languages.iter().map(|name| name.trim()));
        let store = TranslationStore::new(languages);
        if let Some(active) = &self.active {
            store.set_active_language(active.as_str());
        }
        store
    }
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge tables and print the dictionary
    Merge(MergeArgs),
    /// Merge `<plugin>/<relative>` for each plugin directory under a root
    Scan(ScanArgs),
    /// Resolve a key after merging tables
    Lookup(LookupArgs),
    /// Check tables for unknown languages, duplicate keys and stray fields
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Send merge diagnostics to stderr. `RUST_LOG` overrides the level.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let store = cli.store();
    tracing::debug!(languages = %store.languages(), "Configured language set");

    let result = match cli.command {
        Commands::Merge(args) => run_merge(args, &store),
        Commands::Scan(args) => run_scan(args, &store),
        Commands::Lookup(args) => run_lookup(args, &store),
        Commands::Check(args) => run_check(args, &store),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
