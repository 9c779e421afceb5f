//! CLI command implementations.

mod check;
mod lookup;
mod merge;

pub use check::{run_check, CheckArgs};
pub use lookup::{run_lookup, LookupArgs};
pub use merge::{run_merge, run_scan, MergeArgs, ScanArgs};
