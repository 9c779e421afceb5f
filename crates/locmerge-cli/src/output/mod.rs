//! Output helpers shared by the CLI commands.

mod diagnostic;
pub mod table;

use std::sync::atomic::{AtomicBool, Ordering};

use locmerge::{DiagnosticSink, TracingSink};

pub use diagnostic::TableDiagnostic;

/// Forwards merge diagnostics to `tracing` and remembers whether any
/// error was reported, so commands can pick an exit code.
#[derive(Debug, Default)]
pub struct ReportingSink {
    inner: TracingSink,
    failed: AtomicBool,
}

impl ReportingSink {
    /// `NOINPUT` if a table or root could not be read, `OK` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.failed.load(Ordering::Relaxed) {
            exitcode::NOINPUT
        } else {
            exitcode::OK
        }
    }
}

impl DiagnosticSink for ReportingSink {
    fn info(&self, message: &str) {
        self.inner.info(message);
    }

    fn warn(&self, message: &str) {
        self.inner.warn(message);
    }

    fn error(&self, message: &str) {
        self.failed.store(true, Ordering::Relaxed);
        self.inner.error(message);
    }
}
