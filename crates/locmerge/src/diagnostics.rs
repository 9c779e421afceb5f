//! Diagnostic sinks for merge progress and failures.
//!
//! Merging runs while a host is bootstrapping plugins, so nothing in this
//! crate panics or returns an error out of a merge. Problems are described
//! through a [`DiagnosticSink`] instead. Every channel has a no-op default,
//! so an implementation only overrides the channels it cares about.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::mem::take;
use std::sync::{Mutex, PoisonError};

use bon::Builder;
use serde::Serialize;

/// Receiver for informational, warning and error messages.
pub trait DiagnosticSink: Send + Sync {
    fn info(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {}

/// Forwards messages to `tracing` under the `locmerge` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: "locmerge", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "locmerge", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "locmerge", "{message}");
    }
}

/// Boxed message callback.
pub type Callback = Box<dyn Fn(&str) + Send + Sync>;

/// Sink built from optional per-channel callbacks.
///
/// Channels without a callback drop their messages.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use locmerge::{CallbackSink, DiagnosticSink};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let store = Arc::clone(&seen);
/// let sink = CallbackSink::builder()
///     .error(Box::new(move |message: &str| {
///         store.lock().unwrap().push(message.to_string());
///     }))
///     .build();
///
/// sink.info("ignored");
/// sink.error("boom");
/// assert_eq!(*seen.lock().unwrap(), vec!["boom".to_string()]);
/// ```
#[derive(Builder, Default)]
pub struct CallbackSink {
    info: Option<Callback>,
    warn: Option<Callback>,
    error: Option<Callback>,
}

impl DiagnosticSink for CallbackSink {
    fn info(&self, message: &str) {
        if let Some(callback) = &self.info {
            callback(message);
        }
    }

    fn warn(&self, message: &str) {
        if let Some(callback) = &self.warn {
            callback(message);
        }
    }

    fn error(&self, message: &str) {
        if let Some(callback) = &self.error {
            callback(message);
        }
    }
}

/// Severity of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// A message captured by [`CollectingSink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let level = match self.level {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        };
        write!(f, "{level}: {}", self.message)
    }
}

/// Records every message in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn messages(&self) -> Vec<Diagnostic> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages recorded at `level`.
    pub fn at_level(&self, level: Level) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|diagnostic| diagnostic.level == level)
            .map(|diagnostic| diagnostic.message.clone())
            .collect()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        let mut messages = self.messages.lock().unwrap_or_else(PoisonError::into_inner);
        take(&mut *messages)
    }

    fn push(&self, level: Level, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Diagnostic {
                level,
                message: message.to_string(),
            });
    }
}

impl DiagnosticSink for CollectingSink {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}
