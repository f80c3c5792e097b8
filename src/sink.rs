//! Unknown-term diagnostics.
//!
//! Alphabetic words that match no table and no lexicon entry are reported to
//! an [`UnknownTermSink`] so a linguist can review them for lexicon
//! expansion. Recording is fire-and-forget: a sink must never make
//! normalization fail.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Receiver for unknown-term events.
pub trait UnknownTermSink: Send + Sync {
    /// `context` is the text the term was found in.
    fn record(&self, term: &str, context: &str);
}

impl<S: UnknownTermSink + ?Sized> UnknownTermSink for Arc<S> {
    fn record(&self, term: &str, context: &str) {
        (**self).record(term, context)
    }
}

/// Emits a `tracing` warning per unknown term. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl UnknownTermSink for TracingSink {
    fn record(&self, term: &str, context: &str) {
        tracing::warn!(target: "layered_kreyol::unknown_term", term, context, "unknown term");
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl UnknownTermSink for NullSink {
    fn record(&self, _term: &str, _context: &str) {}
}

/// One recorded unknown term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTerm {
    pub term: String,
    pub context: String,
}

/// Keeps events in memory, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    terms: Mutex<Vec<UnknownTerm>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn terms(&self) -> Vec<UnknownTerm> {
        self.terms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<UnknownTerm> {
        std::mem::take(&mut *self.terms.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl UnknownTermSink for CollectingSink {
    fn record(&self, term: &str, context: &str) {
        self.terms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(UnknownTerm {
                term: term.to_string(),
                context: context.to_string(),
            });
    }
}

/// Appends `<timestamp>\t<term>\t<context>` lines to a review queue file.
///
/// I/O errors are logged and dropped.
#[derive(Debug)]
pub struct ReviewQueueSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ReviewQueueSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

impl UnknownTermSink for ReviewQueueSink {
    fn record(&self, term: &str, context: &str) {
        let line = format!(
            "{}\t{}\t{}\n",
            chrono::Utc::now().to_rfc3339(),
            term,
            context.replace(['\t', '\n', '\r'], " ")
        );
        if let Err(err) = self.append(&line) {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to append to review queue");
        }
    }
}
