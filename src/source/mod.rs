//! Candidate data sources.
//!
//! The screen treats fetching as an opaque call that returns a list of display
//! strings or a failure reason. Transport detail belongs to the source:
//! - [`StaticSource`] for an in-memory list
//! - [`JsonFileSource`] for a JSON array of strings on disk
//!
//! [`SourceLoader`] runs any source on a worker thread and hands the outcome
//! back to the UI thread through a channel.

use crate::model::FetchError;

pub mod json_file;
pub mod loader;

pub use json_file::JsonFileSource;
pub use loader::{LoadOutcome, SourceLoader};

/// One-shot provider of candidate display strings.
pub trait CandidateSource: Send + Sync {
    /// Fetch the full candidate list.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on transport or parse failure. An empty `Ok` is a
    /// valid answer and is not an error at this layer.
    fn fetch_candidates(&self) -> Result<Vec<String>, FetchError>;
}

/// Fixed in-memory list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSource {
    names: Vec<String>,
}

impl StaticSource {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl CandidateSource for StaticSource {
    fn fetch_candidates(&self) -> Result<Vec<String>, FetchError> {
        Ok(self.names.clone())
    }
}

/// Source that always fails with the given reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailingSource {
    reason: String,
}

impl FailingSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl CandidateSource for FailingSource {
    fn fetch_candidates(&self) -> Result<Vec<String>, FetchError> {
        Err(FetchError::new(self.reason.clone()))
    }
}
