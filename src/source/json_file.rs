//! JSON file candidate source.
//!
//! Reads the same document shape the users endpoint serves: a JSON array of
//! display names. The endpoint encodes "no rows" as `null`, so any well-formed
//! document that is not an array counts as an empty list rather than a failure.

use crate::model::FetchError;
use crate::source::CandidateSource;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Candidate source backed by a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Extract display names from a decoded document.
///
/// Array elements that are not strings are skipped.
pub fn names_from_document(document: Value) -> Vec<String> {
    let Value::Array(items) = document else {
        debug!("document is not an array, treating as empty");
        return Vec::new();
    };
    let total = items.len();
    let names: Vec<String> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(name) => Some(name),
            _ => None,
        })
        .collect();
    if names.len() != total {
        warn!(skipped = total - names.len(), "skipped non-string entries");
    }
    names
}

impl CandidateSource for JsonFileSource {
    fn fetch_candidates(&self) -> Result<Vec<String>, FetchError> {
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| FetchError::io(&self.path, &e))?;
        let document: Value = serde_json::from_str(&contents)
            .map_err(|e| FetchError::new(format!("invalid JSON in {}: {}", self.path.display(), e)))?;
        Ok(names_from_document(document))
    }
}
