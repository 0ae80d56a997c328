//! Error types for the work-log form.
//!
//! The taxonomy is split by blast radius:
//!
//! - [`SourceError`] - candidate list could not be used (fetch failed, or came back empty).
//!   Terminal for the triggering load; the screen shows the message until a reload.
//! - [`FetchError`] - raw transport/parse failure reported by a
//!   [`CandidateSource`](crate::source::CandidateSource). Always surfaces as
//!   [`SourceError::Unavailable`].
//! - [`TimeParseError`] - strict parsing of the canonical `HH:MM` boundary string.
//! - [`AppError`] - top-level error returned by the binary.
//!
//! Core state operations (filtering, selection, history edits, time conversion)
//! are total and never produce errors.

use std::path::Path;
use thiserror::Error;

/// Top-level application error.
///
/// All domain-specific errors convert into `AppError` via `From`, so the binary can
/// propagate with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, rendering or event polling failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),

    /// A `--start`/`--end` argument was not a canonical time.
    #[error("Invalid time argument: {0}")]
    Time(#[from] TimeParseError),
}

/// Failure reported by a candidate data source.
///
/// Carries the human-readable reason only; the screen never branches on the
/// transport detail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct FetchError {
    reason: String,
}

impl FetchError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Failed to read a source file.
    pub fn io(path: &Path, source: &std::io::Error) -> Self {
        Self::new(format!("{}: {}", path.display(), source))
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Why the candidate list is not usable.
///
/// `Unavailable` and `Empty` are kept distinct: the first is a fault, the second is
/// a successful fetch that returned nothing. Both replace the interactive view.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Transport or parse failure. The reason is preserved for display.
    #[error("Failed to fetch users: {0}")]
    Unavailable(String),

    /// Fetch succeeded but returned zero candidates.
    #[error("No users found from server")]
    Empty,
}

impl From<FetchError> for SourceError {
    fn from(err: FetchError) -> Self {
        SourceError::Unavailable(err.reason)
    }
}

/// Strict canonical time parsing failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// Input is not of the form `H:MM` / `HH:MM`.
    #[error("expected HH:MM, got {0:?}")]
    Malformed(String),

    /// Hour outside 0..=23.
    #[error("hour {0} out of range 0-23")]
    HourOutOfRange(u32),

    /// Minute outside 0..=59.
    #[error("minute {0} out of range 0-59")]
    MinuteOutOfRange(u32),
}
