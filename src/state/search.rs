//! Autocomplete filter and selection-history engine.
//!
//! `SearchFilterEngine` owns the query, the loaded candidate list, the derived
//! dropdown view, and the recent/favorite containers. Every method is a pure
//! state transition: no I/O, no blocking. Loading is split into
//! [`begin_load`](SearchFilterEngine::begin_load) and
//! [`finish_load`](SearchFilterEngine::finish_load) so the fetch itself can run
//! elsewhere (see [`SourceLoader`](crate::source::SourceLoader)).

use crate::model::{Candidate, FetchError, SourceError};
use crate::source::CandidateSource;
use crate::state::history::{FavoriteSet, RecentList, DEFAULT_RECENT_CAPACITY};
use tracing::{debug, info, warn};

/// Queries must be longer than this many characters to open the dropdown.
pub const DEFAULT_MIN_QUERY_LEN: usize = 1;

// ===== LoadTicket =====

/// Identifies one invocation of the candidate load.
///
/// Tickets increase monotonically per engine; only the outcome carrying the most
/// recently issued ticket is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn get(self) -> u64 {
        self.0
    }
}

// ===== LoadStatus =====

/// Lifecycle of the candidate list.
///
/// `Idle` (never loaded) and `Ready` with an empty list are different states;
/// an empty fetch result lands in `Failed(SourceError::Empty)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load has been started.
    Idle,
    /// A load is in flight.
    Loading(LoadTicket),
    /// Candidates are loaded and interactive.
    Ready,
    /// The last load failed or came back empty.
    Failed(SourceError),
}

// ===== EngineSettings =====

/// Tunables for [`SearchFilterEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub recent_capacity: usize,
    pub min_query_len: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            recent_capacity: DEFAULT_RECENT_CAPACITY,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

// ===== Filtering =====

/// Case-insensitive substring filter preserving source order.
///
/// Recomputed from scratch against the full source on every call.
pub fn filter_candidates(source: &[Candidate], query: &str) -> Vec<Candidate> {
    let query_lower = query.to_lowercase();
    source
        .iter()
        .filter(|candidate| candidate.contains_lowercase(&query_lower))
        .cloned()
        .collect()
}

// ===== SearchFilterEngine =====

#[derive(Debug, Clone)]
pub struct SearchFilterEngine {
    source: Vec<Candidate>,
    query: String,
    filtered: Vec<Candidate>,
    dropdown_visible: bool,
    recent: RecentList,
    favorites: FavoriteSet,
    status: LoadStatus,
    last_ticket: u64,
    min_query_len: usize,
}

impl SearchFilterEngine {
    pub fn new() -> Self {
        Self::with_settings(EngineSettings::default())
    }

    pub fn with_settings(settings: EngineSettings) -> Self {
        Self {
            source: Vec::new(),
            query: String::new(),
            filtered: Vec::new(),
            dropdown_visible: false,
            recent: RecentList::with_capacity(settings.recent_capacity),
            favorites: FavoriteSet::new(),
            status: LoadStatus::Idle,
            last_ticket: 0,
            min_query_len: settings.min_query_len,
        }
    }

    // ===== Query =====

    /// Store the query and recompute the dropdown.
    ///
    /// Longer than `min_query_len` characters: filter and show. Otherwise: clear
    /// and hide. History is never touched.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.refilter();
    }

    fn refilter(&mut self) {
        if self.query.chars().count() > self.min_query_len {
            self.filtered = filter_candidates(&self.source, &self.query);
            self.dropdown_visible = true;
        } else {
            self.filtered.clear();
            self.dropdown_visible = false;
        }
    }

    /// Choose a candidate: it becomes the query and the dropdown closes.
    ///
    /// Recorded in the recent list only if not already present.
    pub fn select(&mut self, candidate: &Candidate) {
        self.query = candidate.as_str().to_string();
        self.filtered.clear();
        self.dropdown_visible = false;
        if self.recent.record(candidate) {
            debug!(candidate = %candidate, "recorded recent selection");
        }
    }

    /// Flip favorite membership. Returns `true` if now a favorite.
    pub fn toggle_favorite(&mut self, candidate: &Candidate) -> bool {
        let now_favorite = self.favorites.toggle(candidate);
        debug!(candidate = %candidate, favorite = now_favorite, "toggled favorite");
        now_favorite
    }

    pub fn remove_recent(&mut self, candidate: &Candidate) {
        self.recent.remove(candidate);
    }

    pub fn remove_favorite(&mut self, candidate: &Candidate) {
        self.favorites.remove(candidate);
    }

    // ===== Loading =====

    /// Enter the loading state and issue a ticket for this attempt.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.last_ticket += 1;
        let ticket = LoadTicket(self.last_ticket);
        self.status = LoadStatus::Loading(ticket);
        debug!(ticket = ticket.get(), "candidate load started");
        ticket
    }

    /// Run a load to completion on the calling thread.
    ///
    /// Equivalent to `begin_load`, a fetch, then `finish_load`. Returns the
    /// resulting error state, if any.
    pub fn load_from(&mut self, source: &dyn CandidateSource) -> Option<&SourceError> {
        let ticket = self.begin_load();
        let outcome = source.fetch_candidates();
        self.finish_load(ticket, outcome);
        self.error()
    }

    /// Apply the outcome of a fetch.
    ///
    /// - non-empty list: stored, error cleared, status `Ready`
    /// - empty list: stored as `[]`, status `Failed(SourceError::Empty)`
    /// - failure: status `Failed(Unavailable)`, source list untouched
    ///
    /// Only the outcome for the in-flight ticket is applied; stale or repeated
    /// outcomes are ignored. Returns whether the outcome was applied.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Vec<String>, FetchError>,
    ) -> bool {
        if self.status != LoadStatus::Loading(ticket) {
            warn!(
                ticket = ticket.get(),
                latest = self.last_ticket,
                "dropping stale candidate load"
            );
            return false;
        }

        match outcome {
            Ok(names) if names.is_empty() => {
                warn!("candidate source returned no entries");
                self.source.clear();
                self.status = LoadStatus::Failed(SourceError::Empty);
            }
            Ok(names) => {
                info!(count = names.len(), "candidates loaded");
                self.source = names.into_iter().map(Candidate::from).collect();
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                warn!(error = %err, "candidate load failed");
                self.status = LoadStatus::Failed(err.into());
            }
        }

        // Keep the dropdown a subset of the current source.
        self.refilter();
        true
    }

    // ===== Read-only views =====

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn source(&self) -> &[Candidate] {
        &self.source
    }

    pub fn filtered(&self) -> &[Candidate] {
        &self.filtered
    }

    pub fn dropdown_visible(&self) -> bool {
        self.dropdown_visible
    }

    pub fn recent(&self) -> &RecentList {
        &self.recent
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, candidate: &Candidate) -> bool {
        self.favorites.contains(candidate)
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading(_))
    }

    pub fn error(&self) -> Option<&SourceError> {
        match &self.status {
            LoadStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl Default for SearchFilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
