//! Selection history containers: recent selections and favorites.
//!
//! Both are plain in-memory lists owned by the search engine; nothing here
//! survives the screen.

use crate::model::Candidate;

/// Default number of distinct recent selections kept.
pub const DEFAULT_RECENT_CAPACITY: usize = 10;

// ===== RecentList =====

/// Most-recent-first list of distinct selections, capped at `capacity`.
///
/// A candidate already present is never moved or duplicated; new candidates are
/// prepended and the tail beyond `capacity` is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentList {
    items: Vec<Candidate>,
    capacity: usize,
}

impl RecentList {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_RECENT_CAPACITY)
    }

    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a selection. Returns `true` if the list changed.
    pub fn record(&mut self, candidate: &Candidate) -> bool {
        if self.items.contains(candidate) {
            return false;
        }
        self.items.insert(0, candidate.clone());
        self.items.truncate(self.capacity);
        true
    }

    /// Remove every occurrence. Returns how many entries were removed.
    pub fn remove(&mut self, candidate: &Candidate) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item != candidate);
        before - self.items.len()
    }

    pub fn contains(&self, candidate: &Candidate) -> bool {
        self.items.contains(candidate)
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RecentList {
    fn default() -> Self {
        Self::new()
    }
}

// ===== FavoriteSet =====

/// Set of favorite candidates, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    items: Vec<Candidate>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership. Returns `true` if the candidate is a favorite afterwards.
    pub fn toggle(&mut self, candidate: &Candidate) -> bool {
        if self.remove(candidate) > 0 {
            false
        } else {
            self.items.push(candidate.clone());
            true
        }
    }

    /// Remove every occurrence. Returns how many entries were removed.
    pub fn remove(&mut self, candidate: &Candidate) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item != candidate);
        before - self.items.len()
    }

    pub fn contains(&self, candidate: &Candidate) -> bool {
        self.items.contains(candidate)
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str) -> Candidate {
        Candidate::new(name)
    }

    #[test]
    fn record_prepends_new_candidates() {
        let mut recent = RecentList::new();
        recent.record(&c("Alice"));
        recent.record(&c("Bob"));
        assert_eq!(recent.as_slice(), &[c("Bob"), c("Alice")]);
    }

    #[test]
    fn record_existing_does_not_reorder() {
        let mut recent = RecentList::new();
        recent.record(&c("Alice"));
        recent.record(&c("Bob"));

        assert!(!recent.record(&c("Alice")));
        assert_eq!(recent.as_slice(), &[c("Bob"), c("Alice")]);
    }

    #[test]
    fn record_drops_oldest_beyond_capacity() {
        let mut recent = RecentList::new();
        for i in 0..12 {
            recent.record(&c(&format!("user{i}")));
        }
        assert_eq!(recent.len(), DEFAULT_RECENT_CAPACITY);
        assert_eq!(recent.as_slice()[0], c("user11"));
        assert_eq!(recent.as_slice()[9], c("user2"));
        assert!(!recent.contains(&c("user0")));
    }

    #[test]
    fn dropped_candidate_can_be_recorded_again() {
        let mut recent = RecentList::with_capacity(2);
        recent.record(&c("a"));
        recent.record(&c("b"));
        recent.record(&c("c"));
        assert!(recent.record(&c("a")));
        assert_eq!(recent.as_slice(), &[c("a"), c("c")]);
    }

    #[test]
    fn zero_capacity_is_one() {
        let mut recent = RecentList::with_capacity(0);
        recent.record(&c("a"));
        recent.record(&c("b"));
        assert_eq!(recent.as_slice(), &[c("b")]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut recent = RecentList::new();
        recent.record(&c("a"));
        assert_eq!(recent.remove(&c("zzz")), 0);
        assert_eq!(recent.len(), 1);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut favorites = FavoriteSet::new();
        assert!(favorites.toggle(&c("Alice")));
        assert!(favorites.contains(&c("Alice")));
        assert!(!favorites.toggle(&c("Alice")));
        assert!(favorites.is_empty());
    }

    #[test]
    fn favorites_iterate_in_insertion_order() {
        let mut favorites = FavoriteSet::new();
        favorites.toggle(&c("Carol"));
        favorites.toggle(&c("Alice"));
        favorites.toggle(&c("Bob"));
        assert_eq!(favorites.as_slice(), &[c("Carol"), c("Alice"), c("Bob")]);
    }

    #[test]
    fn favorite_remove_is_exact_match() {
        let mut favorites = FavoriteSet::new();
        favorites.toggle(&c("Alice"));
        assert_eq!(favorites.remove(&c("alice")), 0);
        assert_eq!(favorites.remove(&c("Alice")), 1);
    }
}
