//! Candidate display strings.

use serde::Deserialize;
use std::fmt;

/// A selectable entity from the user source list.
///
/// Opaque display string. Equality is exact string match (case-sensitive);
/// the data source does not guarantee uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Candidate(String);

impl Candidate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test against an already-lowercased needle.
    pub fn contains_lowercase(&self, needle_lower: &str) -> bool {
        self.0.to_lowercase().contains(needle_lower)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Candidate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Candidate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Candidate {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_exact_and_case_sensitive() {
        assert_eq!(Candidate::new("Alice"), Candidate::from("Alice"));
        assert_ne!(Candidate::new("Alice"), Candidate::new("alice"));
    }

    #[test]
    fn contains_lowercase_ignores_candidate_case() {
        let candidate = Candidate::new("ALICIA");
        assert!(candidate.contains_lowercase("lic"));
        assert!(!candidate.contains_lowercase("bob"));
    }

    #[test]
    fn deserializes_from_plain_json_string() {
        let parsed: Vec<Candidate> = serde_json::from_str(r#"["Alice","Bob"]"#).unwrap();
        assert_eq!(parsed, vec![Candidate::new("Alice"), Candidate::new("Bob")]);
    }

    #[test]
    fn display_is_raw_text() {
        assert_eq!(Candidate::new("Zoë").to_string(), "Zoë");
    }
}
