//! Shortlist - The ranked output of the recommendation engine.

use serde::Serialize;

use super::{Casino, MatchScore};

/// A casino together with the score it earned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCasino {
    pub casino: Casino,
    pub score: MatchScore,
}

/// Ranked casinos, best first, at most [`Shortlist::LIMIT`] long.
///
/// An empty shortlist means scoring ran and nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Shortlist {
    entries: Vec<ScoredCasino>,
}

impl Shortlist {
    /// Maximum number of casinos recommended.
    pub const LIMIT: usize = 3;

    pub(crate) fn new(entries: Vec<ScoredCasino>) -> Self {
        Self { entries }
    }

    /// Returns the ranked entries.
    pub fn entries(&self) -> &[ScoredCasino] {
        &self.entries
    }

    /// Returns the ranked casinos.
    pub fn casinos(&self) -> impl Iterator<Item = &Casino> {
        self.entries.iter().map(|e| &e.casino)
    }

    /// Returns the names of the ranked casinos.
    pub fn names(&self) -> Vec<&str> {
        self.casinos().map(|c| c.name.as_str()).collect()
    }

    /// Returns the best match, if any.
    pub fn top(&self) -> Option<&ScoredCasino> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no casino matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
