//! Recommendation module - Pure scoring and ranking of the casino catalog.
//!
//! # Components
//!
//! - `Casino` / `Catalog` - The entities being ranked
//! - `Criterion` / `MatchScore` - The four weighted criteria and their sum
//! - `RecommendationEngine` - Score, sort, filter, truncate
//! - `Shortlist` - Up to three ranked casinos
//!
//! Depends only on the answers collected by the quiz; never on sequencer state.

mod casino;
mod criterion;
mod engine;
mod shortlist;

pub use casino::{Casino, CasinoDisplay, Catalog};
pub use criterion::{Criterion, MatchScore};
pub use engine::{CriterionScore, RecommendationEngine};
pub use shortlist::{ScoredCasino, Shortlist};
