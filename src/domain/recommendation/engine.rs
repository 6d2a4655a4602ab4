//! Recommendation Engine - Score, rank, filter and truncate the catalog.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::domain::foundation::PayoutSpeed;
use crate::domain::quiz::Answers;

use super::{Casino, Catalog, Criterion, MatchScore, ScoredCasino, Shortlist};

/// Per-criterion contribution to a casino's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionScore {
    pub criterion: Criterion,
    pub score: MatchScore,
}

/// Casino ranking functions.
///
/// Everything here is a pure function of `(catalog, answers)`: no state is
/// kept between calls and inputs are never modified.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Produces the shortlist for a set of answers.
    ///
    /// # Algorithm
    /// 1. Score every casino (see [`RecommendationEngine::score_casino`]).
    /// 2. Sort by score descending, then rating descending, then catalog order.
    /// 3. Drop casinos scoring zero.
    /// 4. Keep the first [`Shortlist::LIMIT`].
    ///
    /// # Edge Cases
    /// - No answers: every casino scores 0, shortlist is empty
    /// - Fewer than three matches: shortlist is not padded
    /// - Empty catalog: shortlist is empty
    pub fn score(catalog: &Catalog, answers: &Answers) -> Shortlist {
        let entries: Vec<ScoredCasino> = Self::rank(catalog, answers)
            .into_iter()
            .filter(|(_, score)| !score.is_zero())
            .take(Shortlist::LIMIT)
            .map(|(casino, score)| ScoredCasino {
                casino: casino.clone(),
                score,
            })
            .collect();

        debug!(
            catalog = catalog.len(),
            answers = answers.len(),
            matches = entries.len(),
            "Scored catalog"
        );

        Shortlist::new(entries)
    }

    /// Scores and sorts the whole catalog, zero scores included.
    pub fn rank<'a>(catalog: &'a Catalog, answers: &Answers) -> Vec<(&'a Casino, MatchScore)> {
        let mut scored: Vec<_> = catalog
            .iter()
            .map(|casino| (casino, Self::score_casino(casino, answers)))
            .collect();

        // sort_by is stable, so equal score and rating keep catalog order
        scored.sort_by(|(a, a_score), (b, b_score)| {
            b_score
                .cmp(a_score)
                .then_with(|| b.rating.cmp(&a.rating))
        });

        scored
    }

    /// Total score of one casino, 0 to 100.
    pub fn score_casino(casino: &Casino, answers: &Answers) -> MatchScore {
        Self::breakdown(casino, answers)
            .iter()
            .map(|c| c.score)
            .sum()
    }

    /// Contribution of each criterion to a casino's score.
    pub fn breakdown(casino: &Casino, answers: &Answers) -> [CriterionScore; 4] {
        Criterion::ALL.map(|criterion| CriterionScore {
            criterion,
            score: Self::criterion_score(criterion, casino, answers),
        })
    }

    /// Score for a single criterion.
    ///
    /// Membership criteria award full weight when the answer is in the
    /// casino's set. Payout awards full weight when the casino is at least as
    /// fast as requested, half weight when exactly one step slower, otherwise 0.
    /// A missing answer always contributes 0.
    pub fn criterion_score(criterion: Criterion, casino: &Casino, answers: &Answers) -> MatchScore {
        let Some(answer) = answers.get(criterion.step_id()) else {
            return MatchScore::ZERO;
        };

        let matched = match criterion {
            Criterion::CasinoType => casino.types.contains(answer),
            Criterion::Game => casino.games.contains(answer),
            Criterion::Banking => casino.banking.contains(answer),
            Criterion::Payout => return Self::payout_score(casino.payout_speed, answer),
        };

        if matched {
            criterion.weight()
        } else {
            MatchScore::ZERO
        }
    }

    fn payout_score(offered: PayoutSpeed, answer: &str) -> MatchScore {
        let requested = match answer.parse::<PayoutSpeed>() {
            Ok(speed) => speed,
            Err(err) => {
                warn!(answer, error = %err, "Unrecognised payout answer");
                return MatchScore::ZERO;
            }
        };

        let weight = Criterion::Payout.weight();
        match offered.steps_slower_than(requested).cmp(&1) {
            Ordering::Less => weight,
            Ordering::Equal => weight.halved(),
            Ordering::Greater => MatchScore::ZERO,
        }
    }
}
