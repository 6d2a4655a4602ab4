//! Scoring criteria and the match score they add up to.

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Add;

/// One scoring dimension, tied to the quiz step that answers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    CasinoType,
    Game,
    Banking,
    Payout,
}

impl Criterion {
    /// All criteria in weight order.
    pub const ALL: [Criterion; 4] = [
        Criterion::CasinoType,
        Criterion::Game,
        Criterion::Banking,
        Criterion::Payout,
    ];

    /// Returns the id of the quiz step that answers this criterion.
    pub fn step_id(&self) -> &'static str {
        match self {
            Criterion::CasinoType => "casino-type",
            Criterion::Game => "game",
            Criterion::Banking => "banking",
            Criterion::Payout => "payout",
        }
    }

    /// Returns the full weight of this criterion.
    pub fn weight(&self) -> MatchScore {
        match self {
            Criterion::CasinoType => MatchScore::from_half_points(80),
            Criterion::Game => MatchScore::from_half_points(50),
            Criterion::Banking => MatchScore::from_half_points(40),
            Criterion::Payout => MatchScore::from_half_points(30),
        }
    }

    /// Returns the criterion answered by the given step id.
    pub fn for_step(step_id: &str) -> Option<Criterion> {
        Criterion::ALL.iter().find(|c| c.step_id() == step_id).copied()
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.step_id())
    }
}

/// A match score between 0 and 100, in steps of 2.5.
///
/// Stored as whole half-points so the 7.5 payout partial credit stays exact
/// and scores can be compared and sorted without floating point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchScore(u16);

impl MatchScore {
    /// No match on any criterion.
    pub const ZERO: Self = Self(0);

    /// Match on every criterion.
    pub const MAX: Self = Self(200);

    /// Creates a score from half-points (e.g. 15 is 7.5).
    pub const fn from_half_points(half_points: u16) -> Self {
        Self(half_points)
    }

    /// Returns the score in half-points.
    pub fn half_points(&self) -> u16 {
        self.0
    }

    /// Returns half of this score, rounded down to the nearest half-point.
    pub fn halved(&self) -> Self {
        Self(self.0 / 2)
    }

    /// Returns the numeric score.
    pub fn value(&self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Returns true if nothing matched.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for MatchScore {
    type Output = MatchScore;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::iter::Sum for MatchScore {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MatchScore::ZERO, Add::add)
    }
}

impl Serialize for MatchScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one_hundred() {
        let total: MatchScore = Criterion::ALL.iter().map(|c| c.weight()).sum();
        assert_eq!(total, MatchScore::MAX);
        assert_eq!(total.value(), 100.0);
    }

    #[test]
    fn weights_match_published_values() {
        assert_eq!(Criterion::CasinoType.weight().value(), 40.0);
        assert_eq!(Criterion::Game.weight().value(), 25.0);
        assert_eq!(Criterion::Banking.weight().value(), 20.0);
        assert_eq!(Criterion::Payout.weight().value(), 15.0);
    }

    #[test]
    fn payout_half_weight_is_seven_and_a_half() {
        assert_eq!(Criterion::Payout.weight().halved().value(), 7.5);
    }

    #[test]
    fn for_step_maps_step_ids() {
        assert_eq!(Criterion::for_step("casino-type"), Some(Criterion::CasinoType));
        assert_eq!(Criterion::for_step("payout"), Some(Criterion::Payout));
        assert_eq!(Criterion::for_step("colour"), None);
    }

    #[test]
    fn display_handles_half_points() {
        assert_eq!(MatchScore::from_half_points(95).to_string(), "47.5");
        assert_eq!(MatchScore::from_half_points(120).to_string(), "60");
        assert_eq!(MatchScore::ZERO.to_string(), "0");
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&MatchScore::from_half_points(15)).unwrap();
        assert_eq!(json, "7.5");
    }
}
