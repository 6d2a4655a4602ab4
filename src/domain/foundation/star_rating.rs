//! StarRating value object (0-5 scale, fractional).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::ValidationError;

/// Editorial rating of a casino, between 0.0 and 5.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct StarRating(f64);

impl StarRating {
    /// Highest possible rating.
    pub const MAX: f64 = 5.0;

    /// Creates a StarRating, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range("rating", 0.0, Self::MAX, value));
        }
        // -0.0 + 0.0 is 0.0, keeping Ord consistent with PartialEq
        Ok(Self(value + 0.0))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Eq for StarRating {}

impl PartialOrd for StarRating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StarRating {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for StarRating {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        StarRating::try_new(value)
    }
}

impl From<StarRating> for f64 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / 5", self.0)
    }
}
