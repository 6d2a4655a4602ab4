//! PayoutSpeed value object (ordinal scale, fastest first).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// How quickly a casino pays out winnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PayoutSpeed {
    #[serde(rename = "instant")]
    Instant = 0,
    #[serde(rename = "1-2-days")]
    OneToTwoDays = 1,
    #[serde(rename = "up-to-1-week")]
    UpToOneWeek = 2,
}

impl PayoutSpeed {
    /// All speeds, fastest first.
    pub const SCALE: [PayoutSpeed; 3] = [
        PayoutSpeed::Instant,
        PayoutSpeed::OneToTwoDays,
        PayoutSpeed::UpToOneWeek,
    ];

    /// Returns the position on the scale (0 = fastest).
    pub fn ordinal(&self) -> i8 {
        *self as i8
    }

    /// Returns how many steps slower `self` is than `requested`.
    ///
    /// Zero or negative means `self` is at least as fast.
    pub fn steps_slower_than(&self, requested: PayoutSpeed) -> i8 {
        self.ordinal() - requested.ordinal()
    }

    /// Returns the wire value used in configuration and answers.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutSpeed::Instant => "instant",
            PayoutSpeed::OneToTwoDays => "1-2-days",
            PayoutSpeed::UpToOneWeek => "up-to-1-week",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            PayoutSpeed::Instant => "Instant",
            PayoutSpeed::OneToTwoDays => "1-2 Days",
            PayoutSpeed::UpToOneWeek => "Up to 1 Week",
        }
    }
}

impl FromStr for PayoutSpeed {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PayoutSpeed::SCALE
            .iter()
            .find(|speed| speed.as_str() == s)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "payout_speed",
                    format!("'{}' is not one of instant, 1-2-days, up-to-1-week", s),
                )
            })
    }
}

impl fmt::Display for PayoutSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
