//! StepStatus enum for the progress indicator of each quiz step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress classification of one step relative to the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Active,
    #[default]
    Upcoming,
}

impl StepStatus {
    /// Classifies the step at `index` given the current step index.
    ///
    /// Steps before `current` are completed, `current` is active, and
    /// everything after is upcoming.
    pub fn classify(index: usize, current: usize) -> Self {
        use std::cmp::Ordering::*;
        match index.cmp(&current) {
            Less => StepStatus::Completed,
            Equal => StepStatus::Active,
            Greater => StepStatus::Upcoming,
        }
    }

    /// Returns true if the step is done.
    pub fn is_completed(&self) -> bool {
        matches!(self, StepStatus::Completed)
    }

    /// Returns true if this is the step being shown.
    pub fn is_active(&self) -> bool {
        matches!(self, StepStatus::Active)
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepStatus::Completed => "completed",
            StepStatus::Active => "active",
            StepStatus::Upcoming => "upcoming",
        };
        write!(f, "{}", s)
    }
}
