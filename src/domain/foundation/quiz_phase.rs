//! QuizPhase enum for the lifecycle of a quiz session.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Whether the quiz is still collecting answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    #[default]
    InProgress,
    Complete,
}

impl QuizPhase {
    /// Returns true while steps are still being answered.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, QuizPhase::InProgress)
    }

    /// Returns true once the last step has been answered.
    pub fn is_complete(&self) -> bool {
        matches!(self, QuizPhase::Complete)
    }
}

impl StateMachine for QuizPhase {
    /// Valid transitions:
    /// - InProgress -> Complete (last step answered)
    /// - Complete -> InProgress (reset)
    fn can_transition_to(&self, target: &Self) -> bool {
        use QuizPhase::*;
        matches!((self, target), (InProgress, Complete) | (Complete, InProgress))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            QuizPhase::InProgress => vec![QuizPhase::Complete],
            QuizPhase::Complete => vec![QuizPhase::InProgress],
        }
    }
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizPhase::InProgress => "In Progress",
            QuizPhase::Complete => "Complete",
        };
        write!(f, "{}", s)
    }
}
