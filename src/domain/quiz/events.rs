//! Quiz domain events.

use crate::domain::foundation::StepId;
use serde::{Deserialize, Serialize};

/// Events recorded by the step sequencer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuizEvent {
    /// An option was recorded for a step.
    OptionSelected { step_id: StepId, value: String },

    /// The quiz moved on to the next step.
    Advanced { from_index: usize, to_index: usize },

    /// The last step was answered.
    Completed { answer_count: usize },

    /// The quiz moved back one step.
    WentBack { from_index: usize, to_index: usize },

    /// All answers were cleared and the quiz restarted.
    Reset,
}
