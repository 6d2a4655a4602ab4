//! QuizProgress value object - Progress indicator for a quiz session.
//!
//! A snapshot of where the player is: which steps are done, which one is
//! showing, and whether the trailing "best match" unit has been reached.

use serde::Serialize;

use crate::domain::foundation::{StepId, StepStatus};

use super::StepSequence;

/// Progress entry for one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    pub step_id: StepId,
    pub title: String,
    pub status: StepStatus,
}

/// A read-only snapshot of quiz progress.
///
/// `total_units` is the number of steps plus one trailing result unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizProgress {
    steps: Vec<StepProgress>,
    result_status: StepStatus,
    display_index: usize,
    total_units: usize,
    completed_segments: usize,
}

impl QuizProgress {
    /// Progress while the step at `current_index` is showing.
    pub fn at_step(sequence: &StepSequence, current_index: usize) -> Self {
        Self::build(sequence, |i| StepStatus::classify(i, current_index), false, current_index)
    }

    /// Progress once the quiz is complete and results are being shown.
    pub fn showing_results(sequence: &StepSequence) -> Self {
        Self::build(sequence, |_| StepStatus::Completed, true, sequence.len())
    }

    fn build(
        sequence: &StepSequence,
        classify: impl Fn(usize) -> StepStatus,
        show_results: bool,
        completed_segments: usize,
    ) -> Self {
        let steps = sequence
            .iter()
            .enumerate()
            .map(|(i, step)| StepProgress {
                step_id: step.id.clone(),
                title: step.title.clone(),
                status: classify(i),
            })
            .collect();

        let total_units = sequence.len() + 1;
        let (result_status, display_index) = if show_results {
            (StepStatus::Active, total_units)
        } else {
            (StepStatus::Upcoming, completed_segments + 1)
        };

        Self {
            steps,
            result_status,
            display_index,
            total_units,
            completed_segments,
        }
    }

    /// Returns the per-step entries in quiz order.
    pub fn steps(&self) -> &[StepProgress] {
        &self.steps
    }

    /// Returns the status of a specific step.
    pub fn status(&self, step_id: &str) -> Option<StepStatus> {
        self.steps
            .iter()
            .find(|s| s.step_id == step_id)
            .map(|s| s.status)
    }

    /// Returns the status of the trailing result unit.
    pub fn result_status(&self) -> StepStatus {
        self.result_status
    }

    /// Returns the 1-based position shown to the player.
    pub fn display_index(&self) -> usize {
        self.display_index
    }

    /// Returns the step count plus the result unit.
    pub fn total_units(&self) -> usize {
        self.total_units
    }

    /// Returns `(display_index, total_units)`.
    pub fn position(&self) -> (usize, usize) {
        (self.display_index, self.total_units)
    }

    /// Returns the number of completed steps.
    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.status.is_completed()).count()
    }

    /// Returns how far along the bar is filled, 0.0 to 100.0.
    pub fn percent(&self) -> f64 {
        (self.completed_segments as f64 / (self.total_units - 1) as f64) * 100.0
    }
}
