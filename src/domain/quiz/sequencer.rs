//! StepSequencer - The state machine that walks a player through the quiz.
//!
//! The sequencer owns the current step index and the collected answers. Every
//! transition either fully applies or is a no-op: stale or duplicate UI events
//! (answering a step that is no longer showing, going back from the first
//! step) are ignored rather than reported as errors.

use tracing::{debug, info};

use crate::domain::foundation::{QuizPhase, StateMachine};

use super::{Answers, QuizEvent, QuizProgress, Step, StepSequence};

/// Result of [`StepSequencer::select_option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The event did not apply to the current state; nothing changed.
    Ignored,
    /// The answer was stored and the quiz moved to `step_index`.
    Advanced { step_index: usize },
    /// The answer was stored for the last step; the quiz is complete.
    Completed,
}

impl SelectOutcome {
    /// Returns true if this selection completed the quiz.
    pub fn is_complete(&self) -> bool {
        matches!(self, SelectOutcome::Completed)
    }

    /// Returns true if the selection changed state.
    pub fn was_applied(&self) -> bool {
        !matches!(self, SelectOutcome::Ignored)
    }
}

/// The step currently shown, with the value already chosen for it (if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentStep<'a> {
    pub index: usize,
    pub step: &'a Step,
    pub selected: Option<&'a str>,
}

/// Quiz progress state for one session.
#[derive(Debug, Clone)]
pub struct StepSequencer {
    steps: StepSequence,
    current_index: usize,
    answers: Answers,
    phase: QuizPhase,
    domain_events: Vec<QuizEvent>,
}

impl StepSequencer {
    /// Starts a new quiz at the first step.
    pub fn new(steps: StepSequence) -> Self {
        Self {
            steps,
            current_index: 0,
            answers: Answers::new(),
            phase: QuizPhase::InProgress,
            domain_events: Vec::new(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Returns the configured steps.
    pub fn steps(&self) -> &StepSequence {
        &self.steps
    }

    /// Returns the current step index.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the answers collected so far.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Returns the quiz phase.
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Returns true once the last step has been answered.
    pub fn is_complete(&self) -> bool {
        self.phase.is_complete()
    }

    /// Returns the step to render and its previously selected value.
    pub fn current_step(&self) -> CurrentStep<'_> {
        // current_index is kept within [0, len - 1] by every transition
        let step = &self.steps[self.current_index];
        CurrentStep {
            index: self.current_index,
            step,
            selected: self.answers.get(step.id.as_str()),
        }
    }

    /// Returns true if a "go back" affordance should be offered.
    pub fn can_go_back(&self) -> bool {
        self.phase.is_in_progress() && self.current_index > 0
    }

    /// Returns the progress indicator snapshot.
    pub fn progress(&self) -> QuizProgress {
        match self.phase {
            QuizPhase::InProgress => QuizProgress::at_step(&self.steps, self.current_index),
            QuizPhase::Complete => QuizProgress::showing_results(&self.steps),
        }
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<QuizEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Transitions
    // ───────────────────────────────────────────────────────────────

    /// Records `value` for `step_id` and advances.
    ///
    /// Ignored when the quiz is complete, when `step_id` is not the current
    /// step, or when `value` is not one of the current step's options.
    pub fn select_option(&mut self, step_id: &str, value: &str) -> SelectOutcome {
        if self.phase.is_complete() {
            debug!(step_id, "Ignoring selection after quiz completion");
            return SelectOutcome::Ignored;
        }

        let current = self.current_step().step;
        if current.id != step_id {
            debug!(
                step_id,
                current = %current.id,
                "Ignoring selection for non-current step"
            );
            return SelectOutcome::Ignored;
        }
        if !current.has_option(value) {
            debug!(step_id, value, "Ignoring unknown option value");
            return SelectOutcome::Ignored;
        }

        let id = current.id.clone();
        self.answers.set(id.clone(), value.to_string());
        self.record_event(QuizEvent::OptionSelected {
            step_id: id,
            value: value.to_string(),
        });

        if self.current_index == self.steps.last_index() {
            if self.phase.can_transition_to(&QuizPhase::Complete) {
                self.phase = QuizPhase::Complete;
            }
            info!(answers = self.answers.len(), "Quiz complete");
            self.record_event(QuizEvent::Completed {
                answer_count: self.answers.len(),
            });
            return SelectOutcome::Completed;
        }

        let from_index = self.current_index;
        self.current_index += 1;
        self.record_event(QuizEvent::Advanced {
            from_index,
            to_index: self.current_index,
        });

        SelectOutcome::Advanced {
            step_index: self.current_index,
        }
    }

    /// Moves back one step, keeping the answer recorded for it.
    ///
    /// Returns false (and changes nothing) on the first step or after completion.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            debug!(
                index = self.current_index,
                phase = %self.phase,
                "Ignoring go back"
            );
            return false;
        }

        let from_index = self.current_index;
        self.current_index -= 1;
        self.record_event(QuizEvent::WentBack {
            from_index,
            to_index: self.current_index,
        });
        true
    }

    /// Clears all answers and returns to the first step, from any state.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.current_index = 0;
        self.phase = QuizPhase::InProgress;
        self.record_event(QuizEvent::Reset);
    }

    fn record_event(&mut self, event: QuizEvent) {
        self.domain_events.push(event);
    }
}
