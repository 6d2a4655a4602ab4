//! QuizSession - One player's run through the quiz.
//!
//! Owns the sequencer and the last computed shortlist. The definition is
//! shared read-only between sessions.

use std::sync::Arc;

use tracing::info;

use crate::domain::definition::QuizDefinition;
use crate::domain::quiz::{
    Answers, CurrentStep, QuizEvent, QuizProgress, SelectOutcome, StepSequencer,
};
use crate::domain::recommendation::{RecommendationEngine, Shortlist};

/// A single player's quiz session.
#[derive(Debug, Clone)]
pub struct QuizSession {
    definition: Arc<QuizDefinition>,
    sequencer: StepSequencer,
    results: Option<Shortlist>,
}

impl QuizSession {
    /// Start a session at the first step.
    pub fn new(definition: Arc<QuizDefinition>) -> Self {
        let sequencer = StepSequencer::new(definition.steps().clone());
        Self {
            definition,
            sequencer,
            results: None,
        }
    }

    pub fn definition(&self) -> &QuizDefinition {
        &self.definition
    }

    pub fn current_step(&self) -> CurrentStep<'_> {
        self.sequencer.current_step()
    }

    pub fn answers(&self) -> &Answers {
        self.sequencer.answers()
    }

    pub fn progress(&self) -> QuizProgress {
        self.sequencer.progress()
    }

    pub fn is_complete(&self) -> bool {
        self.sequencer.is_complete()
    }

    pub fn can_go_back(&self) -> bool {
        self.sequencer.can_go_back()
    }

    /// Shortlist from the last [`QuizSession::recommend`] call, if any.
    pub fn results(&self) -> Option<&Shortlist> {
        self.results.as_ref()
    }

    /// Number of casinos considered, for the results intro text.
    pub fn catalog_size(&self) -> usize {
        self.definition.catalog().len()
    }

    pub fn select_option(&mut self, step_id: &str, value: &str) -> SelectOutcome {
        self.sequencer.select_option(step_id, value)
    }

    /// Select by 0-based option position on the current step.
    pub fn select_index(&mut self, option_index: usize) -> SelectOutcome {
        let current = self.sequencer.current_step();
        let Some(option) = current.step.options.get(option_index) else {
            return SelectOutcome::Ignored;
        };
        let (step_id, value) = (current.step.id.to_string(), option.value.clone());
        self.sequencer.select_option(&step_id, &value)
    }

    pub fn go_back(&mut self) -> bool {
        self.sequencer.go_back()
    }

    /// Start over. Any shortlist already computed is discarded.
    pub fn reset(&mut self) {
        self.sequencer.reset();
        self.results = None;
    }

    /// Score the catalog against the collected answers.
    ///
    /// Returns `None` while the quiz is still in progress. Calling it again
    /// with the same answers yields the same shortlist.
    pub fn recommend(&mut self) -> Option<&Shortlist> {
        if !self.sequencer.is_complete() {
            return None;
        }
        let shortlist =
            RecommendationEngine::score(self.definition.catalog(), self.sequencer.answers());
        info!(
            matches = shortlist.len(),
            top = shortlist.top().map(|s| s.casino.name.as_str()).unwrap_or("-"),
            "Recommendations ready"
        );
        self.results = Some(shortlist);
        self.results.as_ref()
    }

    /// Drains events recorded by the sequencer.
    pub fn take_events(&mut self) -> Vec<QuizEvent> {
        self.sequencer.take_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PayoutSpeed, StarRating, StepStatus};
    use crate::domain::quiz::step::test_support::step;
    use crate::domain::quiz::StepSequence;
    use crate::domain::recommendation::{Casino, Catalog};

    fn definition() -> Arc<QuizDefinition> {
        let steps = StepSequence::new(vec![
            step("casino-type", &["online", "sweepstakes"]),
            step("game", &["slots", "blackjack"]),
            step("payout", &["instant", "1-2-days", "up-to-1-week"]),
        ])
        .unwrap();
        let casinos = Catalog::new(vec![
            Casino::new("Fast Spins", StarRating::try_new(4.0).unwrap(), PayoutSpeed::Instant)
                .with_types(["online"])
                .with_games(["slots"]),
            Casino::new("Card Room", StarRating::try_new(4.8).unwrap(), PayoutSpeed::UpToOneWeek)
                .with_types(["sweepstakes"])
                .with_games(["blackjack"]),
        ])
        .unwrap();
        Arc::new(QuizDefinition::new(steps, casinos).unwrap())
    }

    fn answer_all(session: &mut QuizSession, values: &[&str]) {
        for value in values {
            let id = session.current_step().step.id.to_string();
            session.select_option(&id, value);
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Flow
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn recommend_is_unavailable_until_complete() {
        let mut session = QuizSession::new(definition());
        answer_all(&mut session, &["online"]);

        assert!(session.recommend().is_none());
        assert!(session.results().is_none());
    }

    #[test]
    fn full_run_produces_ranked_shortlist() {
        let mut session = QuizSession::new(definition());
        answer_all(&mut session, &["online", "slots", "instant"]);

        let names = session.recommend().unwrap().names();

        assert_eq!(names, vec!["Fast Spins"]);
        assert_eq!(session.results().unwrap().top().unwrap().score.value(), 80.0);
    }

    #[test]
    fn recommend_twice_is_idempotent() {
        let mut session = QuizSession::new(definition());
        answer_all(&mut session, &["sweepstakes", "blackjack", "1-2-days"]);

        let first = session.recommend().cloned();
        let second = session.recommend().cloned();

        assert_eq!(first, second);
    }

    #[test]
    fn reset_discards_results() {
        let mut session = QuizSession::new(definition());
        answer_all(&mut session, &["online", "slots", "instant"]);
        session.recommend();

        session.reset();

        assert!(session.results().is_none());
        assert!(!session.is_complete());
        assert!(session.answers().is_empty());
        assert_eq!(session.current_step().index, 0);
    }

    #[test]
    fn select_index_picks_option_by_position() {
        let mut session = QuizSession::new(definition());

        let outcome = session.select_index(1);

        assert_eq!(outcome, SelectOutcome::Advanced { step_index: 1 });
        assert_eq!(session.answers().get("casino-type"), Some("sweepstakes"));
    }

    #[test]
    fn select_index_out_of_range_is_ignored() {
        let mut session = QuizSession::new(definition());

        assert_eq!(session.select_index(9), SelectOutcome::Ignored);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn progress_shows_results_unit_after_completion() {
        let mut session = QuizSession::new(definition());
        answer_all(&mut session, &["online", "slots", "instant"]);

        let progress = session.progress();

        assert_eq!(progress.result_status(), StepStatus::Active);
        assert_eq!(progress.display_index(), 4);
        assert_eq!(progress.total_units(), 4);
    }

    #[test]
    fn catalog_size_reports_all_casinos() {
        let session = QuizSession::new(definition());
        assert_eq!(session.catalog_size(), 2);
    }

    #[test]
    fn events_are_forwarded_from_sequencer() {
        let mut session = QuizSession::new(definition());
        answer_all(&mut session, &["online"]);

        let events = session.take_events();

        assert!(matches!(events[0], QuizEvent::OptionSelected { .. }));
        assert!(session.take_events().is_empty());
    }
}
