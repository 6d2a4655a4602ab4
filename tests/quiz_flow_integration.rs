//! End-to-end quiz flow through the public API.
//!
//! Loads the sample definition from `demos/`, plays the quiz the way the
//! terminal host does, and checks the resulting shortlist.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use casino_finder::adapters::{
    BuiltinDefinitionSource, FileDefinitionSource, LoadingOutcome, LoadingSequence,
    LoadingSequenceConfig,
};
use casino_finder::application::QuizSession;
use casino_finder::domain::foundation::{PayoutSpeed, StarRating, StepStatus};
use casino_finder::domain::quiz::{QuizEvent, SelectOutcome};
use casino_finder::domain::recommendation::{Casino, Catalog};
use casino_finder::ports::QuizDefinitionSource;

fn demo_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/quiz.yaml")
}

async fn demo_session() -> QuizSession {
    let definition = FileDefinitionSource::new(demo_path())
        .load()
        .await
        .expect("demo definition should load");
    QuizSession::new(Arc::new(definition))
}

fn answer(session: &mut QuizSession, value: &str) -> SelectOutcome {
    let step_id = session.current_step().step.id.to_string();
    session.select_option(&step_id, value)
}

// ───────────────────────────────────────────────────────────────
// Full runs
// ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn demo_definition_ranks_perfect_matches_by_rating() {
    let mut session = demo_session().await;

    for value in ["online", "slots", "crypto"] {
        assert!(matches!(answer(&mut session, value), SelectOutcome::Advanced { .. }));
    }
    assert_eq!(answer(&mut session, "instant"), SelectOutcome::Completed);

    let shortlist = session.recommend().expect("quiz is complete");
    assert_eq!(shortlist.names(), vec!["Lucky Harbor", "Chain Spin", "Velvet Table"]);

    let scores: Vec<f64> = shortlist.entries().iter().map(|e| e.score.value()).collect();
    assert_eq!(scores, vec![100.0, 100.0, 47.5]);
}

#[tokio::test]
async fn back_then_forward_keeps_prior_choice() {
    let mut session = demo_session().await;
    answer(&mut session, "sweepstakes");
    answer(&mut session, "slots");

    assert!(session.go_back());
    let current = session.current_step();
    assert_eq!(current.step.id.as_str(), "game");
    assert_eq!(current.selected, Some("slots"));

    answer(&mut session, "blackjack");
    assert_eq!(session.answers().get("game"), Some("blackjack"));
    assert_eq!(session.answers().get("casino-type"), Some("sweepstakes"));
}

#[tokio::test]
async fn reset_mid_quiz_starts_over() {
    let mut session = demo_session().await;
    answer(&mut session, "online");
    answer(&mut session, "slots");

    session.reset();

    assert_eq!(session.current_step().index, 0);
    assert!(session.answers().is_empty());
    let progress = session.progress();
    assert_eq!(progress.position(), (1, 5));
    assert_eq!(progress.status("casino-type"), Some(StepStatus::Active));
}

#[tokio::test]
async fn stale_selection_for_previous_step_is_ignored() {
    let mut session = demo_session().await;
    answer(&mut session, "online");

    let outcome = session.select_option("casino-type", "social");

    assert_eq!(outcome, SelectOutcome::Ignored);
    assert_eq!(session.answers().get("casino-type"), Some("online"));
    assert_eq!(session.current_step().index, 1);
}

#[tokio::test]
async fn events_trace_the_run() {
    let mut session = demo_session().await;
    for value in ["online", "slots", "crypto", "instant"] {
        answer(&mut session, value);
    }

    let events = session.take_events();

    assert!(matches!(
        events.last(),
        Some(QuizEvent::Completed { answer_count: 4 })
    ));
}

// ───────────────────────────────────────────────────────────────
// Built-in steps
// ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn builtin_steps_with_empty_catalog_yield_no_results() {
    let definition = BuiltinDefinitionSource::default().load().await.unwrap();
    let mut session = QuizSession::new(Arc::new(definition));

    for value in ["no-deposit", "live-dealer", "paypal", "up-to-1-week"] {
        answer(&mut session, value);
    }

    let shortlist = session.recommend().unwrap();
    assert!(shortlist.is_empty());
}

#[tokio::test]
async fn builtin_steps_with_host_catalog() {
    let catalog = Catalog::new(vec![Casino::new(
        "Harbor Social",
        StarRating::try_new(4.1).unwrap(),
        PayoutSpeed::OneToTwoDays,
    )
    .with_types(["social"])
    .with_banking(["paypal"])])
    .unwrap();
    let definition = BuiltinDefinitionSource::new(catalog).load().await.unwrap();
    let mut session = QuizSession::new(Arc::new(definition));

    for value in ["social", "slots", "paypal", "instant"] {
        answer(&mut session, value);
    }

    let top = session.recommend().unwrap().top().unwrap();
    assert_eq!(top.casino.name, "Harbor Social");
    assert_eq!(top.score.value(), 67.5);
}

// ───────────────────────────────────────────────────────────────
// Loading sequence
// ───────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn cancelled_loading_still_allows_recommendation() {
    let mut session = demo_session().await;
    for value in ["online", "slots", "crypto", "instant"] {
        answer(&mut session, value);
    }

    let loading = LoadingSequence::new(
        LoadingSequenceConfig::default().with_step_delay(Duration::from_millis(800)),
    );
    let (tx, rx) = watch::channel(false);
    let mut shown = 0;

    let (outcome, _) = tokio::join!(loading.run(rx, |_| shown += 1), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        tx.send(true).unwrap();
    });

    assert_eq!(outcome, LoadingOutcome::Cancelled);
    assert_eq!(shown, 1);
    assert_eq!(session.recommend().unwrap().len(), 3);
}
