//! Application layer - Session orchestration.
//!
//! Wires the step sequencer to the recommendation engine for a single player.
//! Hosts drive a [`QuizSession`] and render whatever it reports.

mod quiz_session;

pub use quiz_session::QuizSession;
