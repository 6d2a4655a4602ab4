//! Quiz module - Step definitions and the step sequencer.
//!
//! The sequencer is self-contained: it knows nothing about casinos or scoring,
//! only about steps, options and the answers collected for them.

mod answers;
mod events;
mod progress;
mod sequencer;
pub(crate) mod step;

pub use answers::Answers;
pub use events::QuizEvent;
pub use progress::{QuizProgress, StepProgress};
pub use sequencer::{CurrentStep, SelectOutcome, StepSequencer};
pub use step::{QuizOption, Step, StepSequence};
