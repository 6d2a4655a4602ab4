//! Loading Sequence - Staged messages shown while results are "prepared".
//!
//! Purely cosmetic. Each message is emitted, then the sequence waits for the
//! configured delay. A watch channel lets the host cancel it at any point,
//! for example when the user resets the quiz mid-sequence.

use std::time::Duration;
use tokio::sync::watch;
use tokio::time;
use tracing::debug;

/// How a loading sequence ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingOutcome {
    /// Every message was shown and every delay elapsed.
    Finished,
    /// The cancel signal fired first.
    Cancelled,
}

/// Configuration for the loading sequence.
#[derive(Debug, Clone)]
pub struct LoadingSequenceConfig {
    /// Messages shown in order.
    pub messages: Vec<String>,
    /// Pause after each message.
    pub step_delay: Duration,
}

impl Default for LoadingSequenceConfig {
    fn default() -> Self {
        Self {
            messages: vec![
                "Analyzing your preferences...".to_string(),
                "Comparing casinos...".to_string(),
                "Finding your best matches...".to_string(),
            ],
            step_delay: Duration::from_millis(800),
        }
    }
}

impl LoadingSequenceConfig {
    /// Set the messages.
    pub fn with_messages<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages = messages.into_iter().map(Into::into).collect();
        self
    }

    /// Set the per-message delay.
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Total time the sequence takes when not cancelled.
    pub fn total_duration(&self) -> Duration {
        self.step_delay * self.messages.len() as u32
    }
}

/// Runs the staged loading messages.
#[derive(Debug, Clone, Default)]
pub struct LoadingSequence {
    config: LoadingSequenceConfig,
}

impl LoadingSequence {
    /// Create a sequence with the given configuration.
    pub fn new(config: LoadingSequenceConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &LoadingSequenceConfig {
        &self.config
    }

    /// Emit each message through `on_message`, pausing between them.
    ///
    /// Returns [`LoadingOutcome::Cancelled`] as soon as `cancel` holds `true`.
    /// A dropped sender is not a cancellation; the sequence runs to the end.
    pub async fn run<F>(&self, mut cancel: watch::Receiver<bool>, mut on_message: F) -> LoadingOutcome
    where
        F: FnMut(&str),
    {
        for message in &self.config.messages {
            if *cancel.borrow() {
                debug!("Loading sequence cancelled before message");
                return LoadingOutcome::Cancelled;
            }
            on_message(message);

            let delay = time::sleep(self.config.step_delay);
            tokio::pin!(delay);

            loop {
                tokio::select! {
                    _ = &mut delay => break,

                    changed = cancel.changed() => {
                        match changed {
                            Ok(()) if *cancel.borrow() => {
                                debug!("Loading sequence cancelled");
                                return LoadingOutcome::Cancelled;
                            }
                            Ok(()) => {}
                            Err(_) => {
                                (&mut delay).await;
                                break;
                            }
                        }
                    }
                }
            }
        }
        LoadingOutcome::Finished
    }
}
