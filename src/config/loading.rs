//! Loading sequence configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::LoadingSequenceConfig;

/// Staged loading messages shown before results
#[derive(Debug, Clone, Deserialize)]
pub struct LoadingConfig {
    /// Messages shown in order
    #[serde(default = "default_messages")]
    pub messages: Vec<String>,

    /// Pause after each message, in milliseconds
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,

    /// Pause used instead when reduced motion is requested
    #[serde(default = "default_reduced_motion_delay_ms")]
    pub reduced_motion_delay_ms: u64,

    /// Whether the user prefers reduced motion
    #[serde(default)]
    pub reduced_motion: bool,
}

impl LoadingConfig {
    /// The delay that applies given the reduced motion preference
    pub fn effective_delay(&self) -> Duration {
        let ms = if self.reduced_motion {
            self.reduced_motion_delay_ms
        } else {
            self.step_delay_ms
        };
        Duration::from_millis(ms)
    }

    /// Build the adapter configuration
    pub fn sequence_config(&self) -> LoadingSequenceConfig {
        LoadingSequenceConfig::default()
            .with_messages(self.messages.iter().cloned())
            .with_step_delay(self.effective_delay())
    }

    /// Validate loading configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.step_delay_ms == 0 {
            return Err(ValidationError::InvalidStepDelay);
        }
        if self.reduced_motion && self.reduced_motion_delay_ms > self.step_delay_ms {
            return Err(ValidationError::ReducedMotionDelayTooLong);
        }
        Ok(())
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            messages: default_messages(),
            step_delay_ms: default_step_delay_ms(),
            reduced_motion_delay_ms: default_reduced_motion_delay_ms(),
            reduced_motion: false,
        }
    }
}

fn default_messages() -> Vec<String> {
    LoadingSequenceConfig::default().messages
}

fn default_step_delay_ms() -> u64 {
    800
}

fn default_reduced_motion_delay_ms() -> u64 {
    200
}
