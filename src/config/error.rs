//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Loading step delay must be greater than zero")]
    InvalidStepDelay,

    #[error("Reduced motion delay must not exceed the step delay")]
    ReducedMotionDelayTooLong,

    #[error("Display text must not be empty: {0}")]
    EmptyDisplayText(&'static str),

    #[error("Definition file must be .json, .yaml or .yml: {0}")]
    UnsupportedDefinitionFormat(String),
}
