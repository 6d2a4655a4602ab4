//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CASINO_FINDER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use casino_finder::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("{}", config.display.results_intro_for(12));
//! ```

mod display;
mod error;
mod features;
mod loading;
mod quiz;

pub use display::DisplayConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use loading::LoadingConfig;
pub use quiz::QuizConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// quiz with the built-in steps.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Where steps and casinos come from
    #[serde(default)]
    pub quiz: QuizConfig,

    /// Staged loading messages
    #[serde(default)]
    pub loading: LoadingConfig,

    /// Result screen text
    #[serde(default)]
    pub display: DisplayConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CASINO_FINDER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CASINO_FINDER__QUIZ__DEFINITION_PATH=quiz.yaml` -> `quiz.definition_path`
    /// - `CASINO_FINDER__LOADING__MESSAGES=One|Two` -> `loading.messages = ["One", "Two"]`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CASINO_FINDER")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator("|")
                    .with_list_parse_key("loading.messages"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.quiz.validate()?;
        self.loading.validate()?;
        self.display.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;
    use std::time::Duration;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const KEYS: &[&str] = &[
        "CASINO_FINDER__QUIZ__DEFINITION_PATH",
        "CASINO_FINDER__LOADING__MESSAGES",
        "CASINO_FINDER__LOADING__STEP_DELAY_MS",
        "CASINO_FINDER__LOADING__REDUCED_MOTION",
        "CASINO_FINDER__DISPLAY__RESULTS_INTRO",
        "CASINO_FINDER__FEATURES__SKIP_LOADING_SEQUENCE",
    ];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(config.quiz.definition_path.is_none());
        assert_eq!(config.loading.step_delay_ms, 800);
        assert!(!config.features.skip_loading_sequence);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("CASINO_FINDER__QUIZ__DEFINITION_PATH", "demos/quiz.yaml");
        env::set_var("CASINO_FINDER__LOADING__STEP_DELAY_MS", "400");
        env::set_var("CASINO_FINDER__LOADING__REDUCED_MOTION", "true");
        env::set_var("CASINO_FINDER__FEATURES__SKIP_LOADING_SEQUENCE", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.quiz.definition_path.as_deref(),
            Some(std::path::Path::new("demos/quiz.yaml"))
        );
        assert_eq!(config.loading.step_delay_ms, 400);
        assert_eq!(config.loading.effective_delay(), Duration::from_millis(200));
        assert!(config.features.skip_loading_sequence);
    }

    #[test]
    fn test_loading_messages_split_on_pipe() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("CASINO_FINDER__LOADING__MESSAGES", "Shuffling...|Dealing...");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.loading.messages, vec!["Shuffling...", "Dealing..."]);
    }

    #[test]
    fn test_validate_rejects_blank_intro() {
        let config = AppConfig {
            display: DisplayConfig {
                results_intro: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::EmptyDisplayText("results_intro"))
        );
    }

    #[test]
    fn test_validate_rejects_unknown_definition_extension() {
        let config = AppConfig {
            quiz: QuizConfig {
                definition_path: Some("quiz.txt".into()),
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnsupportedDefinitionFormat(_))
        ));
    }
}
