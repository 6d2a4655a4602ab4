//! Result screen text configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Text shown around the shortlist
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Heading above the shortlist; `{total}` becomes the catalog size
    #[serde(default = "default_results_intro")]
    pub results_intro: String,

    /// Shown when no casino scores above zero
    #[serde(default = "default_no_results_message")]
    pub no_results_message: String,
}

impl DisplayConfig {
    /// Results heading with `{total}` substituted
    pub fn results_intro_for(&self, total: usize) -> String {
        self.results_intro.replace("{total}", &total.to_string())
    }

    /// Validate display configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.results_intro.trim().is_empty() {
            return Err(ValidationError::EmptyDisplayText("results_intro"));
        }
        if self.no_results_message.trim().is_empty() {
            return Err(ValidationError::EmptyDisplayText("no_results_message"));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            results_intro: default_results_intro(),
            no_results_message: default_no_results_message(),
        }
    }
}

fn default_results_intro() -> String {
    "Based on your answers, here are your top matches out of {total} casinos:".to_string()
}

fn default_no_results_message() -> String {
    "No casinos match your preferences. Try going back and changing an answer.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_substitutes_total() {
        let config = DisplayConfig::default();
        assert_eq!(
            config.results_intro_for(12),
            "Based on your answers, here are your top matches out of 12 casinos:"
        );
    }

    #[test]
    fn intro_without_placeholder_is_unchanged() {
        let config = DisplayConfig {
            results_intro: "Your matches:".to_string(),
            ..Default::default()
        };
        assert_eq!(config.results_intro_for(5), "Your matches:");
    }

    #[test]
    fn blank_texts_are_rejected() {
        let config = DisplayConfig {
            no_results_message: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::EmptyDisplayText("no_results_message"))
        );
    }
}
