//! Quiz definition configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::DefinitionFormat;

/// Where the quiz definition comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizConfig {
    /// JSON or YAML definition file. Built-in steps are used when unset.
    pub definition_path: Option<PathBuf>,
}

impl QuizConfig {
    /// Validate quiz configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.definition_path {
            if DefinitionFormat::from_path(path).is_none() {
                return Err(ValidationError::UnsupportedDefinitionFormat(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}
