//! File-based Quiz Definition Adapter
//!
//! Reads steps and the casino catalog from a JSON or YAML document on disk.
//! The format is picked from the file extension.

use async_trait::async_trait;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::definition::QuizDefinition;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::quiz::{Step, StepSequence};
use crate::domain::recommendation::{Casino, Catalog};
use crate::ports::QuizDefinitionSource;

/// Document formats a definition file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Yaml,
}

impl DefinitionFormat {
    /// Detects the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Undecoded document shape. Validation happens after decoding so the two
/// failure kinds map to different error codes.
#[derive(Debug, Deserialize)]
struct DefinitionDocument {
    steps: Vec<Step>,
    #[serde(default)]
    casinos: Vec<Casino>,
}

/// Loads a quiz definition from a single file.
#[derive(Debug, Clone)]
pub struct FileDefinitionSource {
    path: PathBuf,
}

impl FileDefinitionSource {
    /// Create a source for the given file.
    ///
    /// # Example
    /// ```ignore
    /// let source = FileDefinitionSource::new("./quiz.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> Result<DefinitionFormat, DomainError> {
        DefinitionFormat::from_path(&self.path).ok_or_else(|| {
            DomainError::new(
                ErrorCode::UnsupportedFormat,
                "Definition file must end in .json, .yaml or .yml",
            )
            .with_detail("path", self.path.display().to_string())
        })
    }

    fn decode(format: DefinitionFormat, text: &str) -> Result<DefinitionDocument, DomainError> {
        let decoded = match format {
            DefinitionFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            DefinitionFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        };
        decoded.map_err(|e| DomainError::new(ErrorCode::UnsupportedFormat, e))
    }

    fn validate(document: DefinitionDocument) -> Result<QuizDefinition, DomainError> {
        let invalid = |e: ValidationError| {
            DomainError::new(ErrorCode::InvalidDefinition, e.to_string())
        };
        let steps = StepSequence::new(document.steps).map_err(invalid)?;
        let catalog = Catalog::new(document.casinos).map_err(invalid)?;
        QuizDefinition::new(steps, catalog).map_err(invalid)
    }
}

#[async_trait]
impl QuizDefinitionSource for FileDefinitionSource {
    async fn load(&self) -> Result<QuizDefinition, DomainError> {
        let format = self.format()?;

        let text = fs::read_to_string(&self.path).await.map_err(|e| {
            let code = if e.kind() == ErrorKind::NotFound {
                ErrorCode::DefinitionNotFound
            } else {
                ErrorCode::InternalError
            };
            DomainError::new(code, e.to_string())
                .with_detail("path", self.path.display().to_string())
        })?;

        let document = Self::decode(format, &text)?;
        let definition = Self::validate(document)?;

        debug!(
            path = %self.path.display(),
            steps = definition.steps().len(),
            casinos = definition.catalog().len(),
            "Loaded quiz definition"
        );
        Ok(definition)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
