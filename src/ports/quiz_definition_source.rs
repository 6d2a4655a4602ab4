//! Quiz Definition Source Port - Where steps and the catalog come from.
//!
//! The quiz core never reads files or environment itself. A host hands it a
//! [`QuizDefinition`] obtained through this port, once per session start.

use async_trait::async_trait;

use crate::domain::definition::QuizDefinition;
use crate::domain::foundation::DomainError;

/// Port for loading a quiz definition.
///
/// # Contract
///
/// Implementations must:
/// - Return a fully validated definition or an error, never a partial one
/// - Use `ErrorCode::DefinitionNotFound` when the backing data is missing
/// - Use `ErrorCode::UnsupportedFormat` when the data cannot be decoded
/// - Use `ErrorCode::InvalidDefinition` when decoded data fails validation
///
/// # Usage
///
/// ```rust,ignore
/// let source: &dyn QuizDefinitionSource = &FileDefinitionSource::new("quiz.yaml");
/// let definition = source.load().await?;
/// let session = QuizSession::new(Arc::new(definition));
/// ```
#[async_trait]
pub trait QuizDefinitionSource: Send + Sync {
    /// Load and validate the definition.
    async fn load(&self) -> Result<QuizDefinition, DomainError>;

    /// Human readable description of where the definition comes from.
    fn describe(&self) -> String;
}
