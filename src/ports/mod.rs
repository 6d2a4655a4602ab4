//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuizDefinitionSource` - Supplies steps and the casino catalog

mod quiz_definition_source;

pub use quiz_definition_source::QuizDefinitionSource;
