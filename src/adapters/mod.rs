//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `definition` - Quiz definition sources (file, built-in)
//! - `loading` - Cancellable staged loading messages

pub mod definition;
pub mod loading;

pub use definition::{BuiltinDefinitionSource, DefinitionFormat, FileDefinitionSource};
pub use loading::{LoadingOutcome, LoadingSequence, LoadingSequenceConfig};
