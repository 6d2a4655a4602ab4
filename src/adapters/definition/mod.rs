//! Definition adapters - Sources for quiz steps and the casino catalog.
//!
//! - `FileDefinitionSource` - JSON or YAML document on disk
//! - `BuiltinDefinitionSource` - The four standard steps with a supplied catalog

mod builtin;
mod file;

pub use builtin::{builtin_steps, BuiltinDefinitionSource};
pub use file::{DefinitionFormat, FileDefinitionSource};
