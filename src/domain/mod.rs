//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `quiz` - Steps, answers and the step sequencer
//! - `recommendation` - Casino catalog and the scoring engine
//! - `definition` - Steps and catalog bundled as one validated quiz

pub mod definition;
pub mod foundation;
pub mod quiz;
pub mod recommendation;
