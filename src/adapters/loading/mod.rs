//! Loading adapters - Cosmetic staged messages shown before results.

mod loading_sequence;

pub use loading_sequence::{LoadingOutcome, LoadingSequence, LoadingSequenceConfig};
