//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::ValidationError;

/// Identifier of a quiz step, unique within a quiz definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StepId(String);

impl StepId {
    /// Creates a StepId, rejecting blank values.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("step.id"));
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StepId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StepId::new(value)
    }
}

impl From<StepId> for String {
    fn from(id: StepId) -> Self {
        id.0
    }
}

impl Borrow<str> for StepId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StepId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StepId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_non_blank_ids() {
        let id = StepId::new("casino-type").unwrap();
        assert_eq!(id.as_str(), "casino-type");
        assert_eq!(id, "casino-type");
    }

    #[test]
    fn new_rejects_blank_ids() {
        assert!(StepId::new("").is_err());
        assert!(StepId::new("   ").is_err());
    }

    #[test]
    fn serializes_transparently() {
        let id = StepId::new("payout").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"payout\"");

        let parsed: StepId = serde_json::from_str("\"game\"").unwrap();
        assert_eq!(parsed.as_str(), "game");
    }

    #[test]
    fn deserializing_blank_id_fails() {
        let result: Result<StepId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
