//! Answers collected during a quiz session.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{StepId, ValidationError};

/// Map from step id to the chosen option value.
///
/// Holds at most one value per step. Only the sequencer writes to a live
/// session's answers; callers can still build standalone sets (for scoring
/// or tests) through [`Answers::try_from_pairs`] or `collect()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(HashMap<StepId, String>);

impl Answers {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds answers from `(step id, value)` pairs. Later pairs overwrite earlier ones.
    pub fn try_from_pairs<I, K, V>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut answers = Self::new();
        for (step, value) in pairs {
            answers.set(StepId::new(step)?, value.into());
        }
        Ok(answers)
    }

    /// Returns the value chosen for a step.
    pub fn get(&self, step_id: &str) -> Option<&str> {
        self.0.get(step_id).map(String::as_str)
    }

    /// Returns true if the step has an answer.
    pub fn contains(&self, step_id: &str) -> bool {
        self.0.contains_key(step_id)
    }

    /// Number of answered steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing has been answered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(step id, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&StepId, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub(crate) fn set(&mut self, step_id: StepId, value: String) {
        self.0.insert(step_id, value);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(StepId, String)> for Answers {
    fn from_iter<T: IntoIterator<Item = (StepId, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let answers = Answers::new();
        assert!(answers.is_empty());
        assert_eq!(answers.len(), 0);
        assert_eq!(answers.get("game"), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut answers = Answers::new();
        answers.set(StepId::new("game").unwrap(), "slots".to_string());
        answers.set(StepId::new("game").unwrap(), "blackjack".to_string());

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("game"), Some("blackjack"));
    }

    #[test]
    fn try_from_pairs_builds_map() {
        let answers =
            Answers::try_from_pairs([("casino-type", "online"), ("payout", "instant")]).unwrap();
        assert_eq!(answers.len(), 2);
        assert!(answers.contains("casino-type"));
        assert_eq!(answers.get("payout"), Some("instant"));
    }

    #[test]
    fn try_from_pairs_rejects_blank_step_id() {
        assert!(Answers::try_from_pairs([("", "online")]).is_err());
    }

    #[test]
    fn clear_removes_everything() {
        let mut answers = Answers::try_from_pairs([("a", "1"), ("b", "2")]).unwrap();
        answers.clear();
        assert!(answers.is_empty());
    }

    #[test]
    fn serializes_as_plain_object() {
        let answers = Answers::try_from_pairs([("game", "slots")]).unwrap();
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json, serde_json::json!({"game": "slots"}));
    }
}
