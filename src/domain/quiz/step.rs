//! Quiz steps and their ordering.
//!
//! A [`StepSequence`] is the validated, ordered list of [`Step`]s that makes up
//! one quiz. It is immutable once built; the sequencer only ever indexes into it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{StepId, ValidationError};

/// One selectable answer on a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub icon: String,
}

impl QuizOption {
    /// Creates a new option.
    pub fn new(label: impl Into<String>, value: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: icon.into(),
        }
    }
}

/// One question screen of the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    pub title: String,
    pub question: String,
    pub options: Vec<QuizOption>,
}

impl Step {
    /// Creates a validated step.
    pub fn new(
        id: StepId,
        title: impl Into<String>,
        question: impl Into<String>,
        options: Vec<QuizOption>,
    ) -> Result<Self, ValidationError> {
        let step = Self {
            id,
            title: title.into(),
            question: question.into(),
            options,
        };
        step.validate()?;
        Ok(step)
    }

    /// Checks that the step has options and that option values are unique.
    ///
    /// Steps built through serde skip [`Step::new`], so [`StepSequence::new`]
    /// calls this again for every step.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.options.is_empty() {
            return Err(ValidationError::empty_field(format!(
                "steps[{}].options",
                self.id
            )));
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if option.value.trim().is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "steps[{}].options.value",
                    self.id
                )));
            }
            if !seen.insert(option.value.as_str()) {
                return Err(ValidationError::duplicate(
                    format!("steps[{}].options.value", self.id),
                    option.value.clone(),
                ));
            }
        }

        Ok(())
    }

    /// Returns true if `value` is one of this step's option values.
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Returns the option with the given value.
    pub fn option(&self, value: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// The ordered, validated list of steps for one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    /// Builds a sequence, rejecting empty lists, invalid steps and duplicate ids.
    pub fn new(steps: Vec<Step>) -> Result<Self, ValidationError> {
        if steps.is_empty() {
            return Err(ValidationError::empty_field("steps"));
        }

        let mut ids = HashSet::new();
        for step in &steps {
            step.validate()?;
            if !ids.insert(step.id.as_str()) {
                return Err(ValidationError::duplicate("steps.id", step.id.as_str()));
            }
        }

        Ok(Self { steps })
    }

    /// Returns the step at `index`.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Returns the step with the given id.
    pub fn find(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Returns the index of the step with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    /// Returns the number of steps (always at least one).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the sequence has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the index of the final step.
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Iterates over the steps in quiz order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'de> Deserialize<'de> for StepSequence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let steps = Vec::<Step>::deserialize(deserializer)?;
        StepSequence::new(steps).map_err(serde::de::Error::custom)
    }
}

impl std::ops::Index<usize> for StepSequence {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
