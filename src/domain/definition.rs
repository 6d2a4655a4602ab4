//! QuizDefinition - The static configuration for one quiz.
//!
//! Bundles the step list with the casino catalog and checks the pieces that
//! only make sense together, such as payout options being real payout speeds.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PayoutSpeed, ValidationError};
use crate::domain::quiz::StepSequence;
use crate::domain::recommendation::{Catalog, Criterion};

/// Steps plus catalog, validated together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizDefinition {
    steps: StepSequence,
    casinos: Catalog,
}

impl QuizDefinition {
    /// Creates a definition, rejecting payout options that are not payout speeds.
    pub fn new(steps: StepSequence, casinos: Catalog) -> Result<Self, ValidationError> {
        if let Some(payout) = steps.find(Criterion::Payout.step_id()) {
            for option in &payout.options {
                option.value.parse::<PayoutSpeed>()?;
            }
        }
        Ok(Self { steps, casinos })
    }

    /// Returns the steps.
    pub fn steps(&self) -> &StepSequence {
        &self.steps
    }

    /// Returns the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.casinos
    }
}

#[derive(Deserialize)]
struct RawDefinition {
    steps: StepSequence,
    #[serde(default)]
    casinos: Catalog,
}

impl<'de> Deserialize<'de> for QuizDefinition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawDefinition::deserialize(deserializer)?;
        QuizDefinition::new(raw.steps, raw.casinos).map_err(serde::de::Error::custom)
    }
}
