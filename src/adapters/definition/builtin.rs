//! Built-in quiz steps.
//!
//! The four standard questions (casino type, game, deposit method, payout
//! speed). Used when no definition file is configured; the catalog is still
//! supplied by the host.

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::domain::definition::QuizDefinition;
use crate::domain::foundation::{DomainError, ErrorCode, StepId, ValidationError};
use crate::domain::quiz::{QuizOption, Step, StepSequence};
use crate::domain::recommendation::Catalog;
use crate::ports::QuizDefinitionSource;

type OptionRow = (&'static str, &'static str, &'static str);

const STEP_TABLE: &[(&str, &str, &str, &[OptionRow])] = &[
    (
        "casino-type",
        "Type of Casino",
        "What type of casino are you looking for?",
        &[
            ("Online Casino", "online", "🎰"),
            ("Sweepstakes", "sweepstakes", "🎟️"),
            ("Social Casino", "social", "👥"),
            ("No Deposit", "no-deposit", "🎁"),
            ("Fast Paying", "fast-paying", "⚡"),
        ],
    ),
    (
        "game",
        "Preferred Game",
        "What type of game do you prefer?",
        &[
            ("Slots", "slots", "🎰"),
            ("Blackjack", "blackjack", "🃏"),
            ("Live Dealer", "live-dealer", "🎥"),
            ("Table Games", "table-games", "🎲"),
        ],
    ),
    (
        "banking",
        "Deposit Method",
        "What is your preferred deposit method?",
        &[
            ("Credit Card", "credit-card", "💳"),
            ("PayPal", "paypal", "🅿️"),
            ("Crypto", "crypto", "₿"),
            ("Apple Pay / Google Pay", "mobile-wallet", "📱"),
        ],
    ),
    (
        "payout",
        "Payout Speed",
        "How fast do you want your payouts?",
        &[
            ("Instant", "instant", "⚡"),
            ("1–2 Days", "1-2-days", "🕐"),
            ("Up to 1 Week", "up-to-1-week", "📅"),
        ],
    ),
];

static BUILTIN_STEPS: Lazy<Result<StepSequence, ValidationError>> = Lazy::new(|| {
    let steps = STEP_TABLE
        .iter()
        .map(|(id, title, question, options)| {
            Step::new(
                StepId::new(*id)?,
                *title,
                *question,
                options
                    .iter()
                    .map(|(label, value, icon)| QuizOption::new(*label, *value, *icon))
                    .collect(),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    StepSequence::new(steps)
});

/// Returns the built-in step sequence.
pub fn builtin_steps() -> Result<StepSequence, ValidationError> {
    BUILTIN_STEPS.clone()
}

/// Definition source that pairs the built-in steps with a supplied catalog.
#[derive(Debug, Clone, Default)]
pub struct BuiltinDefinitionSource {
    catalog: Catalog,
}

impl BuiltinDefinitionSource {
    /// Uses the built-in steps with the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl QuizDefinitionSource for BuiltinDefinitionSource {
    async fn load(&self) -> Result<QuizDefinition, DomainError> {
        let steps = builtin_steps()
            .map_err(|e| DomainError::new(ErrorCode::InvalidDefinition, e.to_string()))?;
        QuizDefinition::new(steps, self.catalog.clone())
            .map_err(|e| DomainError::new(ErrorCode::InvalidDefinition, e.to_string()))
    }

    fn describe(&self) -> String {
        format!("built-in steps with {} casinos", self.catalog.len())
    }
}
