//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Casino Finder domain.

mod errors;
mod ids;
mod payout_speed;
mod quiz_phase;
mod star_rating;
mod state_machine;
mod step_status;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::StepId;
pub use payout_speed::PayoutSpeed;
pub use quiz_phase::QuizPhase;
pub use star_rating::StarRating;
pub use state_machine::StateMachine;
pub use step_status::StepStatus;
