//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureFlags {
    /// Go straight to results without the staged loading messages
    #[serde(default)]
    pub skip_loading_sequence: bool,

    /// Show error codes and details instead of a short message
    #[serde(default)]
    pub verbose_errors: bool,
}
