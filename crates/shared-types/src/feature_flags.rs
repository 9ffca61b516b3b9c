use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Feature flags controlling optional presentation behaviour.
///
/// Loaded from the `[features]` table of `config.toml`. A missing table
/// or key keeps the default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Progress bars grow from zero on mount and panels fade in.
    #[serde(default = "default_true")]
    pub animations: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self { animations: true }
    }
}
