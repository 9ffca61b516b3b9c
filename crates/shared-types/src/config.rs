use serde::{Deserialize, Serialize};

use crate::FeatureFlags;

/// Company identity shown in the sidebar brand block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrandingConfig {
    pub company_name: String,
    pub tagline: String,
    pub logo_url: Option<String>,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            company_name: "FOTABONG ROYAL".to_string(),
            tagline: "ENTERPRISE".to_string(),
            logo_url: None,
        }
    }
}

/// How money amounts are rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Suffix appended after the amount, e.g. `XAF`.
    pub code: String,
    /// Inserted between digit groups. Any string, including empty.
    pub thousands_separator: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: "XAF".to_string(),
            thousands_separator: ",".to_string(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub branding: BrandingConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}
