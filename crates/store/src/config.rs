use shared_types::{AppConfig, AppError};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded at build time so the
/// web target needs no filesystem access.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse a TOML config document.
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    toml::from_str(contents).map_err(|e| AppError::config(e.to_string()))
}

/// Parse the embedded config and store it in the global `OnceLock`.
/// Safe to call multiple times; only the first call has effect.
///
/// A config that fails to parse falls back to defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            tracing::info!(
                company = %config.branding.company_name,
                currency = %config.currency.code,
                animations = config.features.animations,
                "Loaded config.toml"
            );
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
            AppConfig::default()
        }
    })
}

/// Get the loaded config, loading it on first use.
pub fn app_config() -> &'static AppConfig {
    load_config()
}
