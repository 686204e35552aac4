use std::path::PathBuf;

use serde::Deserialize;

use isochron_core::meeting::{DEFAULT_COUNTERPART_ZONE, DEFAULT_REFERENCE_ZONE, DEFAULT_USER_ZONE};

use crate::error::IsnError;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    pub openrouter_api_key: Option<String>,
    pub model: Option<String>,
    #[serde(default)]
    pub zones: ZonesConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct ZonesConfig {
    pub user: Option<String>,
    pub counterpart: Option<String>,
    pub reference: Option<String>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("isochron").join("config.toml"))
}

pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    let Ok(content) = std::fs::read_to_string(path) else {
        return Config::default();
    };

    toml::from_str(&content).unwrap_or_default()
}

pub fn load_api_key() -> Result<String, IsnError> {
    // First, try environment variable
    if let Ok(key) = std::env::var("OPENROUTER_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    // Then, try config file
    let config = load_config();
    if let Some(key) = config.openrouter_api_key {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    Err(IsnError::ApiKeyNotFound)
}

/// Zone ids for the user, counterpart and reference slots, CLI flags
/// winning over the config file, the config file over the defaults.
pub fn resolve_zones(
    cli_user: Option<String>,
    cli_counterpart: Option<String>,
) -> (String, String, String) {
    let config = load_config();

    let user = cli_user
        .or(config.zones.user)
        .unwrap_or_else(|| DEFAULT_USER_ZONE.to_string());
    let counterpart = cli_counterpart
        .or(config.zones.counterpart)
        .unwrap_or_else(|| DEFAULT_COUNTERPART_ZONE.to_string());
    let reference = config
        .zones
        .reference
        .unwrap_or_else(|| DEFAULT_REFERENCE_ZONE.to_string());

    (user, counterpart, reference)
}
