//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.snsdesk/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::form::{DEFAULT_SUBJECT, FormDefaults};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SnsDeskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub publish: PublishConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PublishConfig {
    pub default_subject: Option<String>,
    pub default_gift_card_type: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    /// Transport timeout. `0` in the config disables it.
    pub timeout: Option<Duration>,
    pub default_subject: String,
    pub default_gift_card_type: String,
    pub log_level: LevelFilter,
}

impl ResolvedConfig {
    pub fn form_defaults(&self) -> FormDefaults {
        FormDefaults {
            subject: self.default_subject.clone(),
            gift_card_type: self.default_gift_card_type.clone(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.snsdesk/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".snsdesk").join("config.toml"))
}

/// Load config from `~/.snsdesk/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SnsDeskConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SnsDeskConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SnsDeskConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SnsDeskConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: SnsDeskConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# snsdesk Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "error", "warn", "info", "debug", "trace"

# [api]
# base_url = "http://localhost:8080" # Or set SNSDESK_BASE_URL / --base-url
# timeout_secs = 30                  # Or set SNSDESK_TIMEOUT_SECS; 0 disables

# [publish]
# default_subject = "Gift Card Delivery Notification"
# default_gift_card_type = "AMAZON"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` is from the `--base-url` flag (None = not specified).
pub fn resolve(config: &SnsDeskConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SNSDESK_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Timeout: env → config → default
    let timeout_secs = std::env::var("SNSDESK_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .or(config.api.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let log_level = config
        .general
        .log_level
        .as_deref()
        .map(parse_level)
        .unwrap_or(LevelFilter::Debug);

    ResolvedConfig {
        base_url,
        timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        default_subject: config
            .publish
            .default_subject
            .clone()
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
        default_gift_card_type: config
            .publish
            .default_gift_card_type
            .clone()
            .unwrap_or_default(),
        log_level,
    }
}

fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or_else(|_| {
        warn!("Unknown log level {:?}, using debug", level);
        LevelFilter::Debug
    })
}
