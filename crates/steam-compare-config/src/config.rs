// crates/steam-compare-config/src/config.rs
// ============================================================================
// Module: Steam Compare Configuration
// Description: Configuration loading and validation.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: steam-compare-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file resolved in this order:
//! 1. an explicit path (the CLI `--config` flag),
//! 2. the [`CONFIG_ENV_VAR`] environment variable,
//! 3. [`DEFAULT_CONFIG_NAME`] in the working directory.
//!
//! Explicit and environment paths must exist. The default file is optional;
//! when it is absent the built-in defaults apply.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;
use steam_compare_core::DEFAULT_MAX_DOCUMENT_BYTES;
use steam_compare_core::Locator;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "steam-compare.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "STEAM_COMPARE_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Smallest accepted request timeout in milliseconds.
pub const MIN_TIMEOUT_MS: u64 = 100;
/// Largest accepted request timeout in milliseconds.
pub const MAX_TIMEOUT_MS: u64 = 120_000;
/// Smallest accepted document size cap in bytes.
pub const MIN_DOCUMENT_BYTES: usize = 1024;
/// Largest accepted document size cap in bytes.
pub const MAX_DOCUMENT_BYTES: usize = 64 * 1024 * 1024;
/// Maximum user agent length.
const MAX_USER_AGENT_LENGTH: usize = 256;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Top-level steam-compare configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SteamCompareConfig {
    /// Library document source settings.
    #[serde(default)]
    pub source: SourceConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl SteamCompareConfig {
    /// Loads configuration using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = env::var_os(CONFIG_ENV_VAR);
        match resolve_path(path, env_path.as_deref())? {
            ConfigPath::Required(path) => Self::load_file(&path),
            ConfigPath::Optional(path) => match fs::metadata(&path) {
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
                _ => Self::load_file(&path),
            },
        }
    }

    /// Loads and validates one configuration file that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when reading, parsing, or validation fails.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(format!("{}: {err}", path.display())))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.source.validate()
    }
}

/// Library document source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Base URL profile and vanity paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Maximum accepted document size in bytes.
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: usize,
    /// Optional user agent override.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Optional directory of saved `<id>.xml` documents used instead of HTTP.
    #[serde(default)]
    pub offline_dir: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            max_document_bytes: default_max_document_bytes(),
            user_agent: None,
            offline_dir: None,
        }
    }
}

impl SourceConfig {
    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Validates source configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.base_url.trim();
        let has_scheme = base_url.starts_with("http://") || base_url.starts_with("https://");
        if !has_scheme || base_url.trim_end_matches('/').ends_with(':') {
            return Err(ConfigError::Invalid("source.base_url must be an http or https url".to_string()));
        }
        if !(MIN_TIMEOUT_MS ..= MAX_TIMEOUT_MS).contains(&self.timeout_ms) {
            return Err(ConfigError::Invalid("source.timeout_ms out of range".to_string()));
        }
        if !(MIN_DOCUMENT_BYTES ..= MAX_DOCUMENT_BYTES).contains(&self.max_document_bytes) {
            return Err(ConfigError::Invalid("source.max_document_bytes out of range".to_string()));
        }
        if let Some(user_agent) = &self.user_agent {
            let trimmed = user_agent.trim();
            if trimmed.is_empty() || trimmed.len() > MAX_USER_AGENT_LENGTH {
                return Err(ConfigError::Invalid("source.user_agent must be 1-256 characters".to_string()));
            }
        }
        if let Some(dir) = &self.offline_dir {
            let text = dir.to_string_lossy();
            if text.trim().is_empty() {
                return Err(ConfigError::Invalid("source.offline_dir must be non-empty".to_string()));
            }
            if text.len() > MAX_TOTAL_PATH_LENGTH {
                return Err(ConfigError::Invalid("source.offline_dir exceeds max length".to_string()));
            }
        }
        Ok(())
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Emit the JSON-line run log on stderr.
    #[serde(default)]
    pub log_json: bool,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Path Resolution
// ============================================================================

/// Config path chosen by [`resolve_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigPath {
    /// Named explicitly or via the environment; must exist.
    Required(PathBuf),
    /// Implicit default; may be absent.
    Optional(PathBuf),
}

/// Resolves the config path from an explicit path or environment value.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the chosen path is empty or too long.
pub fn resolve_path(explicit: Option<&Path>, env_value: Option<&OsStr>) -> Result<ConfigPath, ConfigError> {
    let chosen = explicit.map(Path::to_path_buf).or_else(|| env_value.map(PathBuf::from));
    let Some(path) = chosen else {
        return Ok(ConfigPath::Optional(PathBuf::from(DEFAULT_CONFIG_NAME)));
    };
    let text = path.to_string_lossy();
    if text.is_empty() {
        return Err(ConfigError::Invalid("config path must be non-empty".to_string()));
    }
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    Ok(ConfigPath::Required(path))
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default base URL.
fn default_base_url() -> String {
    Locator::DEFAULT_BASE_URL.to_string()
}

/// Default request timeout.
const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Default document size cap.
const fn default_max_document_bytes() -> usize {
    DEFAULT_MAX_DOCUMENT_BYTES
}
