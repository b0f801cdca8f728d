//! Backend API configuration loading from config.toml
//!
//! The storefront talks to a single PHP backend. Its base URL comes from `config.toml`
//! and can be overridden with `DIAMOND_STORE_BASE_URL` (typically set in `.env`).

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Base URL used when neither config.toml nor the environment provides one.
/// This is the host loopback address as seen from the Android emulator.
pub const DEFAULT_BASE_URL: &str = "http://10.0.2.2/diamond_api/";

/// Environment variable overriding `api.base_url`
pub const BASE_URL_ENV: &str = "DIAMOND_STORE_BASE_URL";

/// Config file read when `DIAMOND_STORE_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment variable pointing at an alternative config.toml
pub const CONFIG_PATH_ENV: &str = "DIAMOND_STORE_CONFIG";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Backend connection settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Connection settings for the catalog/transaction backend
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Root URL that `produk.php` and `transaksi.php` are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Overall request timeout; the HTTP client default applies when absent
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Optional `User-Agent` header
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ApiConfig {
    /// Request timeout as a [`Duration`], if configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Base URL with exactly one trailing `/`.
    pub fn normalized_base_url(&self) -> String {
        normalize_base_url(&self.base_url)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Trims whitespace and forces exactly one trailing slash.
pub fn normalize_base_url(raw: &str) -> String {
    format!("{}/", raw.trim().trim_end_matches('/'))
}

/// Loads API configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - The base URL is empty
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    parse_config(&contents)
}

/// Parses and validates config.toml contents.
///
/// # Errors
/// Returns an error if the TOML is invalid or the base URL is blank.
pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    if config.api.base_url.trim().is_empty() {
        return Err(Error::Config {
            message: "api.base_url cannot be empty".to_string(),
        });
    }

    Ok(config)
}

/// Loads `path` if it exists, otherwise returns built-in defaults.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<Config> {
    if path.as_ref().exists() {
        load_config(path)
    } else {
        tracing::info!("No {:?} found, using built-in defaults", path.as_ref());
        Ok(Config::default())
    }
}

/// Loads configuration from the default location (./config.toml), falling back to
/// built-in defaults when the file is absent.
///
/// # Errors
/// Returns an error if ./config.toml exists but cannot be read or parsed.
pub fn load_default_config() -> Result<Config> {
    load_config_or_default(DEFAULT_CONFIG_PATH)
}

/// Loads the effective API configuration.
///
/// Reads the file named by `DIAMOND_STORE_CONFIG`, else `./config.toml` when it exists,
/// else built-in defaults. `DIAMOND_STORE_BASE_URL` then overrides the base URL.
///
/// # Errors
/// Returns an error if a config file exists but cannot be parsed.
pub fn load_app_configuration() -> Result<ApiConfig> {
    let config = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => load_config(path)?,
        Err(_) => load_default_config()?,
    };

    let mut api = config.api;
    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        if !base_url.trim().is_empty() {
            tracing::debug!("Base URL overridden by {}", BASE_URL_ENV);
            api.base_url = base_url;
        }
    }
    api.base_url = api.normalized_base_url();

    tracing::info!("Using backend at {}", api.base_url);
    Ok(api)
}
