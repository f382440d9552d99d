//! Configuration management for the Spotify Catalog CLI.
//!
//! The configuration is assembled from the following layers, later layers
//! winning over earlier ones:
//! 1. The settings file: `config/config.yml` embedded at build time, or the
//!    file passed with `--config` (`.json` files are read as JSON, everything
//!    else as YAML)
//! 2. Client credentials: inline in the settings file, otherwise the embedded
//!    `config/client_credentials.yml`
//! 3. Environment variables, optionally seeded from a `.env` file in the local
//!    data directory
//!
//! The result is validated before use. A missing or malformed value aborts
//! startup; there are no silent defaults for URLs or credentials.

use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::{error::ConfigError, types::ClientCredentials};

const EMBEDDED_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config/config.yml"));
const EMBEDDED_CREDENTIALS: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config/client_credentials.yml"));

pub const ENV_API_URL: &str = "SPOTIFY_API_URL";
pub const ENV_ACCOUNTS_URL: &str = "SPOTIFY_ACCOUNTS_URL";
pub const ENV_CLIENT_ID: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub clients: ClientsSettings,
}

#[derive(Debug, Deserialize)]
pub struct ClientsSettings {
    pub spotify: SpotifySettings,
}

#[derive(Debug, Deserialize)]
pub struct SpotifySettings {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub accounts_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub client_credentials: Option<ClientCredentials>,
}

/// Fully validated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub accounts_url: String,
    pub timeout: Duration,
    pub credentials: ClientCredentials,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

fn parse<T: for<'de> Deserialize<'de>>(content: &str, format: Format, origin: &str) -> Result<T, ConfigError> {
    let parsed = match format {
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| ConfigError::Parse {
        origin: origin.to_string(),
        message,
    })
}

pub fn parse_settings(content: &str, format: Format, origin: &str) -> Result<Settings, ConfigError> {
    parse(content, format, origin)
}

pub fn parse_credentials(content: &str, format: Format, origin: &str) -> Result<ClientCredentials, ConfigError> {
    parse(content, format, origin)
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives under `catalogcli/.env` in the platform-specific local data
/// directory:
/// - Linux: `~/.local/share/catalogcli/.env`
/// - macOS: `~/Library/Application Support/catalogcli/.env`
/// - Windows: `%LOCALAPPDATA%/catalogcli/.env`
///
/// A missing file is not an error; variables already set in the process
/// environment take precedence over the file.
///
/// # Errors
///
/// Returns `ConfigError::Env` if the file exists but cannot be parsed.
pub fn load_env() -> Result<Option<PathBuf>, ConfigError> {
    let path = env_file_path();
    if !path.is_file() {
        debug!(path = %path.display(), "no environment file found");
        return Ok(None);
    }

    dotenv::from_path(&path).map_err(|e| ConfigError::Env {
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok(Some(path))
}

pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("catalogcli/.env");
    path
}

/// Assembles and validates the configuration.
///
/// # Arguments
///
/// * `path` - Optional settings file replacing the embedded `config.yml`
///
/// # Errors
///
/// Fails when the settings file cannot be read or parsed, or when the merged
/// configuration does not pass [`AppConfig::validate`].
///
/// # Example
///
/// ```
/// let cfg = config::load(None).await?;
/// println!("API at {}", cfg.base_url);
/// ```
pub async fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let settings = match path {
        Some(path) => {
            let content = async_fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            parse_settings(&content, Format::from_path(path), &path.display().to_string())?
        }
        None => parse_settings(EMBEDDED_CONFIG, Format::Yaml, "embedded config.yml")?,
    };

    let config = from_settings(settings, EMBEDDED_CREDENTIALS, |key| env::var(key).ok())?;
    debug!(base_url = %config.base_url, accounts_url = %config.accounts_url, "configuration loaded");
    Ok(config)
}

/// Merges parsed settings, fallback credentials and environment overrides.
///
/// `lookup` resolves environment variable names; empty values are ignored.
pub fn from_settings<F>(settings: Settings, fallback_credentials: &str, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let spotify = settings.clients.spotify;

    let mut credentials = match spotify.client_credentials {
        Some(credentials) => credentials,
        None => parse_credentials(fallback_credentials, Format::Yaml, "embedded client_credentials.yml")?,
    };

    let env_value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let base_url = env_value(ENV_API_URL).unwrap_or(spotify.base_url);
    let accounts_url = env_value(ENV_ACCOUNTS_URL).unwrap_or(spotify.accounts_url);
    if let Some(id) = env_value(ENV_CLIENT_ID) {
        credentials.client_id = id;
    }
    if let Some(secret) = env_value(ENV_CLIENT_SECRET) {
        credentials.client_secret = secret;
    }

    let config = AppConfig {
        base_url: base_url.trim().to_string(),
        accounts_url: accounts_url.trim().to_string(),
        timeout: Duration::from_secs(spotify.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        credentials,
    };
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("base_url", &self.base_url)?;
        validate_url("accounts_url", &self.accounts_url)?;

        if self.credentials.client_id.trim().is_empty() {
            return Err(ConfigError::Missing("client_id"));
        }
        if self.credentials.client_secret.trim().is_empty() {
            return Err(ConfigError::Missing("client_secret"));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::Invalid {
                field: "timeout_secs",
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Missing(field));
    }
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}
