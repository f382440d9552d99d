//! Error types shared by the catalog client.
//!
//! Every outbound call ends up classified as one [`CatalogError`] variant. The
//! retry decision in [`crate::management::AuthManager`] matches on the variant,
//! so wrapping an error with extra context must never change its class. Use
//! [`CatalogError::context`] for that instead of converting to a string.

use std::path::PathBuf;

use thiserror::Error;

/// Classified outcome of a failed outbound call or rejected caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The request could not be built or the connection failed.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The server answered with a non-success HTTP status.
    #[error("status error {code}: {message}{}", details_suffix(.details))]
    Status {
        code: u16,
        message: String,
        details: Option<String>,
    },

    /// The server reported success but the body was not what we expected.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Caller supplied input outside of the accepted contract.
    #[error("validation error: {message}")]
    Validation { message: String },
}

fn details_suffix(details: &Option<String>) -> String {
    match details {
        Some(d) if !d.is_empty() => format!(" ({d})"),
        _ => String::new(),
    }
}

impl CatalogError {
    pub fn transport(message: impl Into<String>) -> Self {
        CatalogError::Transport {
            message: message.into(),
        }
    }

    pub fn status(code: u16, message: impl Into<String>) -> Self {
        CatalogError::Status {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        CatalogError::Decode {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation {
            message: message.into(),
        }
    }

    /// HTTP status code for `Status` errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CatalogError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Only 401 and 403 responses qualify for a forced re-authentication.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            CatalogError::Status { code, .. } => matches!(code, 401 | 403),
            CatalogError::Transport { .. }
            | CatalogError::Decode { .. }
            | CatalogError::Validation { .. } => false,
        }
    }

    /// Prefixes the message with `context`, keeping variant and status code.
    pub fn context(self, context: impl AsRef<str>) -> Self {
        let context = context.as_ref();
        match self {
            CatalogError::Transport { message } => CatalogError::Transport {
                message: format!("{context} - {message}"),
            },
            CatalogError::Status {
                code,
                message,
                details,
            } => CatalogError::Status {
                code,
                message: format!("{context} - {message}"),
                details,
            },
            CatalogError::Decode { message } => CatalogError::Decode {
                message: format!("{context} - {message}"),
            },
            CatalogError::Validation { message } => CatalogError::Validation {
                message: format!("{context} - {message}"),
            },
        }
    }
}

/// Failures while assembling the application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error while parsing {origin} - {message}")]
    Parse { origin: String, message: String },

    #[error("missing required config value `{0}`")]
    Missing(&'static str),

    #[error("config value `{field}` is not a valid http(s) URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("config value `{field}` is invalid: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },

    #[error("cannot load environment file {path}: {message}")]
    Env { path: PathBuf, message: String },
}
