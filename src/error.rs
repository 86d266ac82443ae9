//! Error types for the side-by-side resolver
//!
//! The resolution engine itself never fails: a lookup that cannot produce a
//! match is simply "no match". These types exist so the adapters around the
//! engine (the HTTP lookup client, configuration loading) can report exactly
//! what went wrong before the failure is logged and suppressed.

use std::time::Duration;

use thiserror::Error;

/// Failures inside a lookup adapter
///
/// Never crosses the [`EntityLookup`](crate::lookup::EntityLookup) boundary;
/// adapters log it and report `None` instead.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Lookup service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed lookup response: {message}")]
    Malformed { message: String },

    #[error("Lookup for '{candidate}' timed out after {elapsed:?}")]
    Timeout {
        candidate: String,
        elapsed: Duration,
    },
}

impl LookupError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        LookupError::Malformed {
            message: message.into(),
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;
