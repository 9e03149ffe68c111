//! Error taxonomy.
//!
//! Per-wallet errors (`ValidationError`, `RequestError`) never escape the
//! batch loop. `AppError` is what the binary sees.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::loader::ConfigError;

/// Candidate string is not a `0x`-prefixed 40 hex digit address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid Ethereum address: {input}")]
pub struct ValidationError {
    pub input: String,
}

/// Outcome of a single API call that did not produce records.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The API asked us to slow down. Retried by the orchestrator.
    #[error("Rate limited, will retry")]
    Throttled,

    #[error(transparent)]
    Terminal(#[from] TerminalRequestError),
}

/// Failure after which the wallet is not retried.
#[derive(Error, Debug)]
pub enum TerminalRequestError {
    #[error("API returned {status}")]
    Status { status: reqwest::StatusCode },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response body parsing failed: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
#[error("Error reading file {}: {source}", .path.display())]
pub struct InputReadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[derive(Error, Debug)]
#[error("Error writing file {}: {source}", .path.display())]
pub struct OutputWriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputReadError),

    #[error(transparent)]
    Output(#[from] OutputWriteError),

    #[error("HTTP client setup failed: {0}")]
    Client(#[from] reqwest::Error),
}
