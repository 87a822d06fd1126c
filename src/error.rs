// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types.

use crate::config::ConfigError;

/// Application error type for everything that talks to the outside world.
///
/// The aggregation and search code never returns these; only the API
/// client, the report download and the CLI do.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Presence API error: {0}")]
    Api(String),

    #[error("Presence API unreachable: {0}")]
    Transport(String),

    #[error("Report download failed with status {status}: {message}")]
    Report { status: u16, message: String },

    #[error("Downloaded report is empty")]
    EmptyReport,

    #[error("No users selected")]
    NoUsersSelected,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True when the request never got an HTTP response (connection
    /// refused, DNS failure, timeout).
    pub fn is_transport_error(&self) -> bool {
        matches!(self, AppError::Transport(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            AppError::Transport(err.to_string())
        } else {
            AppError::Api(err.to_string())
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, AppError>;
