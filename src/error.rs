//! Error types for the report client.
//!
//! Three non-fatal error kinds map to the three ways a session can go wrong:
//! - `Validation`: bad input caught before any network call
//! - `Audit`: the audit endpoint failed or was unreachable
//! - `Export`: an export request failed; surfaced outside the audit error state

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected before issuing a request
    #[error("{0}")]
    Validation(String),

    /// Audit request failed; carries the server message when one was supplied
    #[error("{0}")]
    Audit(String),

    /// Export request or artifact save failed
    #[error("Failed to export: {0}")]
    Export(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn audit(msg: impl Into<String>) -> Self {
        Self::Audit(msg.into())
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
