use std::io;

use thiserror::Error;

use crate::types::AccountId;

/// Error type for source fetches, validation, and assembly failures.
///
/// Variants map one-to-one onto the terminal states the classifier exposes.
/// Errors propagate unchanged from the point of detection; nothing wraps or
/// swallows them on the way to the classifier.
#[derive(Debug, Error)]
pub enum RadarError {
    /// Schema violation: missing columns, blank required cells, or a ring
    /// count past the cap. Recoverable only by fixing the source data.
    #[error("{message}")]
    MalformedData { message: String },
    /// The referenced document or sheet tab does not exist.
    #[error("{message}")]
    SheetNotFound { message: String },
    /// A protected document refused the signed-in account.
    #[error("access denied for '{account}' (status {status})")]
    Unauthorized { status: u16, account: AccountId },
    /// Network or protocol failure outside the closed taxonomy.
    #[error("transport failure: {0}")]
    Transport(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl RadarError {
    /// Shorthand for a `MalformedData` failure.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedData {
            message: message.into(),
        }
    }

    /// Shorthand for a `SheetNotFound` failure.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::SheetNotFound {
            message: message.into(),
        }
    }
}
