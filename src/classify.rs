//! Classification of build failures into terminal presentation states.

use tracing::error;

use crate::constants::guidance;
use crate::errors::RadarError;
use crate::types::AccountId;

/// Terminal state of a failed build attempt.
///
/// Once a state is reached the in-progress build is abandoned: nothing is
/// retried automatically, no partial radar is surfaced, and recovery is
/// always user-initiated (resubmit, pick another source, re-authorize).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The referenced document or tab does not exist.
    NotFound {
        /// Failure text from the source boundary.
        message: String,
    },
    /// The source data violated the schema contract.
    Malformed {
        /// The specific validation or assembly message.
        message: String,
    },
    /// A protected document denied the signed-in account.
    Unauthorized {
        /// The denied account identity.
        account: AccountId,
    },
    /// Anything outside the closed taxonomy; detail is logged, never shown.
    Unknown,
}

impl FailureKind {
    /// Map a pipeline error onto its terminal state.
    ///
    /// Errors outside the closed taxonomy are logged here and reach the user
    /// as generic text only.
    pub fn classify(error: &RadarError) -> Self {
        match error {
            RadarError::SheetNotFound { message } => Self::NotFound {
                message: message.clone(),
            },
            RadarError::MalformedData { message } => Self::Malformed {
                message: message.clone(),
            },
            RadarError::Unauthorized { account, .. } => Self::Unauthorized {
                account: account.clone(),
            },
            RadarError::Transport(_) | RadarError::Io(_) => {
                error!(%error, "radar build failed outside the closed taxonomy");
                Self::Unknown
            }
        }
    }

    /// Message shown to the user for this state.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { message } => message.clone(),
            Self::Malformed { message } => message.clone(),
            Self::Unauthorized { account } => {
                format!("'{account}' is not allowed to read this document")
            }
            Self::Unknown => guidance::UNKNOWN.to_string(),
        }
    }

    /// Recovery guidance paired with the message.
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => guidance::NOT_FOUND,
            Self::Malformed { .. } => guidance::MALFORMED,
            Self::Unauthorized { .. } => guidance::UNAUTHORIZED,
            Self::Unknown => guidance::UNKNOWN,
        }
    }

    /// True when the state offers the re-authorization action, which restarts
    /// the protected-sheet path with a forced account chooser.
    pub fn offers_reauthorization(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
