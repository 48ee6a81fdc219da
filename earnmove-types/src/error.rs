use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a fetch for a symbol did not produce data.
///
/// Errors describe fetches: a bad ticker, a connector that failed or stalled,
/// or every connector coming back empty. An earnings event that cannot be
/// aligned is never an error; it stays in the report as a failed result.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EarnmoveError {
    /// No registered connector advertises the capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label, e.g. `"earnings-calendar"`.
        capability: String,
    },

    /// A provider payload was malformed or missing required fields.
    #[error("data issue: {0}")]
    Data(String),

    /// Rejected input such as a blank ticker or an unknown chart period.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A named connector failed.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Name the connector reports for itself.
        connector: String,
        /// What went wrong.
        msg: String,
    },

    /// Anything a connector could not classify.
    #[error("unknown error: {0}")]
    Other(String),

    /// The symbol has no data for the requested capability.
    #[error("not found: {what}")]
    NotFound {
        /// What was missing, e.g. `"earnings calendar for AAPL"`.
        what: String,
    },

    /// Every connector that was tried failed; one entry per attempt, in priority order.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<EarnmoveError>),

    /// One connector did not answer within the provider timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector that stalled.
        connector: String,
        /// Capability label that was requested.
        capability: String,
    },

    /// Every connector that was tried stalled.
    #[error("all providers timed out: {capability}")]
    AllProvidersTimedOut {
        /// Capability label that was requested.
        capability: String,
    },
}

impl EarnmoveError {
    /// `Unsupported` for a capability label.
    #[must_use]
    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
        }
    }

    /// `Connector` error attributed to `connector`.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// `NotFound` with a description such as `"snapshot for MSFT"`.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// `ProviderTimeout` for one connector and capability.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Whether a user should be told about this error.
    ///
    /// An unknown ticker or a capability nobody offers is expected and is not
    /// actionable. An aggregate is actionable if any attempt inside it is.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::Unsupported { .. } | Self::NotFound { .. } => false,
            Self::AllProvidersFailed(attempts) => attempts.iter().any(Self::is_actionable),
            _ => true,
        }
    }
}
