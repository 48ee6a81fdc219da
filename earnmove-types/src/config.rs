//! Configuration shared by the orchestrator and connectors.

use std::time::Duration;

use crate::period::Range;
use serde::{Deserialize, Serialize};

/// Global configuration for the `Earnmove` orchestrator.
///
/// Missing fields deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovesConfig {
    /// Maximum number of most recent earnings events requested per symbol.
    pub earnings_limit: usize,
    /// Trailing window of daily closes fetched for earnings alignment.
    pub history_range: Range,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
}

impl MovesConfig {
    /// Smallest accepted `earnings_limit`.
    pub const MIN_EARNINGS_LIMIT: usize = 1;
    /// Largest accepted `earnings_limit`.
    pub const MAX_EARNINGS_LIMIT: usize = 40;

    /// Return a copy with `earnings_limit` clamped into the accepted range.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.earnings_limit = self
            .earnings_limit
            .clamp(Self::MIN_EARNINGS_LIMIT, Self::MAX_EARNINGS_LIMIT);
        self
    }
}

impl Default for MovesConfig {
    fn default() -> Self {
        Self {
            earnings_limit: 12,
            history_range: Range::Y3,
            provider_timeout: Duration::from_secs(5),
        }
    }
}
