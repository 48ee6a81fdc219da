//! Time-range vocabulary for history requests and the price chart selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EarnmoveError;

/// Trailing window of history to request from a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Range {
    /// One trading day.
    D1,
    /// Five trading days.
    D5,
    /// One month.
    M1,
    /// Six months.
    M6,
    /// Year to date.
    Ytd,
    /// One year.
    Y1,
    /// Three years.
    Y3,
    /// Five years.
    Y5,
}

impl Range {
    /// Provider-style range code (`"1d"`, `"6mo"`, `"ytd"`, ...).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::M1 => "1mo",
            Self::M6 => "6mo",
            Self::Ytd => "ytd",
            Self::Y1 => "1y",
            Self::Y3 => "3y",
            Self::Y5 => "5y",
        }
    }
}

/// Bar spacing of a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Interval {
    /// Hourly bars.
    H1,
    /// Daily bars.
    D1,
    /// Weekly bars.
    W1,
    /// Monthly bars.
    Mo1,
    /// Quarterly bars.
    Mo3,
}

impl Interval {
    /// Provider-style interval code (`"1h"`, `"1d"`, `"1wk"`, ...).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::H1 => "1h",
            Self::D1 => "1d",
            Self::W1 => "1wk",
            Self::Mo1 => "1mo",
            Self::Mo3 => "3mo",
        }
    }

    /// True for bar spacings shorter than one day.
    #[must_use]
    pub const fn is_intraday(self) -> bool {
        matches!(self, Self::H1)
    }
}

/// A history request: how far back and at which spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// Trailing window.
    pub range: Range,
    /// Bar spacing.
    pub interval: Interval,
}

impl HistoryRequest {
    /// Build a request from a range and interval.
    #[must_use]
    pub const fn new(range: Range, interval: Interval) -> Self {
        Self { range, interval }
    }

    /// Daily closes over `range`, the shape used for earnings alignment.
    #[must_use]
    pub const fn daily(range: Range) -> Self {
        Self::new(range, Interval::D1)
    }
}

/// Time frame offered by the price chart selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartPeriod {
    /// `1D`: one day of hourly bars.
    D1,
    /// `5D`: five days of daily bars.
    D5,
    /// `1M`: one month of daily bars.
    #[default]
    M1,
    /// `6M`: six months of weekly bars.
    M6,
    /// `YTD`: year to date in monthly bars.
    Ytd,
    /// `1Y`: one year of monthly bars.
    Y1,
    /// `5Y`: five years of quarterly bars.
    Y5,
}

impl ChartPeriod {
    /// Every period in selector order.
    pub const ALL: [Self; 7] = [
        Self::D1,
        Self::D5,
        Self::M1,
        Self::M6,
        Self::Ytd,
        Self::Y1,
        Self::Y5,
    ];

    /// Selector label (`"1D"`, `"YTD"`, ...).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::D1 => "1D",
            Self::D5 => "5D",
            Self::M1 => "1M",
            Self::M6 => "6M",
            Self::Ytd => "YTD",
            Self::Y1 => "1Y",
            Self::Y5 => "5Y",
        }
    }

    /// History request backing this chart period.
    #[must_use]
    pub const fn history_request(self) -> HistoryRequest {
        match self {
            Self::D1 => HistoryRequest::new(Range::D1, Interval::H1),
            Self::D5 => HistoryRequest::new(Range::D5, Interval::D1),
            Self::M1 => HistoryRequest::new(Range::M1, Interval::D1),
            Self::M6 => HistoryRequest::new(Range::M6, Interval::W1),
            Self::Ytd => HistoryRequest::new(Range::Ytd, Interval::Mo1),
            Self::Y1 => HistoryRequest::new(Range::Y1, Interval::Mo1),
            Self::Y5 => HistoryRequest::new(Range::Y5, Interval::Mo3),
        }
    }
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartPeriod {
    type Err = EarnmoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EarnmoveError::InvalidArg(format!("unknown chart period: {wanted:?}")))
    }
}
