use async_trait::async_trait;

use crate::EarnmoveError;
use crate::model::{ChartSeries, EarningsEvent, PriceSeries};
use crate::snapshot::QuoteSnapshot;
use earnmove_types::{HistoryRequest, Symbol};

/// Focused role trait for connectors that provide closing-price history.
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Fetch daily closes for `symbol` over the requested window.
    ///
    /// Intraday requests are expected to come back collapsed to one close per
    /// exchange-local date (see [`PriceSeries::from_bars`]).
    async fn price_history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<PriceSeries, EarnmoveError>;

    /// Fetch timestamped closes for a price chart at the requested spacing.
    ///
    /// Defaults to the daily closes of [`Self::price_history`]; connectors with
    /// intraday data override this to keep every bar.
    async fn chart_history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<ChartSeries, EarnmoveError> {
        let daily = self.price_history(symbol, req).await?;
        Ok(ChartSeries::from_daily(&daily))
    }
}

/// Focused role trait for connectors that provide earnings announcement dates.
#[async_trait]
pub trait EarningsCalendarProvider: Send + Sync {
    /// Fetch up to `limit` of the most recent earnings events for `symbol`.
    async fn earnings_events(
        &self,
        symbol: &Symbol,
        limit: usize,
    ) -> Result<Vec<EarningsEvent>, EarnmoveError>;
}

/// Focused role trait for connectors that provide quote/profile snapshots.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Fetch the current quote and company profile fields for `symbol`.
    async fn snapshot(&self, symbol: &Symbol) -> Result<QuoteSnapshot, EarnmoveError>;
}

/// Umbrella connector trait.
///
/// A connector advertises each capability by returning a trait object from the
/// matching `as_*_provider` accessor. The orchestrator skips connectors that
/// return `None`.
pub trait MoveConnector: Send + Sync {
    /// A stable identifier used when tagging errors (e.g. `"earnmove-mock"`).
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise price history capability.
    fn as_price_history_provider(&self) -> Option<&dyn PriceHistoryProvider> {
        None
    }

    /// Advertise earnings calendar capability.
    fn as_earnings_calendar_provider(&self) -> Option<&dyn EarningsCalendarProvider> {
        None
    }

    /// Advertise quote snapshot capability.
    fn as_snapshot_provider(&self) -> Option<&dyn SnapshotProvider> {
        None
    }
}
