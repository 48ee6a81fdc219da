//! Deterministic connectors for tests and demos.
//!
//! - [`MockConnector`] serves static fixtures for `AAPL` and `MSFT`. The symbol
//!   `FAIL` errors on every capability and any other symbol is not found.
//!   Hourly requests get the bars of the 2024-11-01 session.
//! - [`DynamicMockConnector`] defers every call to rules set through a
//!   [`DynamicMockController`], including hanging forever to exercise timeouts.
use async_trait::async_trait;
use earnmove_core::connector::{
    EarningsCalendarProvider, MoveConnector, PriceHistoryProvider, SnapshotProvider,
};
use earnmove_core::{
    Bar, ChartSeries, EarningsEvent, EarnmoveError, HistoryRequest, PriceSeries, QuoteSnapshot,
    Symbol, Tz,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector name used when tagging errors.
    pub const NAME: &'static str = "earnmove-mock";

    /// Create the fixture connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> EarnmoveError {
        EarnmoveError::not_found(what.to_string())
    }

    /// Exchange time zone of every fixture symbol.
    pub const TZ: Tz = Tz::America__New_York;

    fn hourly(s: &str) -> Result<Vec<Bar>, EarnmoveError> {
        fixtures::history::hourly_by_symbol(s)
            .ok_or_else(|| Self::not_found(&format!("price history for {s}")))
    }

    fn daily(s: &str) -> Result<PriceSeries, EarnmoveError> {
        fixtures::history::by_symbol(s)
            .ok_or_else(|| Self::not_found(&format!("price history for {s}")))
    }

    fn maybe_fail(symbol: &str, capability: &'static str) -> Result<(), EarnmoveError> {
        if symbol == "FAIL" {
            return Err(EarnmoveError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

impl MoveConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_price_history_provider(&self) -> Option<&dyn PriceHistoryProvider> {
        Some(self as &dyn PriceHistoryProvider)
    }

    fn as_earnings_calendar_provider(&self) -> Option<&dyn EarningsCalendarProvider> {
        Some(self as &dyn EarningsCalendarProvider)
    }

    fn as_snapshot_provider(&self) -> Option<&dyn SnapshotProvider> {
        Some(self as &dyn SnapshotProvider)
    }
}

#[async_trait]
impl PriceHistoryProvider for MockConnector {
    async fn price_history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<PriceSeries, EarnmoveError> {
        let s = symbol.as_str();
        Self::maybe_fail(s, "price-history")?;
        if req.interval.is_intraday() {
            return Ok(PriceSeries::from_bars(Self::hourly(s)?, Self::TZ));
        }
        Self::daily(s)
    }

    async fn chart_history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<ChartSeries, EarnmoveError> {
        let s = symbol.as_str();
        Self::maybe_fail(s, "price-history")?;
        if req.interval.is_intraday() {
            return Ok(ChartSeries::new(Self::hourly(s)?));
        }
        Ok(ChartSeries::from_daily(&Self::daily(s)?))
    }
}

#[async_trait]
impl EarningsCalendarProvider for MockConnector {
    async fn earnings_events(
        &self,
        symbol: &Symbol,
        limit: usize,
    ) -> Result<Vec<EarningsEvent>, EarnmoveError> {
        let s = symbol.as_str();
        Self::maybe_fail(s, "earnings-calendar")?;
        let mut events = fixtures::calendar::by_symbol(s)
            .ok_or_else(|| Self::not_found(&format!("earnings calendar for {s}")))?;
        events.truncate(limit);
        Ok(events)
    }
}

#[async_trait]
impl SnapshotProvider for MockConnector {
    async fn snapshot(&self, symbol: &Symbol) -> Result<QuoteSnapshot, EarnmoveError> {
        let s = symbol.as_str();
        Self::maybe_fail(s, "snapshot")?;
        fixtures::snapshot::by_symbol(s).ok_or_else(|| Self::not_found(&format!("snapshot for {s}")))
    }
}
