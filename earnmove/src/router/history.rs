use earnmove_core::{ChartPeriod, ChartSeries, EarnmoveError, HistoryRequest, PriceSeries, Symbol};

use crate::Earnmove;
use crate::router::macros::earnmove_router_method;

impl Earnmove {
    earnmove_router_method! {
        /// Fetch daily closes for an explicit range and interval.
        ///
        /// Intraday intervals come back collapsed to one close per exchange-local date.
        method: history(symbol: &Symbol, req: HistoryRequest) -> PriceSeries,
        accessor: as_price_history_provider,
        capability: "price-history",
        not_found: "price history",
        call: price_history(symbol, req)
    }

    earnmove_router_method! {
        /// Fetch timestamped closes at the requested spacing, keeping intraday bars.
        method: chart_history(symbol: &Symbol, req: HistoryRequest) -> ChartSeries,
        accessor: as_price_history_provider,
        capability: "price-history",
        not_found: "price history",
        call: chart_history(symbol, req)
    }

    /// Fetch the chart series behind a period selector (`1D` .. `5Y`).
    ///
    /// `1D` keeps its hourly bars; longer periods use the provider's spacing.
    ///
    /// # Errors
    /// Returns an error if no connector succeeds or none support price history.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "earnmove::router",
            skip(self, symbol, period),
            fields(symbol = %symbol, period = %period),
        )
    )]
    pub async fn price_history(
        &self,
        symbol: &Symbol,
        period: ChartPeriod,
    ) -> Result<ChartSeries, EarnmoveError> {
        self.chart_history(symbol, period.history_request()).await
    }
}
