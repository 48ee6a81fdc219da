use earnmove_core::{
    EarningsEvent, EarningsMovesReport, EarnmoveError, HistoryRequest, Symbol, align_and_compute,
};

use crate::Earnmove;
use crate::router::macros::earnmove_router_method;

impl Earnmove {
    earnmove_router_method! {
        /// Fetch up to `limit` of the most recent earnings announcements.
        method: earnings_events(symbol: &Symbol, limit: usize) -> Vec<EarningsEvent>,
        accessor: as_earnings_calendar_provider,
        capability: "earnings-calendar",
        not_found: "earnings calendar",
        call: earnings_events(symbol, limit)
    }

    /// Align the most recent earnings announcements with daily closes.
    ///
    /// The calendar and the trailing history window are fetched concurrently, each
    /// through the usual provider fallback. Events beyond the configured limit are
    /// dropped; per-event alignment failures stay inside the report.
    ///
    /// # Errors
    /// Returns an error if either fetch fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "earnmove::router", skip(self, symbol), fields(symbol = %symbol))
    )]
    pub async fn earnings_moves(&self, symbol: &Symbol) -> Result<EarningsMovesReport, EarnmoveError> {
        let limit = self.cfg.earnings_limit;
        let req = HistoryRequest::daily(self.cfg.history_range);
        let (events, series) = tokio::join!(
            self.earnings_events(symbol, limit),
            self.history(symbol, req)
        );
        let mut events = events?;
        let series = series?;
        events.truncate(limit);

        let results = align_and_compute(&series, &events);
        #[cfg(feature = "tracing")]
        tracing::info!(
            target: "earnmove::router",
            symbol = %symbol,
            events = results.len(),
            aligned = results.iter().filter(|r| r.is_aligned()).count(),
            "earnings moves computed"
        );
        Ok(EarningsMovesReport::new(symbol.clone(), results))
    }

    /// Compute earnings moves for several symbols concurrently.
    ///
    /// Returns `(reports, failures)` so one bad ticker does not sink the batch.
    pub async fn earnings_moves_many(
        &self,
        symbols: &[Symbol],
    ) -> (Vec<EarningsMovesReport>, Vec<(Symbol, EarnmoveError)>) {
        let tasks = symbols.iter().map(|s| async move { (s, self.earnings_moves(s).await) });
        let results = futures::future::join_all(tasks).await;

        let mut reports = Vec::new();
        let mut failures = Vec::new();
        for (symbol, res) in results {
            match res {
                Ok(r) => reports.push(r),
                Err(e) => failures.push((symbol.clone(), e)),
            }
        }
        (reports, failures)
    }
}
