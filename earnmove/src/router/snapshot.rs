use earnmove_core::{EarnmoveError, QuoteSnapshot, SummaryTables, Symbol};

use crate::Earnmove;
use crate::router::macros::earnmove_router_method;

impl Earnmove {
    earnmove_router_method! {
        /// Fetch the quote and company profile fields for a symbol.
        method: snapshot(symbol: &Symbol) -> QuoteSnapshot,
        accessor: as_snapshot_provider,
        capability: "snapshot",
        not_found: "snapshot",
        call: snapshot(symbol)
    }

    /// Fetch a snapshot and render the Stock Info, Price Info and Business Metrics tables.
    ///
    /// Missing fields render as `"N/A"`; only a failed fetch is an error.
    ///
    /// # Errors
    /// Returns an error if no connector succeeds or none support snapshots.
    pub async fn summary_tables(&self, symbol: &Symbol) -> Result<SummaryTables, EarnmoveError> {
        let snap = self.snapshot(symbol).await?;
        Ok(SummaryTables::from_snapshot(&snap))
    }
}
