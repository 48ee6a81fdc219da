//! Earnmove measures how a stock's closing price moved around its earnings
//! announcements, using whatever market data connectors you register.
//!
//! Overview
//! - Routes requests to connectors implementing the `earnmove_core` provider traits.
//! - Tries connectors in registration order with a per-provider timeout and
//!   aggregates their errors (`NotFound`, `AllProvidersTimedOut`, `AllProvidersFailed`).
//! - Fetches the earnings calendar and trailing daily closes concurrently, then runs
//!   the trading-day aligner and returns a render-ready report.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use earnmove::{Earnmove, Symbol};
//! use earnmove_mock::MockConnector;
//!
//! let em = Earnmove::builder()
//!     .with_connector(Arc::new(MockConnector::new()))
//!     .build()?;
//! let report = em.earnings_moves(&Symbol::new("AAPL")?).await?;
//! for row in report.table_rows() {
//!     println!("{} {} {}", row.earnings_date, row.price_date, row.change);
//! }
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Earnmove, EarnmoveBuilder};

// Re-export core types for convenience
pub use earnmove_core::{
    AlignmentFailure, AlignmentResult, Bar, BarTone, ChartPeriod, ChartSeries, EarningsEvent,
    EarningsMove, EarningsMovesReport, EarnmoveError, HistoryRequest, Interval, MoveBar,
    MoveConnector, MoveRow, MovesConfig, MovesSummary, PricePoint, PriceSeries, QuoteSnapshot,
    Range, Session, SummaryTable, SummaryTables, Symbol,
};
