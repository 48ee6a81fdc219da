//! earnmove-core
//!
//! Core types, traits, and pure computations shared across the earnmove ecosystem.
//!
//! - `model`: price points, daily and chart series, and earnings events.
//! - `align`: the trading-day aligner and close-to-close move calculator.
//! - `report`: table rows, chart bars, and summary statistics built from alignment results.
//! - `snapshot` / `format`: loosely-typed quote records and their display rules.
//! - `connector`: the `MoveConnector` trait and capability provider traits.
//! - `timeseries`: intraday-to-daily collapse and cadence detection.
//!
//! Everything except `connector` is synchronous and side-effect free.
#![warn(missing_docs)]

/// Trading-day alignment and percent move computation.
pub mod align;
/// Connector capability traits and the primary `MoveConnector` interface.
pub mod connector;
/// Display formatting for prices, ratios, percentages, and compact dollar amounts.
pub mod format;
pub mod model;
/// Render models for earnings moves.
pub mod report;
/// Loosely-typed quote records with per-field fallback rules.
pub mod snapshot;
/// Time-series helpers for collapsing bars into daily closes.
pub mod timeseries;

pub use align::{
    AlignmentFailure, AlignmentResult, EarningsMove, align_and_compute, align_event,
    percent_change,
};
pub use connector::MoveConnector;
pub use earnmove_types::{
    ChartPeriod, EarnmoveError, HistoryRequest, Interval, MovesConfig, Range, Session, Symbol,
};
pub use model::{Bar, ChartSeries, EarningsEvent, PricePoint, PriceSeries};
pub use report::{BarTone, EarningsMovesReport, MoveBar, MoveRow, MovesSummary};
pub use snapshot::{FieldFormat, FieldValue, QuoteSnapshot, SummaryRow, SummaryTable, SummaryTables};
pub use timeseries::daily::daily_closes;
pub use timeseries::infer::is_subdaily;

pub use chrono_tz::Tz;
pub use rust_decimal::Decimal;
