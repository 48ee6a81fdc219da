//! Time-series utilities shared by connectors and the orchestrator.
//!
//! - `daily`: collapse timestamped bars into one close per exchange-local date
//! - `infer`: detect sub-daily cadence
/// Intraday-to-daily collapse.
pub mod daily;
/// Cadence detection helpers.
pub mod infer;
