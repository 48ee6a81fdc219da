//! Earnmove-specific error, configuration, and vocabulary types shared by every crate.
#![warn(missing_docs)]

mod config;
mod error;
mod period;
mod session;
mod symbol;

pub use config::MovesConfig;
pub use error::EarnmoveError;
pub use period::{ChartPeriod, HistoryRequest, Interval, Range};
pub use session::Session;
pub use symbol::Symbol;
