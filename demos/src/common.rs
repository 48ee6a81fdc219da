use std::sync::Arc;

use earnmove::{MoveConnector, Symbol};
use tracing_subscriber::EnvFilter;

/// Return a connector for demos.
///
/// Only the fixture connector ships with the workspace, so demos always run offline.
#[must_use]
pub fn get_connector() -> Arc<dyn MoveConnector> {
    Arc::new(earnmove_mock::MockConnector::new())
}

/// Install an env-filtered subscriber. Suggested: `RUST_LOG=info,earnmove=debug`.
///
/// A subscriber that is already installed is kept, so calling this twice is harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}

/// Ticker from the first CLI argument, `AAPL` when none is given.
///
/// # Errors
/// Returns `InvalidArg` if the argument is blank or contains whitespace.
pub fn ticker_from_args() -> Result<Symbol, earnmove::EarnmoveError> {
    let raw = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());
    Symbol::new(&raw)
}
