use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use earnmove_core::connector::{
    EarningsCalendarProvider, MoveConnector, PriceHistoryProvider, SnapshotProvider,
};
use earnmove_core::{
    EarningsEvent, EarnmoveError, HistoryRequest, PriceSeries, QuoteSnapshot, Symbol,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(EarnmoveError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    history_rules: HashMap<Symbol, MockBehavior<PriceSeries>>,
    earnings_rules: HashMap<Symbol, MockBehavior<Vec<EarningsEvent>>>,
    snapshot_rules: HashMap<Symbol, MockBehavior<QuoteSnapshot>>,
    calls: Vec<(&'static str, Symbol)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `price_history` calls for a specific symbol.
    pub async fn set_history_behavior(&self, symbol: Symbol, behavior: MockBehavior<PriceSeries>) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(symbol, behavior);
    }

    /// Set the behavior for `earnings_events` calls for a specific symbol.
    pub async fn set_earnings_behavior(
        &self,
        symbol: Symbol,
        behavior: MockBehavior<Vec<EarningsEvent>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.earnings_rules.insert(symbol, behavior);
    }

    /// Set the behavior for `snapshot` calls for a specific symbol.
    pub async fn set_snapshot_behavior(&self, symbol: Symbol, behavior: MockBehavior<QuoteSnapshot>) {
        let mut guard = self.state.lock().await;
        guard.snapshot_rules.insert(symbol, behavior);
    }

    /// Calls received so far as `(capability, symbol)`, in arrival order.
    pub async fn calls(&self) -> Vec<(&'static str, Symbol)> {
        self.state.lock().await.calls.clone()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.history_rules.clear();
        guard.earnings_rules.clear();
        guard.snapshot_rules.clear();
        guard.calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// A capability without a rule for the requested symbol answers `Unsupported`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn MoveConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn MoveConnector>, controller)
    }

    async fn resolve<T: Clone>(
        &self,
        capability: &'static str,
        symbol: &Symbol,
        pick: impl FnOnce(&InternalState) -> Option<MockBehavior<T>>,
    ) -> Result<T, EarnmoveError> {
        // Snapshot the rule without holding the lock across the hang
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push((capability, symbol.clone()));
            pick(&*guard)
        };

        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(EarnmoveError::unsupported(capability)),
        }
    }
}

impl MoveConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
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
impl PriceHistoryProvider for DynamicMockConnector {
    async fn price_history(
        &self,
        symbol: &Symbol,
        _req: HistoryRequest,
    ) -> Result<PriceSeries, EarnmoveError> {
        self.resolve("price-history", symbol, |s| s.history_rules.get(symbol).cloned())
            .await
    }
}

#[async_trait]
impl EarningsCalendarProvider for DynamicMockConnector {
    async fn earnings_events(
        &self,
        symbol: &Symbol,
        limit: usize,
    ) -> Result<Vec<EarningsEvent>, EarnmoveError> {
        let mut events = self
            .resolve("earnings-calendar", symbol, |s| s.earnings_rules.get(symbol).cloned())
            .await?;
        events.truncate(limit);
        Ok(events)
    }
}

#[async_trait]
impl SnapshotProvider for DynamicMockConnector {
    async fn snapshot(&self, symbol: &Symbol) -> Result<QuoteSnapshot, EarnmoveError> {
        self.resolve("snapshot", symbol, |s| s.snapshot_rules.get(symbol).cloned())
            .await
    }
}
