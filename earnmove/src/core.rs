use std::sync::Arc;
use std::time::Duration;

use earnmove_core::{EarnmoveError, MoveConnector, MovesConfig, Range, Symbol};

/// Orchestrator that routes requests across registered connectors.
pub struct Earnmove {
    pub(crate) connectors: Vec<Arc<dyn MoveConnector>>,
    pub(crate) cfg: MovesConfig,
}

/// Builder for constructing an `Earnmove` orchestrator with custom configuration.
pub struct EarnmoveBuilder {
    connectors: Vec<Arc<dyn MoveConnector>>,
    cfg: MovesConfig,
}

impl Default for EarnmoveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EarnmoveBuilder {
    /// Create a new builder with default configuration and no connectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: MovesConfig::default(),
        }
    }

    /// Register a connector.
    ///
    /// Registration order is priority order: the first connector that advertises a
    /// capability is tried first, later ones only on failure.
    /// Duplicates are not deduplicated.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn MoveConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: MovesConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Number of most recent earnings events to align (clamped to 1..=40 on build).
    #[must_use]
    pub const fn earnings_limit(mut self, limit: usize) -> Self {
        self.cfg.earnings_limit = limit;
        self
    }

    /// Trailing window of daily closes fetched for alignment.
    #[must_use]
    pub const fn history_range(mut self, range: Range) -> Self {
        self.cfg.history_range = range;
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Build the `Earnmove` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via [`Self::with_connector`].
    pub fn build(self) -> Result<Earnmove, EarnmoveError> {
        if self.connectors.is_empty() {
            return Err(EarnmoveError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        Ok(Earnmove {
            connectors: self.connectors,
            cfg: self.cfg.normalized(),
        })
    }
}

/// Attribute a provider error to `connector` unless it is already structured.
pub(crate) fn tag_err(connector: &str, e: EarnmoveError) -> EarnmoveError {
    match e {
        e @ (EarnmoveError::NotFound { .. }
        | EarnmoveError::ProviderTimeout { .. }
        | EarnmoveError::Connector { .. }
        | EarnmoveError::AllProvidersTimedOut { .. }
        | EarnmoveError::AllProvidersFailed(_)) => e,
        other => EarnmoveError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Earnmove {
    /// Start building a new `Earnmove` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use earnmove::Earnmove;
    /// use earnmove_mock::MockConnector;
    ///
    /// let em = Earnmove::builder()
    ///     .with_connector(Arc::new(MockConnector::new()))
    ///     .earnings_limit(8)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> EarnmoveBuilder {
        EarnmoveBuilder::new()
    }

    /// Effective configuration after normalization.
    #[must_use]
    pub const fn config(&self) -> &MovesConfig {
        &self.cfg
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "earnmove::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, EarnmoveError>
    where
        Fut: core::future::Future<Output = Result<T, EarnmoveError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(EarnmoveError::provider_timeout(connector_name, capability)))
    }

    /// Try connectors in registration order until one succeeds.
    ///
    /// - Each call is bounded by the per-provider timeout.
    /// - Connectors for which `call` returns `None` do not advertise the capability
    ///   and are skipped; if none advertise it the result is `Unsupported`.
    /// - All `NotFound` collapses to `NotFound("{label} for {SYMBOL}")`, all
    ///   timeouts to `AllProvidersTimedOut`, anything else to `AllProvidersFailed`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "earnmove::core::fetch_single",
            skip(self, call),
            fields(symbol = %symbol, capability = %capability_label, not_found = %not_found_label),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        symbol: &Symbol,
        capability_label: &'static str,
        not_found_label: &'static str,
        call: F,
    ) -> Result<T, EarnmoveError>
    where
        T: Send,
        F: Fn(Arc<dyn MoveConnector>, Symbol) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, EarnmoveError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<EarnmoveError> = Vec::new();

        for c in &self.connectors {
            let Some(fut) = call(Arc::clone(c), symbol.clone()) else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                capability_label,
                self.cfg.provider_timeout,
                fut,
            )
            .await
            {
                Ok(v) => return Ok(v),
                Err(e @ (EarnmoveError::NotFound { .. } | EarnmoveError::ProviderTimeout { .. })) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(target: "earnmove::core", connector = c.name(), error = %e, "provider attempt failed");
                    errors.push(e);
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(target: "earnmove::core", connector = c.name(), error = %e, "provider attempt failed");
                    errors.push(tag_err(c.name(), e));
                }
            }
        }

        Err(collapse_errors(
            capability_label,
            attempted_any,
            errors,
            format!("{not_found_label} for {symbol}"),
        ))
    }
}

/// Collapse a set of provider errors into a uniform `EarnmoveError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If all errors are `ProviderTimeout` → `AllProvidersTimedOut(capability)`.
/// - If all errors are `NotFound` → `NotFound(not_found_what)`.
/// - Else → `AllProvidersFailed(errors)`.
pub(crate) fn collapse_errors(
    capability: &str,
    attempted_any: bool,
    errors: Vec<EarnmoveError>,
    not_found_what: String,
) -> EarnmoveError {
    if !attempted_any {
        return EarnmoveError::unsupported(capability);
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, EarnmoveError::ProviderTimeout { .. }))
    {
        return EarnmoveError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, EarnmoveError::NotFound { .. }))
    {
        return EarnmoveError::not_found(not_found_what);
    }
    EarnmoveError::AllProvidersFailed(errors)
}
