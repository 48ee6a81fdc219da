use std::sync::Arc;
use std::time::Duration;

use earnmove::{Earnmove, EarnmoveError, MovesConfig, Range};
use earnmove_mock::MockConnector;

#[test]
fn build_without_connectors_is_invalid() {
    let err = Earnmove::builder().build().err().unwrap();
    assert!(matches!(err, EarnmoveError::InvalidArg(_)));
}

#[test]
fn builder_setters_reach_config() {
    let em = Earnmove::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .earnings_limit(8)
        .history_range(Range::Y5)
        .provider_timeout(Duration::from_millis(250))
        .build()
        .unwrap();
    let cfg = em.config();
    assert_eq!(cfg.earnings_limit, 8);
    assert_eq!(cfg.history_range, Range::Y5);
    assert_eq!(cfg.provider_timeout, Duration::from_millis(250));
}

#[test]
fn earnings_limit_is_clamped() {
    let hi = Earnmove::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .earnings_limit(500)
        .build()
        .unwrap();
    assert_eq!(hi.config().earnings_limit, MovesConfig::MAX_EARNINGS_LIMIT);

    let lo = Earnmove::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .config(MovesConfig {
            earnings_limit: 0,
            ..MovesConfig::default()
        })
        .build()
        .unwrap();
    assert_eq!(lo.config().earnings_limit, MovesConfig::MIN_EARNINGS_LIMIT);
}

#[test]
fn config_from_json_feeds_builder() {
    let cfg: MovesConfig = serde_json::from_str(r#"{ "earnings_limit": 4 }"#).unwrap();
    let em = Earnmove::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .config(cfg)
        .build()
        .unwrap();
    assert_eq!(em.config().earnings_limit, 4);
    assert_eq!(em.config().history_range, Range::Y3);
}
