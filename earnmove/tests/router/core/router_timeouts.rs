use std::time::Duration;

use earnmove::{Earnmove, EarnmoveError, QuoteSnapshot};
use earnmove_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{AAPL, MockConnector, sym};

#[tokio::test(start_paused = true)]
async fn hanging_providers_time_out() {
    let (p0, c0) = DynamicMockConnector::new_with_controller("p0");
    let (p1, c1) = DynamicMockConnector::new_with_controller("p1");
    c0.set_snapshot_behavior(sym(AAPL), MockBehavior::Hang).await;
    c1.set_snapshot_behavior(sym(AAPL), MockBehavior::Hang).await;

    let em = Earnmove::builder()
        .with_connector(p0)
        .with_connector(p1)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = em.snapshot(&sym(AAPL)).await.unwrap_err();
    assert_eq!(
        err,
        EarnmoveError::AllProvidersTimedOut {
            capability: "snapshot".into()
        }
    );
    assert_eq!(c0.calls().await.len(), 1);
    assert_eq!(c1.calls().await.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn timeout_then_fallback_success() {
    let (slow, ctl) = DynamicMockConnector::new_with_controller("slow");
    ctl.set_snapshot_behavior(sym(AAPL), MockBehavior::<QuoteSnapshot>::Hang)
        .await;
    let fast = MockConnector::builder()
        .name("fast")
        .returns_snapshot_ok(QuoteSnapshot::new().with_text("longName", "fast"))
        .build();

    let em = Earnmove::builder()
        .with_connector(slow)
        .with_connector(fast)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let snap = em.snapshot(&sym(AAPL)).await.unwrap();
    assert_eq!(snap.long_name(), Some("fast"));
}

#[tokio::test(start_paused = true)]
async fn slow_but_in_time_provider_succeeds() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_millis(40))
        .returns_snapshot_ok(QuoteSnapshot::new())
        .build();
    let em = Earnmove::builder()
        .with_connector(slow)
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    assert!(em.snapshot(&sym(AAPL)).await.is_ok());
}
