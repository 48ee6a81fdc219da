use earnmove::{Earnmove, EarnmoveError, QuoteSnapshot};

use crate::helpers::{AAPL, MockConnector, sym};

fn named(name: &str) -> QuoteSnapshot {
    QuoteSnapshot::new().with_text("longName", name)
}

#[tokio::test]
async fn first_registered_success_wins() {
    let a = MockConnector::builder()
        .name("a")
        .returns_snapshot_ok(named("from a"))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .returns_snapshot_ok(named("from b"))
        .build();

    let em = Earnmove::builder()
        .with_connector(a.clone())
        .with_connector(b.clone())
        .build()
        .unwrap();

    let snap = em.snapshot(&sym(AAPL)).await.unwrap();
    assert_eq!(snap.long_name(), Some("from a"));
    assert_eq!(b.call_count(), 0);
}

#[tokio::test]
async fn falls_back_after_failure() {
    let bad = MockConnector::builder()
        .name("bad")
        .with_snapshot_fn(|_| Err(EarnmoveError::Other("boom".into())))
        .build();
    let good = MockConnector::builder()
        .name("good")
        .returns_snapshot_ok(named("from good"))
        .build();

    let em = Earnmove::builder()
        .with_connector(bad.clone())
        .with_connector(good)
        .build()
        .unwrap();

    let snap = em.snapshot(&sym(AAPL)).await.unwrap();
    assert_eq!(snap.long_name(), Some("from good"));
    assert_eq!(bad.call_count(), 1);
}

#[tokio::test]
async fn connectors_without_capability_are_skipped() {
    let history_only = MockConnector::builder()
        .name("history_only")
        .returns_history_ok(Default::default())
        .build();
    let snap = MockConnector::builder()
        .name("snap")
        .returns_snapshot_ok(named("ok"))
        .build();

    let em = Earnmove::builder()
        .with_connector(history_only.clone())
        .with_connector(snap)
        .build()
        .unwrap();

    assert!(em.snapshot(&sym(AAPL)).await.is_ok());
    assert_eq!(history_only.call_count(), 0);
}

#[tokio::test]
async fn no_capable_connector_is_unsupported() {
    let history_only = MockConnector::builder()
        .returns_history_ok(Default::default())
        .build();
    let em = Earnmove::builder()
        .with_connector(history_only)
        .build()
        .unwrap();

    let err = em.snapshot(&sym(AAPL)).await.unwrap_err();
    assert_eq!(err, EarnmoveError::unsupported("snapshot"));
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let a = MockConnector::builder()
        .name("a")
        .with_snapshot_fn(|s| Err(EarnmoveError::not_found(format!("snapshot for {s}"))))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .with_snapshot_fn(|_| Err(EarnmoveError::not_found("nothing")))
        .build();
    let em = Earnmove::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = em.snapshot(&sym("zzzz")).await.unwrap_err();
    assert_eq!(err, EarnmoveError::not_found("snapshot for ZZZZ"));
    assert!(!err.is_actionable());
}

#[tokio::test]
async fn mixed_failures_are_aggregated_and_tagged() {
    let a = MockConnector::builder()
        .name("a")
        .with_snapshot_fn(|_| Err(EarnmoveError::Data("garbled".into())))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .with_snapshot_fn(|_| Err(EarnmoveError::not_found("nothing")))
        .build();
    let em = Earnmove::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = em.snapshot(&sym(AAPL)).await.unwrap_err();
    let EarnmoveError::AllProvidersFailed(errors) = err else {
        panic!("expected aggregate, got {err:?}");
    };
    assert_eq!(errors.len(), 2);
    assert!(matches!(
        &errors[0],
        EarnmoveError::Connector { connector, msg } if connector == "a" && msg.contains("garbled")
    ));
    assert!(matches!(&errors[1], EarnmoveError::NotFound { .. }));
}
