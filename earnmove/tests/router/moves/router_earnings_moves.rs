use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use earnmove::{AlignmentFailure, Earnmove, EarnmoveError, Session};
use earnmove_mock::{DynamicMockConnector, MockBehavior, MockConnector as FixtureConnector};
use rust_decimal::Decimal;

use crate::helpers::{AAPL, MSFT, MockConnector, date, event, series, sym};

fn pct(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn fixtures() -> Earnmove {
    Earnmove::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn fixture_moves_for_aapl() {
    let report = fixtures().earnings_moves(&sym(AAPL)).await.unwrap();

    let got: Vec<Option<Decimal>> = report.results.iter().map(|r| r.pct_change()).collect();
    assert_eq!(
        got,
        vec![
            None,
            Some(pct("-3.12")),
            Some(pct("-1.00")),
            Some(pct("8.32")),
            Some(pct("0.79")),
        ]
    );
    assert_eq!(
        report.results[0].failure(),
        Some(AlignmentFailure::NoReferenceDay)
    );

    let rows = report.table_rows();
    assert_eq!(rows[0].price_date, "N/A");
    assert_eq!(rows[0].change, "N/A");
    assert_eq!(rows[3].change, "8.32%");

    let bars = report.chart_bars();
    assert_eq!(bars.len(), 4);
    assert!(bars.windows(2).all(|w| w[0].label < w[1].label));
}

#[tokio::test]
async fn fixture_moves_for_msft() {
    let report = fixtures().earnings_moves(&sym(MSFT)).await.unwrap();
    let got: Vec<Decimal> = report
        .results
        .iter()
        .filter_map(|r| r.pct_change())
        .collect();
    assert_eq!(
        got,
        vec![pct("0.13"), pct("-1.96"), pct("-0.67"), pct("-2.96")]
    );
    assert!(!report.is_unavailable());
}

#[tokio::test]
async fn events_are_truncated_to_limit() {
    let events = vec![
        event(2024, 5, 3, Session::BeforeMarket),
        event(2024, 5, 2, Session::AfterMarket),
        event(2024, 5, 1, Session::AfterMarket),
    ];
    // ignores `limit` on purpose so the orchestrator has to cut
    let c = MockConnector::builder()
        .returns_earnings_ok(events)
        .returns_history_ok(series(&[
            (2024, 5, 1, "100"),
            (2024, 5, 2, "110"),
            (2024, 5, 3, "121"),
        ]))
        .build();
    let em = Earnmove::builder()
        .with_connector(c)
        .earnings_limit(2)
        .build()
        .unwrap();

    let report = em.earnings_moves(&sym(AAPL)).await.unwrap();
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].earnings_date, date(2024, 5, 3));
    assert_eq!(report.results[0].pct_change(), Some(pct("10.00")));
    assert_eq!(report.results[1].pct_change(), Some(pct("21.00")));
}

#[tokio::test]
async fn capabilities_can_come_from_different_connectors() {
    let cal = MockConnector::builder()
        .name("calendar")
        .returns_earnings_ok(vec![event(2024, 5, 2, Session::AfterMarket)])
        .build();
    let prices = MockConnector::builder()
        .name("prices")
        .returns_history_ok(series(&[
            (2024, 5, 1, "50"),
            (2024, 5, 2, "48"),
            (2024, 5, 3, "45"),
        ]))
        .build();
    let em = Earnmove::builder()
        .with_connector(cal.clone())
        .with_connector(prices.clone())
        .build()
        .unwrap();

    let report = em.earnings_moves(&sym(AAPL)).await.unwrap();
    assert_eq!(report.results[0].pct_change(), Some(pct("-10.00")));
    assert_eq!(cal.call_count(), 1);
    assert_eq!(prices.call_count(), 1);
}

#[tokio::test]
async fn history_failure_fails_the_report() {
    let c = MockConnector::builder()
        .returns_earnings_ok(vec![event(2024, 5, 2, Session::AfterMarket)])
        .with_history_fn(|s, _| Err(EarnmoveError::not_found(format!("price history for {s}"))))
        .build();
    let em = Earnmove::builder().with_connector(c).build().unwrap();

    let err = em.earnings_moves(&sym(AAPL)).await.unwrap_err();
    assert_eq!(err, EarnmoveError::not_found("price history for AAPL"));
}

#[tokio::test]
async fn empty_calendar_yields_empty_report() {
    let c = MockConnector::builder()
        .returns_earnings_ok(vec![])
        .returns_history_ok(series(&[(2024, 5, 2, "50")]))
        .build();
    let em = Earnmove::builder().with_connector(c).build().unwrap();

    let report = em.earnings_moves(&sym(AAPL)).await.unwrap();
    assert!(report.results.is_empty());
    assert!(report.is_unavailable());
    assert_eq!(report.summary().average_abs_move, None);
}

#[tokio::test(start_paused = true)]
async fn calendar_and_history_are_fetched_concurrently() {
    let c = MockConnector::builder()
        .delay(Duration::from_millis(60))
        .returns_earnings_ok(vec![event(2024, 5, 2, Session::AfterMarket)])
        .returns_history_ok(series(&[(2024, 5, 1, "100"), (2024, 5, 3, "101")]))
        .build();
    // sequential fetches would take 120ms
    let em = Earnmove::builder()
        .with_connector(c)
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let start = tokio::time::Instant::now();
    let report = em.earnings_moves(&sym(AAPL)).await.unwrap();
    assert!(start.elapsed() < Duration::from_millis(120));
    assert_eq!(report.results[0].pct_change(), Some(pct("1.00")));
}

#[tokio::test(start_paused = true)]
async fn hanging_calendar_times_out() {
    let (c, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_earnings_behavior(sym(AAPL), MockBehavior::Hang).await;
    ctl.set_history_behavior(sym(AAPL), MockBehavior::Return(series(&[(2024, 5, 2, "1")])))
        .await;
    let em = Earnmove::builder()
        .with_connector(c)
        .provider_timeout(Duration::from_millis(30))
        .build()
        .unwrap();

    let err = em.earnings_moves(&sym(AAPL)).await.unwrap_err();
    assert_eq!(
        err,
        EarnmoveError::AllProvidersTimedOut {
            capability: "earnings-calendar".into()
        }
    );
}

#[tokio::test]
async fn many_splits_reports_and_failures() {
    let symbols = vec![sym(AAPL), sym("FAIL"), sym(MSFT), sym("ZZZZ")];
    let (reports, failures) = fixtures().earnings_moves_many(&symbols).await;

    let ok: Vec<&str> = reports.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(ok, vec![AAPL, MSFT]);

    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].0, sym("FAIL"));
    assert!(failures[0].1.is_actionable());
    assert_eq!(failures[1].0, sym("ZZZZ"));
    assert!(matches!(failures[1].1, EarnmoveError::NotFound { .. }));
}
