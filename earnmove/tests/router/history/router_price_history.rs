use std::sync::{Arc, Mutex};

use earnmove::{ChartPeriod, Earnmove, EarnmoveError, HistoryRequest, Interval, Range};
use earnmove_mock::MockConnector as FixtureConnector;
use rust_decimal::Decimal;

use crate::helpers::{AAPL, MSFT, MockConnector, date, series, sym};

#[tokio::test]
async fn chart_period_maps_to_history_request() {
    let seen: Arc<Mutex<Vec<HistoryRequest>>> = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    let c = MockConnector::builder()
        .with_history_fn(move |_s, req| {
            log.lock().unwrap().push(req);
            Ok(series(&[(2024, 5, 1, "100"), (2024, 5, 2, "101")]))
        })
        .build();
    let em = Earnmove::builder().with_connector(c).build().unwrap();

    for period in ChartPeriod::ALL {
        em.price_history(&sym(AAPL), period).await.unwrap();
    }

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen.len(), ChartPeriod::ALL.len());
    assert_eq!(seen[0], HistoryRequest::new(Range::D1, Interval::H1));
    assert_eq!(seen[2], HistoryRequest::new(Range::M1, Interval::D1));
    assert_eq!(seen[6], HistoryRequest::new(Range::Y5, Interval::Mo3));
}

#[tokio::test]
async fn history_returns_provider_series() {
    let c = MockConnector::builder()
        .returns_history_ok(series(&[(2024, 5, 2, "101"), (2024, 5, 1, "100")]))
        .build();
    let em = Earnmove::builder().with_connector(c).build().unwrap();

    let s = em
        .history(&sym(AAPL), HistoryRequest::daily(Range::Y1))
        .await
        .unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s.first().map(|p| p.date), Some(date(2024, 5, 1)));
}

#[tokio::test]
async fn history_not_found_names_symbol() {
    let c = MockConnector::builder()
        .with_history_fn(|_, _| Err(EarnmoveError::not_found("whatever")))
        .build();
    let em = Earnmove::builder().with_connector(c).build().unwrap();

    let err = em
        .price_history(&sym("nope"), ChartPeriod::M1)
        .await
        .unwrap_err();
    assert_eq!(err, EarnmoveError::not_found("price history for NOPE"));
}

#[tokio::test]
async fn history_unsupported_without_provider() {
    let c = MockConnector::builder()
        .returns_earnings_ok(vec![])
        .build();
    let em = Earnmove::builder().with_connector(c).build().unwrap();

    let err = em
        .price_history(&sym(AAPL), ChartPeriod::Y1)
        .await
        .unwrap_err();
    assert_eq!(err, EarnmoveError::unsupported("price-history"));
}

#[tokio::test]
async fn one_day_chart_keeps_hourly_bars() {
    let em = Earnmove::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    let intraday = em.price_history(&sym(MSFT), ChartPeriod::D1).await.unwrap();
    assert_eq!(intraday.len(), 7);
    assert!(intraday.is_intraday());
    assert_eq!(intraday.last().map(|b| b.close), Some(Decimal::new(410_37, 2)));

    let month = em.price_history(&sym(MSFT), ChartPeriod::M1).await.unwrap();
    assert!(!month.is_intraday());
    assert!(month.len() > 7);
}

#[tokio::test]
async fn daily_only_connector_charts_its_closes() {
    let c = MockConnector::builder()
        .returns_history_ok(series(&[(2024, 5, 1, "100"), (2024, 5, 2, "101")]))
        .build();
    let em = Earnmove::builder().with_connector(c).build().unwrap();

    let chart = em.price_history(&sym(AAPL), ChartPeriod::D5).await.unwrap();
    assert_eq!(chart.len(), 2);
    assert_eq!(
        chart.first().map(|b| b.ts.date_naive()),
        Some(date(2024, 5, 1))
    );
}
