use chrono::Days;
use earnmove::{Earnmove, EarningsEvent, Session};
use proptest::prelude::*;

use crate::helpers::{AAPL, MockConnector, date, series, sym};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn report_never_exceeds_limit(n_events in 0usize..60, limit in 0usize..60) {
        let base = date(2023, 1, 2);
        let events: Vec<EarningsEvent> = (0..n_events)
            .filter_map(|i| base.checked_add_days(Days::new(i as u64)))
            .map(|d| EarningsEvent::new(d, Session::AfterMarket))
            .collect();
        let c = MockConnector::builder()
            .returns_earnings_ok(events)
            .returns_history_ok(series(&[(2023, 1, 1, "10")]))
            .build();
        let em = Earnmove::builder()
            .with_connector(c)
            .earnings_limit(limit)
            .build()
            .unwrap();
        let effective = em.config().earnings_limit;

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let report = rt.block_on(em.earnings_moves(&sym(AAPL))).unwrap();

        prop_assert_eq!(report.results.len(), n_events.min(effective));
        prop_assert!(report.results.iter().all(|r| !r.is_aligned()));
    }
}
