use chrono::{TimeZone, Utc};
use earnmove_core::{EarningsEvent, Tz};

// (y, m, d, hour UTC, provider time label); most recent first
type Row = (i32, u32, u32, u32, Option<&'static str>);

const AAPL: &[Row] = &[
    // scheduled, not yet reflected in the price fixture
    (2025, 1, 30, 21, Some("AMC")),
    (2024, 10, 31, 20, Some("AMC")),
    (2024, 8, 1, 20, Some("pm")),
    (2024, 5, 2, 20, Some("After Market Close")),
    (2024, 2, 1, 21, Some("amc")),
];

const MSFT: &[Row] = &[
    (2024, 10, 30, 11, Some("BMO")),
    (2024, 7, 30, 20, None),
    (2024, 4, 25, 20, Some("AMC")),
    (2024, 1, 30, 21, Some("AMC")),
];

pub fn by_symbol(s: &str) -> Option<Vec<EarningsEvent>> {
    match s {
        "AAPL" => Some(build(AAPL)),
        "MSFT" => Some(build(MSFT)),
        _ => None,
    }
}

fn build(rows: &[Row]) -> Vec<EarningsEvent> {
    rows.iter()
        .filter_map(|&(y, m, d, h, label)| {
            let ts = Utc.with_ymd_and_hms(y, m, d, h, 0, 0).single()?;
            Some(EarningsEvent::from_announcement(ts, Tz::America__New_York, label))
        })
        .collect()
}
