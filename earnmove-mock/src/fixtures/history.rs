use chrono::{NaiveDate, TimeZone, Utc};
use earnmove_core::{Bar, PricePoint, PriceSeries};
use rust_decimal::Decimal;

// Closes around each fixture earnings date, in cents.
const AAPL: &[(i32, u32, u32, i64)] = &[
    (2024, 1, 30, 188_04),
    (2024, 1, 31, 184_40),
    (2024, 2, 1, 186_86),
    (2024, 2, 2, 185_85),
    (2024, 2, 5, 187_68),
    (2024, 5, 1, 169_30),
    (2024, 5, 2, 173_03),
    (2024, 5, 3, 183_38),
    (2024, 5, 6, 181_71),
    (2024, 7, 31, 222_08),
    (2024, 8, 1, 218_36),
    (2024, 8, 2, 219_86),
    (2024, 8, 5, 209_27),
    (2024, 10, 30, 230_10),
    (2024, 10, 31, 225_91),
    (2024, 11, 1, 222_91),
    (2024, 11, 4, 222_01),
];

const MSFT: &[(i32, u32, u32, i64)] = &[
    (2024, 1, 29, 409_72),
    (2024, 1, 30, 408_59),
    (2024, 1, 31, 397_58),
    (2024, 2, 1, 403_78),
    (2024, 4, 24, 409_06),
    (2024, 4, 25, 399_04),
    (2024, 4, 26, 406_32),
    (2024, 4, 29, 402_25),
    (2024, 7, 29, 426_73),
    (2024, 7, 30, 422_92),
    (2024, 7, 31, 418_35),
    (2024, 8, 1, 417_11),
    (2024, 10, 29, 431_95),
    (2024, 10, 30, 432_53),
    (2024, 10, 31, 406_35),
    (2024, 11, 1, 410_37),
];

// Hourly closes of the 2024-11-01 session, 13:30..19:30 UTC.
const AAPL_HOURLY: [i64; 7] = [220_97, 221_40, 222_18, 223_05, 222_64, 223_31, 222_91];
const MSFT_HOURLY: [i64; 7] = [409_12, 411_86, 412_40, 410_95, 409_88, 411_02, 410_37];

pub fn by_symbol(s: &str) -> Option<PriceSeries> {
    match s {
        "AAPL" => Some(build(AAPL)),
        "MSFT" => Some(build(MSFT)),
        _ => None,
    }
}

fn build(rows: &[(i32, u32, u32, i64)]) -> PriceSeries {
    rows.iter()
        .filter_map(|&(y, m, d, cents)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| PricePoint::new(date, Decimal::new(cents, 2)))
        })
        .collect()
}

pub fn hourly_by_symbol(s: &str) -> Option<Vec<Bar>> {
    match s {
        "AAPL" => Some(build_hourly(&AAPL_HOURLY)),
        "MSFT" => Some(build_hourly(&MSFT_HOURLY)),
        _ => None,
    }
}

fn build_hourly(closes: &[i64]) -> Vec<Bar> {
    (13u32..)
        .zip(closes)
        .filter_map(|(hour, &cents)| {
            let ts = Utc.with_ymd_and_hms(2024, 11, 1, hour, 30, 0).single()?;
            Some(Bar {
                ts,
                close: Decimal::new(cents, 2),
            })
        })
        .collect()
}
