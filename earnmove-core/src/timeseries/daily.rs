use chrono_tz::Tz;

use crate::model::{Bar, PricePoint};

/// Collapse bars into one close per exchange-local calendar date.
///
/// Bars are ordered by timestamp and grouped by their date in `tz`; the close of
/// the latest bar of each date wins. Output is ascending by date. Bars sharing
/// a timestamp keep their input order, so the later one wins.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use earnmove_core::{Bar, Decimal, Tz, daily_closes};
///
/// let bars = vec![
///     Bar { ts: Utc.with_ymd_and_hms(2024, 1, 2, 15, 0, 0).unwrap(), close: Decimal::new(100, 0) },
///     Bar { ts: Utc.with_ymd_and_hms(2024, 1, 2, 20, 0, 0).unwrap(), close: Decimal::new(101, 0) },
///     Bar { ts: Utc.with_ymd_and_hms(2024, 1, 3, 15, 0, 0).unwrap(), close: Decimal::new(99, 0) },
/// ];
/// let daily = daily_closes(bars, Tz::America__New_York);
/// assert_eq!(daily.len(), 2);
/// assert_eq!(daily[0].close, Decimal::new(101, 0));
/// ```
#[must_use]
pub fn daily_closes(mut bars: Vec<Bar>, tz: Tz) -> Vec<PricePoint> {
    bars.sort_by_key(|b| b.ts);
    let mut out: Vec<PricePoint> = Vec::new();
    for bar in bars {
        let date = bar.ts.with_timezone(&tz).date_naive();
        match out.last_mut() {
            Some(last) if last.date == date => last.close = bar.close,
            _ => out.push(PricePoint::new(date, bar.close)),
        }
    }
    out
}
