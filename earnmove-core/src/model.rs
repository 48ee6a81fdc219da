//! Price and earnings data handed to the aligner by upstream providers.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::timeseries::daily::daily_closes;
use crate::timeseries::infer::is_subdaily;
use earnmove_types::Session;

/// Closing price of one trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading day (exchange-local calendar date).
    pub date: NaiveDate,
    /// Close on that day.
    pub close: Decimal,
}

impl PricePoint {
    /// Build a price point.
    #[must_use]
    pub const fn new(date: NaiveDate, close: Decimal) -> Self {
        Self { date, close }
    }
}

/// A single timestamped close, typically an intraday bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar timestamp.
    pub ts: DateTime<Utc>,
    /// Close of the bar.
    pub close: Decimal,
}

/// Daily closes ordered by date.
///
/// Providers deliver these sorted and deduplicated. Construction still applies a
/// stable sort so lookups can binary-search; duplicate dates are kept in their
/// original relative order and every lookup resolves to the first of them.
/// A series is never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from daily closes.
    #[must_use]
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    /// Collapse timestamped bars into one close per exchange-local date.
    #[must_use]
    pub fn from_bars(bars: Vec<Bar>, tz: Tz) -> Self {
        Self {
            points: daily_closes(bars, tz),
        }
    }

    /// All points in date order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest point.
    #[must_use]
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Latest point.
    #[must_use]
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Close on exactly `date`, if it was a trading day.
    #[must_use]
    pub fn close_on(&self, date: NaiveDate) -> Option<Decimal> {
        self.first_on_or_after(date)
            .filter(|p| p.date == date)
            .map(|p| p.close)
    }

    /// First trading day on or after `date`.
    #[must_use]
    pub fn first_on_or_after(&self, date: NaiveDate) -> Option<&PricePoint> {
        let idx = self.points.partition_point(|p| p.date < date);
        self.points.get(idx)
    }

    /// First trading day strictly after `date`.
    #[must_use]
    pub fn first_after(&self, date: NaiveDate) -> Option<&PricePoint> {
        let idx = self.points.partition_point(|p| p.date <= date);
        self.points.get(idx)
    }

    /// Latest trading day strictly before `date`.
    #[must_use]
    pub fn last_before(&self, date: NaiveDate) -> Option<&PricePoint> {
        let idx = self.points.partition_point(|p| p.date < date);
        let prev = idx.checked_sub(1).and_then(|i| self.points.get(i))?;
        // resolve to the first occurrence of a duplicated date
        self.first_on_or_after(prev.date)
    }
}

impl From<Vec<PricePoint>> for PriceSeries {
    fn from(points: Vec<PricePoint>) -> Self {
        Self::new(points)
    }
}

impl From<PriceSeries> for Vec<PricePoint> {
    fn from(series: PriceSeries) -> Self {
        series.points
    }
}

impl FromIterator<PricePoint> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PricePoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Timestamped closes backing a price chart.
///
/// Unlike [`PriceSeries`] this keeps every bar, so hourly data stays hourly.
/// Bars are ordered by timestamp; equal timestamps keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Bar>", into = "Vec<Bar>")]
pub struct ChartSeries {
    bars: Vec<Bar>,
}

impl ChartSeries {
    /// Build a chart series from bars in any order.
    #[must_use]
    pub fn new(mut bars: Vec<Bar>) -> Self {
        bars.sort_by_key(|b| b.ts);
        Self { bars }
    }

    /// One bar per daily close, stamped at midnight UTC of its date.
    #[must_use]
    pub fn from_daily(series: &PriceSeries) -> Self {
        let bars = series
            .points()
            .iter()
            .map(|p| Bar {
                ts: p.date.and_time(NaiveTime::MIN).and_utc(),
                close: p.close,
            })
            .collect();
        Self { bars }
    }

    /// All bars in time order.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True if the series holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Earliest bar.
    #[must_use]
    pub fn first(&self) -> Option<&Bar> {
        self.bars.first()
    }

    /// Latest bar.
    #[must_use]
    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// True when the bars are spaced less than a day apart.
    #[must_use]
    pub fn is_intraday(&self) -> bool {
        let ts: Vec<DateTime<Utc>> = self.bars.iter().map(|b| b.ts).collect();
        is_subdaily(&ts)
    }

    /// Collapse into daily closes in the exchange time zone `tz`.
    #[must_use]
    pub fn to_daily(&self, tz: Tz) -> PriceSeries {
        PriceSeries::from_bars(self.bars.clone(), tz)
    }
}

impl From<Vec<Bar>> for ChartSeries {
    fn from(bars: Vec<Bar>) -> Self {
        Self::new(bars)
    }
}

impl From<ChartSeries> for Vec<Bar> {
    fn from(series: ChartSeries) -> Self {
        series.bars
    }
}

/// An earnings announcement and when it happened relative to the trading session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsEvent {
    /// Announcement date (exchange-local calendar date).
    pub date: NaiveDate,
    /// Session tag reported by the calendar provider.
    pub session: Session,
}

impl EarningsEvent {
    /// Build an event from a date and session.
    #[must_use]
    pub const fn new(date: NaiveDate, session: Session) -> Self {
        Self { date, session }
    }

    /// Build an event from a provider timestamp and optional time-of-day label.
    ///
    /// The timestamp is converted to `tz` before taking the calendar date; a
    /// missing label yields [`Session::Unknown`].
    #[must_use]
    pub fn from_announcement(ts: DateTime<Utc>, tz: Tz, time_label: Option<&str>) -> Self {
        Self {
            date: ts.with_timezone(&tz).date_naive(),
            session: time_label.map_or(Session::Unknown, Session::from_label),
        }
    }
}
