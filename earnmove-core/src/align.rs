use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{EarningsEvent, PricePoint, PriceSeries};
use earnmove_types::Session;

/// Decimal places kept on a percent move.
pub const PERCENT_DECIMALS: u32 = 2;

/// Why an earnings event could not be turned into a price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum AlignmentFailure {
    /// The series has no trading day where the announcement's reaction could be observed.
    #[error("no trading day follows the announcement in the series")]
    NoReferenceDay,
    /// The series has no trading day before the reaction day.
    #[error("no trading day precedes the announcement in the series")]
    NoPriorDay,
    /// The prior close is zero, so no percentage can be formed.
    #[error("prior close is zero")]
    ZeroPriorClose,
    /// The percentage does not fit a decimal.
    #[error("percent change overflowed")]
    Overflow,
}

/// Close-to-close move around one earnings announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsMove {
    /// Trading day whose close reflects the announcement (the "price date").
    pub price_date: NaiveDate,
    /// Trading day whose close is the baseline.
    pub prior_date: NaiveDate,
    /// Baseline close.
    pub prior_close: Decimal,
    /// Close on `price_date`.
    pub reference_close: Decimal,
    /// Percent change, rounded to two decimal places.
    pub pct_change: Decimal,
}

/// Outcome of aligning one earnings event.
///
/// A result either carries a full [`EarningsMove`] or the reason it is
/// unavailable; the price date and the percent change are never half-present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentResult {
    /// Announcement date as supplied.
    pub earnings_date: NaiveDate,
    /// Session tag as supplied (before folding `Unknown` into after-market).
    pub session: Session,
    /// The move, or why it could not be computed.
    pub outcome: Result<EarningsMove, AlignmentFailure>,
}

impl AlignmentResult {
    /// Aligned price date, `None` on failure.
    #[must_use]
    pub fn price_date(&self) -> Option<NaiveDate> {
        self.outcome.as_ref().ok().map(|m| m.price_date)
    }

    /// Rounded percent change, `None` on failure.
    #[must_use]
    pub fn pct_change(&self) -> Option<Decimal> {
        self.outcome.as_ref().ok().map(|m| m.pct_change)
    }

    /// The move, if alignment succeeded.
    #[must_use]
    pub fn earnings_move(&self) -> Option<&EarningsMove> {
        self.outcome.as_ref().ok()
    }

    /// Failure reason, if alignment failed.
    #[must_use]
    pub fn failure(&self) -> Option<AlignmentFailure> {
        self.outcome.err()
    }

    /// True when a move was computed.
    #[must_use]
    pub const fn is_aligned(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Align every event against `series`, one result per event, in input order.
///
/// Failures are isolated per event. An empty series fails every event; an
/// empty event list yields an empty result.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "earnmove::align",
        skip_all,
        fields(points = series.len(), events = events.len()),
    )
)]
#[must_use]
pub fn align_and_compute(series: &PriceSeries, events: &[EarningsEvent]) -> Vec<AlignmentResult> {
    events.iter().map(|e| align_event(series, e)).collect()
}

/// Align a single earnings event.
///
/// Before-market announcements react on the first trading day on or after the
/// announcement date, measured against the trading day preceding that reaction
/// day. After-market and unknown announcements react on the first trading day
/// strictly after the announcement date, measured against the trading day
/// preceding the announcement date.
#[must_use]
pub fn align_event(series: &PriceSeries, event: &EarningsEvent) -> AlignmentResult {
    let outcome = locate(series, event).and_then(|(prior, reference)| {
        Ok(EarningsMove {
            price_date: reference.date,
            prior_date: prior.date,
            prior_close: prior.close,
            reference_close: reference.close,
            pct_change: percent_change(prior.close, reference.close)?,
        })
    });

    #[cfg(feature = "tracing")]
    if let Err(reason) = &outcome {
        tracing::debug!(
            target: "earnmove::align",
            earnings_date = %event.date,
            session = %event.session,
            %reason,
            "earnings move unavailable"
        );
    }

    AlignmentResult {
        earnings_date: event.date,
        session: event.session,
        outcome,
    }
}

fn locate<'a>(
    series: &'a PriceSeries,
    event: &EarningsEvent,
) -> Result<(&'a PricePoint, &'a PricePoint), AlignmentFailure> {
    match event.session.effective() {
        Session::BeforeMarket => {
            let reference = series
                .first_on_or_after(event.date)
                .ok_or(AlignmentFailure::NoReferenceDay)?;
            let prior = series
                .last_before(reference.date)
                .ok_or(AlignmentFailure::NoPriorDay)?;
            Ok((prior, reference))
        }
        Session::AfterMarket | Session::Unknown => {
            let reference = series
                .first_after(event.date)
                .ok_or(AlignmentFailure::NoReferenceDay)?;
            let prior = series
                .last_before(event.date)
                .ok_or(AlignmentFailure::NoPriorDay)?;
            Ok((prior, reference))
        }
    }
}

/// `(reference - prior) / prior * 100`, rounded half away from zero to two places.
///
/// The returned decimal always carries exactly two fractional digits.
///
/// ```
/// use earnmove_core::percent_change;
/// use rust_decimal::Decimal;
///
/// let pct = percent_change(Decimal::new(100, 0), Decimal::new(105, 0)).unwrap();
/// assert_eq!(pct.to_string(), "5.00");
/// ```
///
/// # Errors
/// Returns `ZeroPriorClose` when `prior` is zero and `Overflow` if the
/// arithmetic does not fit a decimal.
pub fn percent_change(prior: Decimal, reference: Decimal) -> Result<Decimal, AlignmentFailure> {
    if prior.is_zero() {
        return Err(AlignmentFailure::ZeroPriorClose);
    }
    let raw = reference
        .checked_sub(prior)
        .and_then(|delta| delta.checked_div(prior))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(AlignmentFailure::Overflow)?;
    Ok(round_fixed(raw, PERCENT_DECIMALS))
}

/// Round half away from zero and pad to exactly `dp` fractional digits.
pub(crate) fn round_fixed(value: Decimal, dp: u32) -> Decimal {
    let mut out = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    out.rescale(dp);
    if out.is_zero() {
        out.set_sign_positive(true);
    }
    out
}
