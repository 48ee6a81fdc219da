use rust_decimal::Decimal;

use crate::align::round_fixed;

/// Placeholder rendered for any value that is missing or could not be computed.
pub const NOT_AVAILABLE: &str = "N/A";

const COMPACT_SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// Dollar amount scaled by thousands with a one-decimal mantissa.
///
/// Scaling stops at trillions, so very large values keep growing the mantissa.
///
/// ```
/// use earnmove_core::format::format_compact_usd;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_compact_usd(Decimal::new(1_234_567_890, 0)), "$1.2B");
/// assert_eq!(format_compact_usd(Decimal::new(999, 0)), "$999.0");
/// ```
#[must_use]
pub fn format_compact_usd(value: Decimal) -> String {
    let thousand = Decimal::ONE_THOUSAND;
    let mut mantissa = value.abs();
    let mut idx = 0;
    while mantissa >= thousand && idx < COMPACT_SUFFIXES.len() - 1 {
        mantissa /= thousand;
        idx += 1;
    }
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{sign}${}{}",
        round_fixed(mantissa, 1),
        COMPACT_SUFFIXES[idx]
    )
}

/// Dollar amount with two decimals (`$123.45`).
#[must_use]
pub fn format_usd(value: Decimal) -> String {
    let fixed = round_fixed(value, 2);
    if fixed.is_sign_negative() {
        format!("-${}", fixed.abs())
    } else {
        format!("${fixed}")
    }
}

/// Plain number with two decimals.
#[must_use]
pub fn format_ratio(value: Decimal) -> String {
    round_fixed(value, 2).to_string()
}

/// Number already expressed in percent, with two decimals and a `%` suffix.
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", round_fixed(value, 2))
}

/// Apply `f` to a present value, or render [`NOT_AVAILABLE`].
pub fn format_or_na<T>(value: Option<T>, f: impl FnOnce(T) -> String) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), f)
}
