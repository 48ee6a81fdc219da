use chrono::{DateTime, TimeDelta, Utc};

/// Heuristic: determine if a sequence of bar timestamps is sub-daily.
///
/// Returns `true` only if BOTH conditions hold:
/// - At least 3 adjacent deltas are strictly less than 86,400 seconds (1 day)
/// - At least 60% of adjacent deltas are strictly less than 86,400 seconds
///
/// Input order does not matter and duplicate timestamps are ignored.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use earnmove_core::is_subdaily;
///
/// let t = |s: i64| DateTime::<Utc>::from_timestamp(s, 0).unwrap();
/// let hourly: Vec<_> = (0..6).map(|i| t(i * 3_600)).collect();
/// assert!(is_subdaily(&hourly));
/// let daily: Vec<_> = (0..6).map(|i| t(i * 86_400)).collect();
/// assert!(!is_subdaily(&daily));
/// ```
#[must_use]
pub fn is_subdaily(timestamps: &[DateTime<Utc>]) -> bool {
    const DAY: i64 = 86_400;
    if timestamps.len() < 2 {
        return false;
    }

    let mut ts = timestamps.to_vec();
    ts.sort();
    let mut deltas: Vec<i64> = Vec::with_capacity(ts.len().saturating_sub(1));
    let mut last = ts[0];
    for &cur in ts.iter().skip(1) {
        let dt: TimeDelta = cur - last;
        if dt > TimeDelta::zero() {
            deltas.push(dt.num_seconds());
            last = cur;
        }
    }

    if deltas.is_empty() {
        return false;
    }

    let total = deltas.len();
    let subdaily = deltas.iter().filter(|&&d| d < DAY).count();

    if subdaily < 3 {
        return false;
    }
    // subdaily/total >= 3/5
    subdaily.saturating_mul(5) >= total.saturating_mul(3)
}
