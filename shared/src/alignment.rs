//! Time alignment for hourly forecast series
//!
//! Selects the sample that best represents "now" on an arbitrary target
//! date: round the current instant to the nearest hour, transplant that
//! hour-of-day onto the target date, then pick the closest timestamp.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Timelike};

/// Round to the nearest hour: truncate, then advance one hour when the
/// original minute was >= 30. 23:30 and later rolls over to the next day.
///
/// Returns `None` only if the truncated instant cannot be represented.
pub fn rounded_current_hour(now: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    let truncated = now
        .with_minute(0)?
        .with_second(0)?
        .with_nanosecond(0)?;

    if now.minute() >= 30 {
        Some(truncated + Duration::hours(1))
    } else {
        Some(truncated)
    }
}

/// Transplant the rounded hour-of-day onto the requested calendar date.
///
/// The result answers "if today were that date, what instant is it now".
pub fn target_instant(
    rounded: DateTime<FixedOffset>,
    date: NaiveDate,
) -> Option<DateTime<FixedOffset>> {
    date.and_time(rounded.time())
        .and_local_timezone(*rounded.offset())
        .single()
}

/// Index of the timestamp closest to `target`; `None` iff `timestamps` is
/// empty. The first minimal absolute difference wins.
/// (`Iterator::min_by_key` keeps the last minimum, so the scan is explicit.)
pub fn nearest_index(
    timestamps: &[DateTime<FixedOffset>],
    target: DateTime<FixedOffset>,
) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (i, t) in timestamps.iter().enumerate() {
        let diff = (*t - target).num_seconds().abs();
        match best {
            Some((_, smallest)) if diff >= smallest => {}
            _ => best = Some((i, diff)),
        }
    }
    best.map(|(i, _)| i)
}
