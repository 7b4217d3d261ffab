//! Duration derivation for task intervals.

use chrono::NaiveDateTime;

const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Returns `end - start` expressed in minutes.
///
/// The result is signed: an `end` before `start` yields a negative value.
/// Sub-minute remainders are kept as a fraction.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "durations are reported as fractional minutes; millisecond counts stay far below 2^52"
)]
pub fn compute_duration(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let delta = end.signed_duration_since(start);
    delta.num_milliseconds() as f64 / MILLIS_PER_MINUTE
}
