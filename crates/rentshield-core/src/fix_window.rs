//! Statutory fix window for reported hazards.
//!
//! Under Awaab's Law a landlord has a fixed number of days after a hazard is
//! reported to act on it. The remaining time is never stored: it is derived
//! from the report timestamp and the current instant on every read.
//!
//! # Counting rules
//!
//! - Elapsed days are whole days, floored (23h59m after the report is still day 0).
//! - A report timestamp in the future counts as zero days elapsed.
//! - The remaining count floors at zero once the window has passed.

use chrono::{DateTime, Duration, Utc};

/// Length of the fix window in days. Fixed by statute, not configurable.
pub const FIX_WINDOW_DAYS: i64 = 14;

/// Whole days left in the fix window for a hazard reported at `reported_at`.
///
/// `max(0, 14 - floor(days elapsed))`
pub fn days_left(reported_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed = (now - reported_at).num_days().max(0);
    (FIX_WINDOW_DAYS - elapsed).max(0)
}

/// Instant at which the fix window closes.
pub fn deadline(reported_at: DateTime<Utc>) -> DateTime<Utc> {
    reported_at + Duration::days(FIX_WINDOW_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reported() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap()
    }

    #[test]
    fn full_window_at_report_time() {
        assert_eq!(days_left(reported(), reported()), 14);
    }

    #[test]
    fn one_day_later() {
        assert_eq!(days_left(reported(), reported() + Duration::days(1)), 13);
    }

    #[test]
    fn partial_days_are_floored() {
        let now = reported() + Duration::hours(23) + Duration::minutes(59);
        assert_eq!(days_left(reported(), now), 14);

        let now = reported() + Duration::days(3) + Duration::hours(12);
        assert_eq!(days_left(reported(), now), 11);
    }

    #[test]
    fn zero_when_window_closes() {
        assert_eq!(days_left(reported(), reported() + Duration::days(14)), 0);
    }

    #[test]
    fn never_negative() {
        assert_eq!(days_left(reported(), reported() + Duration::days(20)), 0);
        assert_eq!(days_left(reported(), reported() + Duration::days(400)), 0);
    }

    #[test]
    fn future_report_counts_as_fresh() {
        assert_eq!(days_left(reported(), reported() - Duration::days(2)), 14);
    }

    #[test]
    fn deadline_is_fourteen_days_out() {
        assert_eq!(
            deadline(reported()),
            Utc.with_ymd_and_hms(2026, 3, 16, 9, 30, 0).unwrap()
        );
    }
}
