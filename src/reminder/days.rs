use chrono::{NaiveDate, NaiveDateTime};

/// Entries with this many days left or fewer render with the urgent style.
pub const URGENT_THRESHOLD_DAYS: i64 = 3;

/// Calendar days from `now`'s date to `expiry`.
///
/// An expiry of today yields 0 anywhere in that day, tomorrow yields 1, and
/// past dates go negative. `now` is an explicit parameter so callers decide
/// what "the current moment" is.
pub fn days_left(expiry: NaiveDate, now: NaiveDateTime) -> i64 {
    expiry.signed_duration_since(now.date()).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn three_days_out_counts_three() {
        assert_eq!(days_left(date(2026, 8, 28), at(2026, 8, 25, 15, 30)), 3);
    }

    #[test]
    fn four_days_out_counts_four() {
        assert_eq!(days_left(date(2026, 8, 29), at(2026, 8, 25, 15, 30)), 4);
    }

    #[test]
    fn expiry_today_is_zero_all_day() {
        assert_eq!(days_left(date(2026, 8, 25), at(2026, 8, 25, 0, 0)), 0);
        assert_eq!(days_left(date(2026, 8, 25), at(2026, 8, 25, 12, 0)), 0);
        assert_eq!(days_left(date(2026, 8, 25), at(2026, 8, 25, 23, 59)), 0);
    }

    #[test]
    fn past_dates_go_negative() {
        assert_eq!(days_left(date(2026, 8, 24), at(2026, 8, 25, 9, 0)), -1);
        assert_eq!(days_left(date(2026, 8, 20), at(2026, 8, 25, 9, 0)), -5);
    }

    #[test]
    fn exact_midnight_distance_is_whole_days() {
        assert_eq!(days_left(date(2026, 8, 26), at(2026, 8, 25, 0, 0)), 1);
        assert_eq!(days_left(date(2026, 9, 1), at(2026, 8, 25, 0, 0)), 7);
    }

    #[test]
    fn a_started_day_still_counts() {
        // one minute into the day rounds up, right up to the last minute
        assert_eq!(days_left(date(2026, 8, 26), at(2026, 8, 25, 0, 1)), 1);
        assert_eq!(days_left(date(2026, 8, 26), at(2026, 8, 25, 23, 59)), 1);
    }

    #[test]
    fn crosses_month_boundaries() {
        assert_eq!(days_left(date(2026, 9, 3), at(2026, 8, 30, 8, 0)), 4);
    }
}
