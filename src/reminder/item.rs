use chrono::{NaiveDate, NaiveDateTime};

use super::days::{days_left, URGENT_THRESHOLD_DAYS};

/// One submitted reminder. Lives only in the displayed list, never persisted.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub name: String,
    /// Date text as typed, echoed verbatim in the list line.
    pub date: String,
    pub expiry: NaiveDate,
    /// Days until expiry, snapshotted when the reminder was submitted.
    pub days_left: i64,
}

impl Reminder {
    pub fn new(name: String, date: String, expiry: NaiveDate, now: NaiveDateTime) -> Self {
        Self {
            days_left: days_left(expiry, now),
            name,
            date,
            expiry,
        }
    }

    pub fn is_urgent(&self) -> bool {
        self.days_left <= URGENT_THRESHOLD_DAYS
    }

    /// The fixed list-line shape: `<name> - <date> (剩余 <days> 天)`.
    pub fn line(&self) -> String {
        format!("{} - {} (剩余 {} 天)", self.name, self.date, self.days_left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn expiring_in(days: i64) -> Reminder {
        let expiry = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap() + chrono::Duration::days(days);
        Reminder::new(
            "milk".to_string(),
            expiry.format("%Y-%m-%d").to_string(),
            expiry,
            noon(2026, 8, 25),
        )
    }

    #[test]
    fn line_has_the_fixed_shape() {
        let expiry = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let rem = Reminder::new(
            "milk".to_string(),
            "2026-09-01".to_string(),
            expiry,
            noon(2026, 8, 25),
        );

        assert_eq!(rem.days_left, 7);
        assert_eq!(rem.line(), "milk - 2026-09-01 (剩余 7 天)");
    }

    #[test]
    fn line_echoes_the_date_as_typed() {
        // chrono accepts unpadded fields; the line keeps the raw text
        let expiry = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let rem = Reminder::new(
            "milk".to_string(),
            "2026-9-1".to_string(),
            expiry,
            noon(2026, 8, 25),
        );

        assert_eq!(rem.line(), "milk - 2026-9-1 (剩余 7 天)");
    }

    #[test]
    fn urgency_is_inclusive_at_three_days() {
        assert!(expiring_in(3).is_urgent());
        assert!(!expiring_in(4).is_urgent());
    }

    #[test]
    fn overdue_is_urgent_and_shows_a_negative_count() {
        let rem = expiring_in(-5);

        assert!(rem.is_urgent());
        assert_eq!(rem.days_left, -5);
        assert_eq!(rem.line(), "milk - 2026-08-20 (剩余 -5 天)");
    }

    #[test]
    fn zero_days_is_urgent() {
        assert!(expiring_in(0).is_urgent());
        assert_eq!(expiring_in(0).days_left, 0);
    }
}
