//! Month grid math for a Monday-first calendar.

use chrono::{Datelike, NaiveDate};

/// Ordered dates of the given month, day 1 through the last day.
/// An out-of-range month yields an empty sequence.
pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    (1..=days_in_month(year, month))
        .filter_map(|d| NaiveDate::from_ymd_opt(year, month, d))
        .collect()
}

/// Last day number of the month (first of the next month minus one day).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
        m => NaiveDate::from_ymd_opt(year, m + 1, 1),
    }
    .map(|first_of_next| (first_of_next - chrono::Duration::days(1)).day())
    .unwrap_or(0)
}

/// Blank cells to render before day 1 so it lands under its weekday column
/// when the header runs Mon..Sun. 0 when the 1st is a Monday, 6 for a Sunday.
pub fn leading_padding(year: i32, month: u32) -> usize {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_monday() as usize)
        .unwrap_or(0)
}

/// Canonical "YYYY-MM-DD" key used by the assignment and holiday maps.
/// Built from calendar components, so it never shifts across timezones.
pub fn date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let mut parts = key.splitn(3, '-');
    let y: i32 = parts.next()?.parse().ok()?;
    let m: u32 = parts.next()?.parse().ok()?;
    let d: u32 = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Same calendar day, ignoring anything but year/month/day.
pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths_follow_leap_rule() {
        assert_eq!(month_days(2023, 2).len(), 28);
        assert_eq!(month_days(2024, 2).len(), 29); // divisible by 4
        assert_eq!(month_days(1900, 2).len(), 28); // century, not by 400
        assert_eq!(month_days(2000, 2).len(), 29); // divisible by 400
        assert_eq!(month_days(2025, 4).len(), 30);
        assert_eq!(month_days(2025, 1).len(), 31);
    }

    #[test]
    fn month_days_are_ordered_and_in_month() {
        let days = month_days(2025, 6);
        assert_eq!(days.first().unwrap().day(), 1);
        assert_eq!(days.last().unwrap().day(), 30);
        assert!(days.windows(2).all(|w| w[0] < w[1]));
        assert!(days.iter().all(|d| d.month() == 6 && d.year() == 2025));
    }

    #[test]
    fn padding_aligns_first_under_its_column() {
        // September 2025 starts on a Monday.
        assert_eq!(leading_padding(2025, 9), 0);
        // June 2025 starts on a Sunday.
        assert_eq!(leading_padding(2025, 6), 6);
        // January 2025 starts on a Wednesday.
        assert_eq!(leading_padding(2025, 1), 2);
        for month in 1..=12 {
            assert!(leading_padding(2025, month) <= 6);
        }
    }

    #[test]
    fn date_key_zero_pads() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(date_key(d), "2025-03-05");
    }

    #[test]
    fn date_key_round_trips() {
        for key in ["1899-12-31", "2000-02-29", "2024-02-29", "2100-01-01"] {
            let parsed = parse_date_key(key).unwrap();
            assert_eq!(date_key(parsed), key);
        }
        assert!(parse_date_key("2023-02-29").is_none());
        assert!(parse_date_key("not-a-date").is_none());
    }

    #[test]
    fn same_day_ignores_nothing_but_components() {
        let a = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        let b = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        let c = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();
        assert!(is_same_day(a, b));
        assert!(!is_same_day(a, c));
    }
}
