//! Hour and day-count rollups over a period of calendar days.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashMap;

use super::grid::{date_key, month_days};
use super::paint::resolve_shift;
use super::{AssignmentMap, HolidayMap, ShiftType};

/// Reference full-time load behind the percentage gauges. Fixed product
/// constants, deliberately not derived from the number of days in the period.
pub const MONTH_REFERENCE_HOURS: f64 = 160.0;
pub const YEAR_REFERENCE_HOURS: f64 = 1920.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShiftTotals {
    pub count: u32,
    pub hours: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodStats {
    pub total_hours: f64,
    /// Hours worked on regular weekdays.
    pub normal_hours: f64,
    /// Hours worked on Saturdays, Sundays or holidays.
    pub special_hours: f64,
    /// Painted days falling on regular weekdays.
    pub normal_days: u32,
    /// Painted days falling on Saturdays, Sundays or holidays.
    pub special_days: u32,
    /// Every day of the period, painted or not.
    pub days_in_period: u32,
    /// Per shift id: how often it was worked and for how many hours.
    pub by_shift: HashMap<String, ShiftTotals>,
}

impl PeriodStats {
    pub fn assigned_days(&self) -> u32 {
        self.normal_days + self.special_days
    }

    /// Share of days in the period that carry a shift, 0-100.
    pub fn presence_percent(&self) -> f64 {
        if self.days_in_period == 0 {
            return 0.0;
        }
        self.assigned_days() as f64 / self.days_in_period as f64 * 100.0
    }

    /// Worked hours against a reference load, 0-100 and beyond.
    pub fn load_percent(&self, reference_hours: f64) -> f64 {
        if reference_hours <= 0.0 {
            return 0.0;
        }
        self.total_hours / reference_hours * 100.0
    }
}

/// Saturdays, Sundays and holidays count as special; every Saturday counts
/// even without a holiday entry.
pub fn is_special_day(date: NaiveDate, holidays: &HolidayMap) -> bool {
    holidays.contains_key(&date_key(date)) || matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Folds the given days into totals. Days without a resolvable shift
/// contribute nothing; `days_in_period` still counts them.
pub fn aggregate(
    days: &[NaiveDate],
    assignments: &AssignmentMap,
    shift_types: &[ShiftType],
    holidays: &HolidayMap,
) -> PeriodStats {
    let mut stats = PeriodStats {
        days_in_period: days.len() as u32,
        ..Default::default()
    };
    for &day in days {
        let Some(shift) = resolve_shift(day, assignments, shift_types) else {
            continue;
        };
        let hours = shift.hours();
        stats.total_hours += hours;
        if is_special_day(day, holidays) {
            stats.special_hours += hours;
            stats.special_days += 1;
        } else {
            stats.normal_hours += hours;
            stats.normal_days += 1;
        }
        let bucket = stats.by_shift.entry(shift.id.clone()).or_default();
        bucket.count += 1;
        bucket.hours += hours;
    }
    stats
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearStats {
    pub total: PeriodStats,
    /// One entry per month, January first.
    pub months: Vec<PeriodStats>,
}

/// Whole-year totals plus the per-month breakdown the trend view renders.
/// Month totals sum to the year total; both fold the same duration values.
pub fn aggregate_year(
    year: i32,
    assignments: &AssignmentMap,
    shift_types: &[ShiftType],
    holidays: &HolidayMap,
) -> YearStats {
    let mut all_days = Vec::with_capacity(366);
    let mut months = Vec::with_capacity(12);
    for month in 1..=12 {
        let days = month_days(year, month);
        months.push(aggregate(&days, assignments, shift_types, holidays));
        all_days.extend(days);
    }
    YearStats {
        total: aggregate(&all_days, assignments, shift_types, holidays),
        months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::DayAssignment;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn eight_hour_shift(id: &str) -> ShiftType {
        ShiftType {
            id: id.into(),
            name: "Day".into(),
            code: "D".into(),
            color: "#6366f1".into(),
            start_time: "08:00".into(),
            end_time: "16:00".into(),
            duration_hours: None,
        }
    }

    fn paint(map: &mut AssignmentMap, date: &str, shift: &str) {
        map.insert(
            date.to_string(),
            DayAssignment {
                date: date.to_string(),
                shift_type_id: Some(shift.to_string()),
                note: None,
            },
        );
    }

    fn holiday(map: &mut HolidayMap, date: &str, name: &str) {
        map.insert(
            date.to_string(),
            crate::schedule::Holiday {
                date: date.to_string(),
                name: name.to_string(),
                country_code: "ES".into(),
            },
        );
    }

    #[test]
    fn weekends_are_special_without_any_holiday() {
        let holidays = HolidayMap::new();
        assert!(is_special_day(day(2025, 1, 4), &holidays)); // Saturday
        assert!(is_special_day(day(2025, 1, 5), &holidays)); // Sunday
        assert!(!is_special_day(day(2025, 1, 6), &holidays)); // Monday
    }

    #[test]
    fn new_year_2025_is_special_only_as_a_holiday() {
        // 2025-01-01 is a Wednesday, so only the holiday entry makes it special.
        let mut holidays = HolidayMap::new();
        assert!(!is_special_day(day(2025, 1, 1), &holidays));
        holiday(&mut holidays, "2025-01-01", "New Year");
        assert!(is_special_day(day(2025, 1, 1), &holidays));
    }

    #[test]
    fn single_midweek_shift_in_january() {
        // One 8h shift on Wed 2025-01-15, no holidays: everything lands in
        // the normal buckets and the other 30 days contribute nothing.
        let days = month_days(2025, 1);
        let types = vec![eight_hour_shift("A")];
        let mut assignments = AssignmentMap::new();
        paint(&mut assignments, "2025-01-15", "A");

        let stats = aggregate(&days, &assignments, &types, &HolidayMap::new());
        assert_eq!(stats.total_hours, 8.0);
        assert_eq!(stats.normal_hours, 8.0);
        assert_eq!(stats.special_hours, 0.0);
        assert_eq!(stats.normal_days, 1);
        assert_eq!(stats.special_days, 0);
        assert_eq!(stats.days_in_period, 31);
        assert_eq!(stats.by_shift.get("A").unwrap().count, 1);
        assert_eq!(stats.by_shift.get("A").unwrap().hours, 8.0);
    }

    #[test]
    fn weekend_and_holiday_shifts_split_out() {
        let days = month_days(2025, 1);
        let types = vec![eight_hour_shift("A")];
        let mut assignments = AssignmentMap::new();
        paint(&mut assignments, "2025-01-01", "A"); // Wednesday, holiday below
        paint(&mut assignments, "2025-01-04", "A"); // Saturday
        paint(&mut assignments, "2025-01-07", "A"); // Tuesday
        let mut holidays = HolidayMap::new();
        holiday(&mut holidays, "2025-01-01", "New Year");

        let stats = aggregate(&days, &assignments, &types, &holidays);
        assert_eq!(stats.special_days, 2);
        assert_eq!(stats.normal_days, 1);
        assert_eq!(stats.special_hours, 16.0);
        assert_eq!(stats.normal_hours, 8.0);
        assert_eq!(stats.total_hours, 24.0);
    }

    #[test]
    fn orphaned_and_erased_days_contribute_nothing() {
        let days = month_days(2025, 1);
        let types = vec![eight_hour_shift("A")];
        let mut assignments = AssignmentMap::new();
        paint(&mut assignments, "2025-01-10", "deleted-shift");
        assignments.insert(
            "2025-01-11".into(),
            DayAssignment {
                date: "2025-01-11".into(),
                shift_type_id: None,
                note: Some("free".into()),
            },
        );

        let stats = aggregate(&days, &assignments, &types, &HolidayMap::new());
        assert_eq!(stats.total_hours, 0.0);
        assert_eq!(stats.assigned_days(), 0);
        assert!(stats.by_shift.is_empty());
    }

    #[test]
    fn month_breakdown_sums_to_year_total() {
        let types = vec![eight_hour_shift("A")];
        let mut assignments = AssignmentMap::new();
        // A scattering across the year, including Feb 29.
        for date in [
            "2024-01-03",
            "2024-02-29",
            "2024-06-15",
            "2024-07-04",
            "2024-11-30",
            "2024-12-25",
        ] {
            paint(&mut assignments, date, "A");
        }
        let mut holidays = HolidayMap::new();
        holiday(&mut holidays, "2024-12-25", "Christmas");

        let year = aggregate_year(2024, &assignments, &types, &holidays);
        assert_eq!(year.months.len(), 12);
        let summed: f64 = year.months.iter().map(|m| m.total_hours).sum();
        assert!((summed - year.total.total_hours).abs() < 1e-9);
        let days_summed: u32 = year.months.iter().map(|m| m.days_in_period).sum();
        assert_eq!(days_summed, 366);
        assert_eq!(year.total.days_in_period, 366);
        assert_eq!(year.total.by_shift.get("A").unwrap().count, 6);
    }

    #[test]
    fn percentage_helpers() {
        let days = month_days(2025, 1);
        let types = vec![eight_hour_shift("A")];
        let mut assignments = AssignmentMap::new();
        for d in ["2025-01-02", "2025-01-03"] {
            paint(&mut assignments, d, "A");
        }
        let stats = aggregate(&days, &assignments, &types, &HolidayMap::new());
        assert!((stats.load_percent(MONTH_REFERENCE_HOURS) - 10.0).abs() < 1e-9);
        assert!((stats.presence_percent() - 2.0 / 31.0 * 100.0).abs() < 1e-9);
        assert_eq!(stats.load_percent(0.0), 0.0);
    }
}
