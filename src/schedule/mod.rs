//! Calendar engine: month grids, paint tools and statistics.
//!
//! Everything in here is pure and synchronous; the views hand in snapshots
//! of the stored records and render whatever comes back. Malformed data
//! (orphaned shift references, missing durations) degrades to "unpainted"
//! or zero hours instead of erroring.

pub mod grid;
pub mod paint;
pub mod stats;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A reusable shift template the user paints onto days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftType {
    pub id: String,
    pub name: String,
    /// 1-3 character abbreviation shown inside the day cell.
    pub code: String,
    /// Hex color, e.g. "#10b981".
    pub color: String,
    /// "HH:MM" or empty when the shift has no nominal times.
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    /// Stored override in hours; `None` means derive from start/end.
    #[serde(default)]
    pub duration_hours: Option<f64>,
}

impl ShiftType {
    /// Nominal hours for one painted day. A stored duration wins; otherwise
    /// the value is derived from start/end, where an end before the start
    /// means the shift crosses midnight (22:00-06:00 is 8h, not -16h).
    /// Missing or unparseable times count as zero.
    pub fn hours(&self) -> f64 {
        if let Some(h) = self.duration_hours {
            if h.is_finite() && h >= 0.0 {
                return h;
            }
        }
        let (Some(start), Some(end)) = (parse_hhmm(&self.start_time), parse_hhmm(&self.end_time))
        else {
            return 0.0;
        };
        let mut minutes = end as i32 - start as i32;
        if minutes < 0 {
            minutes += 24 * 60;
        }
        minutes as f64 / 60.0
    }
}

/// The record for exactly one calendar date. `shift_type_id = None` is an
/// erased day; the note survives repaints untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAssignment {
    /// Canonical "YYYY-MM-DD" key, also the map key.
    pub date: String,
    pub shift_type_id: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// A date marked as non-working. Read-only from the calendar's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: String,
    pub name: String,
    #[serde(default)]
    pub country_code: String,
}

pub type AssignmentMap = HashMap<String, DayAssignment>;
pub type HolidayMap = HashMap<String, Holiday>;

fn parse_hhmm(s: &str) -> Option<u32> {
    let (h, m) = s.split_once(':')?;
    let h: u32 = h.trim().parse().ok()?;
    let m: u32 = m.trim().parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(start: &str, end: &str, stored: Option<f64>) -> ShiftType {
        ShiftType {
            id: "1".into(),
            name: "Test".into(),
            code: "T".into(),
            color: "#000000".into(),
            start_time: start.into(),
            end_time: end.into(),
            duration_hours: stored,
        }
    }

    #[test]
    fn derives_hours_from_times() {
        assert_eq!(shift("06:00", "14:00", None).hours(), 8.0);
        assert_eq!(shift("09:00", "16:30", None).hours(), 7.5);
    }

    #[test]
    fn overnight_shift_adds_a_day() {
        // 22:00-06:00 crosses midnight and must come out positive.
        assert_eq!(shift("22:00", "06:00", None).hours(), 8.0);
        assert_eq!(shift("23:30", "00:15", None).hours(), 0.75);
    }

    #[test]
    fn stored_duration_wins_over_times() {
        assert_eq!(shift("06:00", "14:00", Some(7.0)).hours(), 7.0);
    }

    #[test]
    fn bad_stored_duration_falls_back_to_times() {
        assert_eq!(shift("06:00", "14:00", Some(-3.0)).hours(), 8.0);
        assert_eq!(shift("06:00", "14:00", Some(f64::NAN)).hours(), 8.0);
    }

    #[test]
    fn missing_times_count_as_zero() {
        assert_eq!(shift("", "", None).hours(), 0.0);
        assert_eq!(shift("06:00", "", None).hours(), 0.0);
        assert_eq!(shift("6am", "2pm", None).hours(), 0.0);
    }

    #[test]
    fn equal_times_are_zero_hours() {
        assert_eq!(shift("08:00", "08:00", None).hours(), 0.0);
    }
}
