//! Resolving and painting day assignments.

use chrono::NaiveDate;

use super::grid::date_key;
use super::{AssignmentMap, DayAssignment, ShiftType};

/// What the pointer does when it touches a day cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    /// Browsing only; touching a day never mutates anything.
    Browse,
    /// Clears the painted shift but keeps the day's note.
    Eraser,
    /// Paints the shift with this id.
    Shift(String),
}

/// The shift painted on `date`, if any. A missing record, an erased record
/// and a record pointing at an id no longer in the catalog all resolve to
/// `None`; an orphaned reference is just an unpainted day, not an error.
pub fn resolve_shift<'a>(
    date: NaiveDate,
    assignments: &AssignmentMap,
    shift_types: &'a [ShiftType],
) -> Option<&'a ShiftType> {
    let assignment = assignments.get(&date_key(date))?;
    let id = assignment.shift_type_id.as_deref()?;
    shift_types.iter().find(|s| s.id == id)
}

/// Applies the tool to one day, preserving any existing note verbatim.
/// Returns whether the map changed, so drag-painting over the same cell
/// twice costs nothing and triggers no redundant persistence.
pub fn apply_paint(date: NaiveDate, tool: &Tool, assignments: &mut AssignmentMap) -> bool {
    let wanted = match tool {
        Tool::Browse => return false,
        Tool::Eraser => None,
        Tool::Shift(id) => Some(id.clone()),
    };
    let key = date_key(date);
    let note = match assignments.get(&key) {
        Some(existing) if existing.shift_type_id == wanted => return false,
        Some(existing) => existing.note.clone(),
        None => None,
    };
    if wanted.is_none() && note.is_none() && !assignments.contains_key(&key) {
        // Erasing a day that was never painted leaves no record behind.
        return false;
    }
    assignments.insert(
        key.clone(),
        DayAssignment {
            date: key,
            shift_type_id: wanted,
            note,
        },
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn catalog() -> Vec<ShiftType> {
        vec![
            ShiftType {
                id: "A".into(),
                name: "Early".into(),
                code: "E".into(),
                color: "#10b981".into(),
                start_time: "06:00".into(),
                end_time: "14:00".into(),
                duration_hours: None,
            },
            ShiftType {
                id: "B".into(),
                name: "Late".into(),
                code: "L".into(),
                color: "#f59e0b".into(),
                start_time: "14:00".into(),
                end_time: "22:00".into(),
                duration_hours: None,
            },
        ]
    }

    fn assigned(date: &str, shift: Option<&str>, note: Option<&str>) -> AssignmentMap {
        let mut map = HashMap::new();
        map.insert(
            date.to_string(),
            DayAssignment {
                date: date.to_string(),
                shift_type_id: shift.map(String::from),
                note: note.map(String::from),
            },
        );
        map
    }

    #[test]
    fn resolves_painted_day() {
        let map = assigned("2025-03-10", Some("A"), None);
        let types = catalog();
        let shift = resolve_shift(day(2025, 3, 10), &map, &types).unwrap();
        assert_eq!(shift.id, "A");
    }

    #[test]
    fn unpainted_erased_and_orphaned_all_resolve_to_none() {
        let types = catalog();
        assert!(resolve_shift(day(2025, 3, 10), &HashMap::new(), &types).is_none());

        let erased = assigned("2025-03-10", None, Some("dentist"));
        assert!(resolve_shift(day(2025, 3, 10), &erased, &types).is_none());

        let orphaned = assigned("2025-03-10", Some("gone"), None);
        assert!(resolve_shift(day(2025, 3, 10), &orphaned, &types).is_none());
    }

    #[test]
    fn painting_sets_the_shift() {
        let mut map = HashMap::new();
        assert!(apply_paint(day(2025, 3, 10), &Tool::Shift("A".into()), &mut map));
        let a = map.get("2025-03-10").unwrap();
        assert_eq!(a.shift_type_id.as_deref(), Some("A"));
        assert_eq!(a.note, None);
    }

    #[test]
    fn eraser_preserves_the_note() {
        let mut map = assigned("2025-03-10", Some("A"), Some("dentist"));
        assert!(apply_paint(day(2025, 3, 10), &Tool::Eraser, &mut map));
        let a = map.get("2025-03-10").unwrap();
        assert_eq!(a.shift_type_id, None);
        assert_eq!(a.note.as_deref(), Some("dentist"));
    }

    #[test]
    fn repaint_preserves_the_note() {
        let mut map = assigned("2025-03-10", Some("A"), Some("dentist"));
        assert!(apply_paint(day(2025, 3, 10), &Tool::Shift("B".into()), &mut map));
        let a = map.get("2025-03-10").unwrap();
        assert_eq!(a.shift_type_id.as_deref(), Some("B"));
        assert_eq!(a.note.as_deref(), Some("dentist"));
    }

    #[test]
    fn browse_never_mutates() {
        let mut map = assigned("2025-03-10", Some("A"), None);
        let before = map.clone();
        assert!(!apply_paint(day(2025, 3, 10), &Tool::Browse, &mut map));
        assert_eq!(map, before);
    }

    #[test]
    fn drag_over_same_cell_is_idempotent() {
        let mut map = HashMap::new();
        let tool = Tool::Shift("A".into());
        assert!(apply_paint(day(2025, 3, 10), &tool, &mut map));
        assert!(!apply_paint(day(2025, 3, 10), &tool, &mut map));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn erasing_a_blank_day_leaves_no_record() {
        let mut map = HashMap::new();
        assert!(!apply_paint(day(2025, 3, 10), &Tool::Eraser, &mut map));
        assert!(map.is_empty());
    }
}
