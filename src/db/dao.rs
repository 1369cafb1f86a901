#![cfg(feature = "native-db")]
use crate::db::connection;
use crate::schedule::{AssignmentMap, DayAssignment, Holiday, HolidayMap, ShiftType};
use rusqlite::{params, Result, Row};
use serde::{Deserialize, Serialize};
use serde_json;

// ================= Shift types =================
fn shift_type_from_row(row: &Row) -> Result<ShiftType> {
    let duration: Option<f64> = row.get(6)?;
    Ok(ShiftType {
        id: row.get::<_, i64>(0)?.to_string(),
        name: row.get(1)?,
        code: row.get(2)?,
        color: row.get(3)?,
        start_time: row.get(4)?,
        end_time: row.get(5)?,
        // Boundary sanitising: a bad stored value means "derive from times"
        duration_hours: duration.filter(|h| h.is_finite() && *h >= 0.0),
    })
}

pub fn list_shift_types() -> Result<Vec<ShiftType>> {
    let conn = connection();
    let mut stmt = conn.prepare(
        "SELECT id, name, code, color, start_time, end_time, duration_hours FROM ShiftTypes ORDER BY id",
    )?;
    let rows = stmt.query_map([], |r| shift_type_from_row(r))?;
    Ok(rows.filter_map(|r| r.ok()).collect())
}

pub fn create_shift_type(
    name: &str,
    code: &str,
    color: &str,
    start_time: &str,
    end_time: &str,
    duration_hours: Option<f64>,
) -> Result<String> {
    let conn = connection();
    conn.execute(
        "INSERT INTO ShiftTypes (name, code, color, start_time, end_time, duration_hours) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![name, code, color, start_time, end_time, duration_hours],
    )?;
    Ok(conn.last_insert_rowid().to_string())
}

pub fn update_shift_type(s: &ShiftType) -> Result<()> {
    let conn = connection();
    conn.execute(
        "UPDATE ShiftTypes SET name=?1, code=?2, color=?3, start_time=?4, end_time=?5, duration_hours=?6 WHERE id=?7",
        params![s.name, s.code, s.color, s.start_time, s.end_time, s.duration_hours, s.id.parse::<i64>().unwrap_or(0)],
    )?;
    Ok(())
}

// Historical assignments keep their reference; orphans render unpainted.
pub fn delete_shift_type(id: &str) -> Result<()> {
    let conn = connection();
    conn.execute(
        "DELETE FROM ShiftTypes WHERE id=?1",
        params![id.parse::<i64>().unwrap_or(0)],
    )?;
    Ok(())
}

// ================= Day assignments =================
fn assignment_from_row(row: &Row) -> Result<DayAssignment> {
    Ok(DayAssignment {
        date: row.get(0)?,
        shift_type_id: row.get(1)?,
        note: row.get(2)?,
    })
}

pub fn get_assignments() -> Result<AssignmentMap> {
    let conn = connection();
    let mut stmt = conn.prepare("SELECT date, shift_type_id, note FROM DayAssignments")?;
    let rows = stmt.query_map([], |r| assignment_from_row(r))?;
    Ok(rows
        .filter_map(|r| r.ok())
        .map(|a| (a.date.clone(), a))
        .collect())
}

pub fn upsert_assignment(a: &DayAssignment) -> Result<()> {
    let conn = connection();
    conn.execute(
        "INSERT INTO DayAssignments (date, shift_type_id, note) VALUES (?1, ?2, ?3) ON CONFLICT(date) DO UPDATE SET shift_type_id=excluded.shift_type_id, note=excluded.note",
        params![a.date, a.shift_type_id, a.note],
    )?;
    Ok(())
}

#[allow(dead_code)]
pub fn delete_assignment(date: &str) -> Result<()> {
    let conn = connection();
    conn.execute("DELETE FROM DayAssignments WHERE date=?1", params![date])?;
    Ok(())
}

// ================= Holidays =================
fn holiday_from_row(row: &Row) -> Result<Holiday> {
    Ok(Holiday {
        date: row.get(0)?,
        name: row.get(1)?,
        country_code: row.get(2)?,
    })
}

pub fn list_holidays() -> Result<HolidayMap> {
    let conn = connection();
    let mut stmt = conn.prepare("SELECT date, name, country_code FROM Holidays")?;
    let rows = stmt.query_map([], |r| holiday_from_row(r))?;
    Ok(rows
        .filter_map(|r| r.ok())
        .map(|h| (h.date.clone(), h))
        .collect())
}

pub fn upsert_holiday(h: &Holiday) -> Result<()> {
    let conn = connection();
    conn.execute(
        "INSERT INTO Holidays (date, name, country_code) VALUES (?1, ?2, ?3) ON CONFLICT(date) DO UPDATE SET name=excluded.name, country_code=excluded.country_code",
        params![h.date, h.name, h.country_code],
    )?;
    Ok(())
}

// Bulk import merges by date, so re-running an import never duplicates rows.
pub fn upsert_holidays(holidays: &[Holiday]) -> Result<usize> {
    let conn = connection();
    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO Holidays (date, name, country_code) VALUES (?1, ?2, ?3) ON CONFLICT(date) DO UPDATE SET name=excluded.name, country_code=excluded.country_code",
        )?;
        for h in holidays {
            stmt.execute(params![h.date, h.name, h.country_code])?;
        }
    }
    tx.commit()?;
    Ok(holidays.len())
}

pub fn delete_holiday(date: &str) -> Result<()> {
    let conn = connection();
    conn.execute("DELETE FROM Holidays WHERE date=?1", params![date])?;
    Ok(())
}

// ================= Configuration =================
#[derive(Debug, Clone)]
pub struct Configuration {
    pub profile_name: String,
    pub theme: String,
    pub language: String,    // 'system' | 'en' | 'es'
    pub date_format: String, // 'YYYY-MM-DD' | 'DD/MM/YYYY' | 'MM/DD/YYYY' | 'DD MMM YYYY'
}

pub fn get_configuration() -> Result<Configuration> {
    let conn = connection();
    conn.query_row(
        "SELECT profile_name, theme, language, date_format FROM Configuration WHERE id = 1",
        [],
        |r| {
            Ok(Configuration {
                profile_name: r.get(0)?,
                theme: r.get(1).unwrap_or_else(|_| "System".to_string()),
                language: r.get(2).unwrap_or_else(|_| "system".to_string()),
                date_format: r.get(3).unwrap_or_else(|_| "YYYY-MM-DD".to_string()),
            })
        },
    )
}

pub fn update_configuration(name: &str, theme: &str, language: &str, date_format: &str) -> Result<()> {
    let conn = connection();
    conn.execute(
        "UPDATE Configuration SET profile_name=?1, theme=?2, language=?3, date_format=?4 WHERE id=1",
        params![name, theme, language, date_format],
    )?;
    Ok(())
}

pub fn configuration_is_set() -> bool {
    if let Ok(cfg) = get_configuration() {
        !cfg.profile_name.trim().is_empty()
    } else {
        false
    }
}

// ================= Export/Import (excluding Configuration) =================
#[derive(Serialize, Deserialize)]
pub struct ExportPayload {
    pub shift_types: Vec<ShiftType>,
    #[serde(default)]
    pub assignments: Vec<DayAssignment>,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

pub fn export_data() -> Result<String> {
    let shift_types = list_shift_types()?;
    let mut assignments: Vec<DayAssignment> = get_assignments()?.into_values().collect();
    assignments.sort_by(|a, b| a.date.cmp(&b.date));
    let mut holidays: Vec<Holiday> = list_holidays()?.into_values().collect();
    holidays.sort_by(|a, b| a.date.cmp(&b.date));

    let payload = ExportPayload {
        shift_types,
        assignments,
        holidays,
    };
    Ok(serde_json::to_string_pretty(&payload).unwrap())
}

pub fn import_data(json: &str) -> Result<()> {
    let payload: ExportPayload =
        serde_json::from_str(json).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let conn = connection();
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM DayAssignments", [])?;
    tx.execute("DELETE FROM Holidays", [])?;
    tx.execute("DELETE FROM ShiftTypes", [])?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO ShiftTypes (id, name, code, color, start_time, end_time, duration_hours) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        for s in &payload.shift_types {
            stmt.execute(params![
                s.id.parse::<i64>().unwrap_or(0),
                s.name,
                s.code,
                s.color,
                s.start_time,
                s.end_time,
                s.duration_hours.filter(|h| h.is_finite() && *h >= 0.0)
            ])?;
        }
    }
    {
        let mut stmt =
            tx.prepare("INSERT OR REPLACE INTO DayAssignments (date, shift_type_id, note) VALUES (?1, ?2, ?3)")?;
        for a in &payload.assignments {
            stmt.execute(params![a.date, a.shift_type_id, a.note])?;
        }
    }
    {
        let mut stmt =
            tx.prepare("INSERT OR REPLACE INTO Holidays (date, name, country_code) VALUES (?1, ?2, ?3)")?;
        for h in &payload.holidays {
            stmt.execute(params![h.date, h.name, h.country_code])?;
        }
    }
    tx.commit()?;
    Ok(())
}

// Destructive: remove all data from database (keeps Configuration row)
pub fn reset_data() -> Result<()> {
    let conn = connection();
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM DayAssignments", [])?;
    tx.execute("DELETE FROM Holidays", [])?;
    tx.execute("DELETE FROM ShiftTypes", [])?;
    tx.execute(
        "UPDATE Configuration SET profile_name='', theme='System', language='system', date_format='YYYY-MM-DD' WHERE id=1",
        [],
    )?;
    tx.commit()?;
    Ok(())
}
