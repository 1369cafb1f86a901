use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json;
use std::sync::Mutex;
use web_sys::{window, Storage};

use crate::schedule::{AssignmentMap, DayAssignment, Holiday, HolidayMap, ShiftType};

const KEY_DATA: &str = "shifter_data";
const KEY_CONFIGURATION: &str = "shifter_configuration";

fn storage() -> Storage {
    window().and_then(|w| w.local_storage().ok().flatten()).expect("localStorage")
}

// Starter palette for a fresh install, same as the native migration.
fn default_shift_types() -> Vec<ShiftType> {
    vec![
        ShiftType {
            id: "1".into(),
            name: "Morning".into(),
            code: "M".into(),
            color: "#10b981".into(),
            start_time: "06:00".into(),
            end_time: "14:00".into(),
            duration_hours: None,
        },
        ShiftType {
            id: "2".into(),
            name: "Afternoon".into(),
            code: "A".into(),
            color: "#f59e0b".into(),
            start_time: "14:00".into(),
            end_time: "22:00".into(),
            duration_hours: None,
        },
        ShiftType {
            id: "3".into(),
            name: "Night".into(),
            code: "N".into(),
            color: "#6366f1".into(),
            start_time: "22:00".into(),
            end_time: "06:00".into(),
            duration_hours: None,
        },
    ]
}

#[derive(Serialize, Deserialize)]
struct WasmDb {
    shift_types: Vec<ShiftType>,
    next_shift_type_id: i64,
    #[serde(default)]
    assignments: AssignmentMap,
    #[serde(default)]
    holidays: HolidayMap,
}

impl Default for WasmDb {
    fn default() -> Self {
        Self {
            shift_types: default_shift_types(),
            next_shift_type_id: 4,
            assignments: AssignmentMap::new(),
            holidays: HolidayMap::new(),
        }
    }
}

static DB: Lazy<Mutex<WasmDb>> = Lazy::new(|| {
    let raw = storage().get_item(KEY_DATA).ok().flatten();
    let mut db: WasmDb = raw.and_then(|s| serde_json::from_str(&s).ok()).unwrap_or_default();
    if db.next_shift_type_id <= 0 {
        db.next_shift_type_id = 1;
    }
    // Boundary sanitising: bad stored durations mean "derive from times"
    for s in &mut db.shift_types {
        if let Some(h) = s.duration_hours {
            if !h.is_finite() || h < 0.0 {
                s.duration_hours = None;
            }
        }
    }
    Mutex::new(db)
});

fn persist() {
    if let Ok(db) = DB.lock() {
        if let Ok(json) = serde_json::to_string(&*db) {
            let _ = storage().set_item(KEY_DATA, &json);
        }
    }
}

// API mirrors a subset of native dao
pub fn list_shift_types() -> Vec<ShiftType> {
    DB.lock().unwrap().shift_types.clone()
}

pub fn create_shift_type(
    name: &str,
    code: &str,
    color: &str,
    start_time: &str,
    end_time: &str,
    duration_hours: Option<f64>,
) -> String {
    let mut db = DB.lock().unwrap();
    let id = db.next_shift_type_id.to_string();
    db.next_shift_type_id += 1;
    db.shift_types.push(ShiftType {
        id: id.clone(),
        name: name.into(),
        code: code.into(),
        color: color.into(),
        start_time: start_time.into(),
        end_time: end_time.into(),
        duration_hours: duration_hours.filter(|h| h.is_finite() && *h >= 0.0),
    });
    drop(db);
    persist();
    id
}

pub fn update_shift_type(s: &ShiftType) {
    let mut db = DB.lock().unwrap();
    if let Some(existing) = db.shift_types.iter_mut().find(|x| x.id == s.id) {
        *existing = s.clone();
        existing.duration_hours = existing.duration_hours.filter(|h| h.is_finite() && *h >= 0.0);
    }
    drop(db);
    persist();
}

// Painted days keep their reference; orphans render unpainted.
pub fn delete_shift_type(id: &str) {
    let mut db = DB.lock().unwrap();
    db.shift_types.retain(|s| s.id != id);
    drop(db);
    persist();
}

// ================= Day assignments =================
pub fn get_assignments() -> AssignmentMap {
    DB.lock().unwrap().assignments.clone()
}

pub fn upsert_assignment(a: &DayAssignment) {
    let mut db = DB.lock().unwrap();
    db.assignments.insert(a.date.clone(), a.clone());
    drop(db);
    persist();
}

#[allow(dead_code)]
pub fn delete_assignment(date: &str) {
    let mut db = DB.lock().unwrap();
    db.assignments.remove(date);
    drop(db);
    persist();
}

// ================= Holidays =================
pub fn list_holidays() -> HolidayMap {
    DB.lock().unwrap().holidays.clone()
}

pub fn upsert_holiday(h: &Holiday) {
    let mut db = DB.lock().unwrap();
    db.holidays.insert(h.date.clone(), h.clone());
    drop(db);
    persist();
}

// Bulk import merges by date, so re-running an import never duplicates rows.
pub fn upsert_holidays(holidays: &[Holiday]) -> usize {
    let mut db = DB.lock().unwrap();
    for h in holidays {
        db.holidays.insert(h.date.clone(), h.clone());
    }
    drop(db);
    persist();
    holidays.len()
}

pub fn delete_holiday(date: &str) {
    let mut db = DB.lock().unwrap();
    db.holidays.remove(date);
    drop(db);
    persist();
}

// Configuration stored as separate JSON object to keep compatibility
#[derive(Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub profile_name: String,
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_language() -> String {
    "system".to_string()
}
fn default_date_format() -> String {
    "YYYY-MM-DD".to_string()
}

pub fn get_configuration() -> Option<Configuration> {
    storage()
        .get_item(KEY_CONFIGURATION)
        .ok()
        .flatten()
        .and_then(|s| serde_json::from_str(&s).ok())
}

pub fn update_configuration(name: &str, theme: &str, language: &str, date_format: &str) {
    let cfg = Configuration {
        profile_name: name.to_string(),
        theme: theme.to_string(),
        language: if language.is_empty() { default_language() } else { language.to_string() },
        date_format: if date_format.is_empty() { default_date_format() } else { date_format.to_string() },
    };
    if let Ok(json) = serde_json::to_string(&cfg) {
        let _ = storage().set_item(KEY_CONFIGURATION, &json);
    }
}

pub fn configuration_is_set() -> bool {
    if let Some(cfg) = get_configuration() {
        return !cfg.profile_name.trim().is_empty();
    }
    false
}

// Export/Import (excluding Configuration)
#[derive(Serialize, Deserialize)]
pub struct ExportPayload {
    pub shift_types: Vec<ShiftType>,
    #[serde(default)]
    pub assignments: Vec<DayAssignment>,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

pub fn export_data() -> String {
    let db = DB.lock().unwrap();
    let mut assignments: Vec<DayAssignment> = db.assignments.values().cloned().collect();
    assignments.sort_by(|a, b| a.date.cmp(&b.date));
    let mut holidays: Vec<Holiday> = db.holidays.values().cloned().collect();
    holidays.sort_by(|a, b| a.date.cmp(&b.date));
    serde_json::to_string_pretty(&ExportPayload {
        shift_types: db.shift_types.clone(),
        assignments,
        holidays,
    })
    .unwrap()
}

pub fn import_data(json: &str) -> bool {
    if let Ok(payload) = serde_json::from_str::<ExportPayload>(json) {
        if let Ok(mut db) = DB.lock() {
            let max_id = payload
                .shift_types
                .iter()
                .filter_map(|s| s.id.parse::<i64>().ok())
                .max()
                .unwrap_or(0);
            db.shift_types = payload.shift_types;
            db.next_shift_type_id = max_id + 1;
            db.assignments = payload
                .assignments
                .into_iter()
                .map(|a| (a.date.clone(), a))
                .collect();
            db.holidays = payload
                .holidays
                .into_iter()
                .map(|h| (h.date.clone(), h))
                .collect();
            drop(db);
            persist();
            return true;
        }
    }
    false
}

// Wipe all data (except configuration)
pub fn reset_data() -> bool {
    if let Ok(mut db) = DB.lock() {
        *db = WasmDb::default();
        drop(db);
        persist();
        // also clear configuration entry so the app shows the landing page again
        let _ = storage().remove_item(KEY_CONFIGURATION);
        true
    } else {
        false
    }
}
