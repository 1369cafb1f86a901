// Native (sqlite) path
#[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
pub mod native {
    use once_cell::sync::Lazy;
    use rusqlite::{Connection, Result};
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};
    #[path = "dao.rs"]
    pub mod dao;

    pub static DB: Lazy<Mutex<Connection>> = Lazy::new(|| {
        let path = db_file_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let conn = Connection::open(path).expect("open sqlite db");
        let _ = conn.execute("PRAGMA foreign_keys = ON;", []);
        apply_migrations(&conn).expect("apply migrations");
        Mutex::new(conn)
    });

    pub fn connection() -> MutexGuard<'static, Connection> {
        DB.lock().unwrap()
    }

    fn db_file_path() -> PathBuf {
        let mut base = dirs_next::data_local_dir().unwrap_or(std::env::current_dir().unwrap());
        base.push("shifter");
        base.push("data.db");
        base
    }

    fn apply_migrations(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS _migrations (id INTEGER PRIMARY KEY, name TEXT NOT NULL UNIQUE);",
            [],
        )?;
        let migrations: &[(&str, &str)] = &[("0001_init", super::MIGRATION_0001_INIT)];
        for (name, sql) in migrations {
            let already: Option<i64> = conn
                .query_row("SELECT id FROM _migrations WHERE name = ?1", [name], |row| row.get(0))
                .optional()?;
            if already.is_none() {
                conn.execute_batch(sql)?;
                conn.execute("INSERT INTO _migrations (name) VALUES (?1)", [name])?;
            }
        }
        // Idempotent patch: ensure ShiftTypes has the duration override column
        let mut stmt = conn.prepare("PRAGMA table_info(ShiftTypes)")?;
        let mut has_duration = false;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let col_name: String = row.get(1)?; // 1 = name
            if col_name == "duration_hours" {
                has_duration = true;
            }
        }
        if !has_duration {
            let _ = conn.execute("ALTER TABLE ShiftTypes ADD COLUMN duration_hours REAL", []);
        }
        Ok(())
    }

    // Helper trait
    trait OptionalRow {
        type Output;
        fn optional(self) -> Result<Option<Self::Output>>;
    }
    impl<T> OptionalRow for rusqlite::Result<T> {
        type Output = T;
        fn optional(self) -> Result<Option<T>> {
            match self {
                Ok(v) => Ok(Some(v)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        }
    }
}

// Wasm path re-export minimal store API
#[cfg(target_arch = "wasm32")]
pub mod wasm_store;

#[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
const MIGRATION_0001_INIT: &str = r#"
-- Core tables
CREATE TABLE IF NOT EXISTS Configuration (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    profile_name TEXT NOT NULL,
    theme TEXT NOT NULL DEFAULT 'System',
    language TEXT NOT NULL DEFAULT 'system',
    date_format TEXT NOT NULL DEFAULT 'YYYY-MM-DD'
);
INSERT OR IGNORE INTO Configuration (id, profile_name, theme, language, date_format) VALUES (1, '', 'System', 'system', 'YYYY-MM-DD');

CREATE TABLE IF NOT EXISTS ShiftTypes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    code TEXT NOT NULL,
    color TEXT NOT NULL DEFAULT '#3b82f6',
    start_time TEXT NOT NULL DEFAULT '',
    end_time TEXT NOT NULL DEFAULT '',
    duration_hours REAL
);

-- One row per calendar date; painting upserts on the date key.
CREATE TABLE IF NOT EXISTS DayAssignments (
    date TEXT PRIMARY KEY,
    shift_type_id TEXT,
    note TEXT
);

CREATE TABLE IF NOT EXISTS Holidays (
    date TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    country_code TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_assignments_shift ON DayAssignments(shift_type_id);

-- Starter palette for a fresh install
INSERT INTO ShiftTypes (name, code, color, start_time, end_time) VALUES ('Morning', 'M', '#10b981', '06:00', '14:00');
INSERT INTO ShiftTypes (name, code, color, start_time, end_time) VALUES ('Afternoon', 'A', '#f59e0b', '14:00', '22:00');
INSERT INTO ShiftTypes (name, code, color, start_time, end_time) VALUES ('Night', 'N', '#6366f1', '22:00', '06:00');
"#;

// Native connection re-export for external code
#[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
pub use native::connection;
#[cfg(all(feature = "native-db", not(target_arch = "wasm32")))]
pub use native::dao;
