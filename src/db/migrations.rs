//! Database schema migration management and versioning system.
//!
//! Maintains a precise record of applied migrations, runs pending migrations
//! during database initialization, and executes every migration inside a
//! transaction so partial failures never leave the schema inconsistent.
//!
//! The uniqueness constraints declared here are the storage-level enforcement
//! of room and teacher exclusivity for class schedules. The advisory conflict
//! check in `db::schedules` is a fast-path courtesy to the user; these
//! constraints are the guarantee.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Represents a single database migration with execution logic.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique version number for ordering and tracking
    version: u32,
    /// Human-readable name describing the migration's purpose
    name: &'static str,
    /// Function that applies the schema changes within a transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Central migration system manager that orchestrates schema evolution.
///
/// Holds the complete registry of available migrations in version order and
/// applies the pending ones atomically, recording each completion in the
/// tracking table.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all database migrations in chronological order.
    fn register_migrations(&mut self) {
        // Version 1: core record tables
        // Departments, students, teachers and courses with their uniqueness
        // rules and lookup indices.
        self.add_migration(1, "create_core_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS departments (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS students (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    dob DATE NOT NULL,
                    email TEXT NOT NULL UNIQUE
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS teachers (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL UNIQUE
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS courses (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    credit TEXT NOT NULL,
                    department_id INTEGER REFERENCES departments(id) ON DELETE SET NULL
                )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_courses_department ON courses(department_id)", [])?;

            Ok(())
        });

        // Version 2: enrollments
        // One row per (student, course, semester); the unique constraint
        // rejects duplicate enrollments at the storage level.
        self.add_migration(2, "add_enrollments", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS enrollments (
                    id INTEGER PRIMARY KEY,
                    student_id INTEGER NOT NULL REFERENCES students(id),
                    course_id INTEGER NOT NULL REFERENCES courses(id),
                    semester TEXT NOT NULL,
                    grade TEXT NOT NULL,
                    UNIQUE(student_id, course_id, semester)
                )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_enrollments_student ON enrollments(student_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_enrollments_course ON enrollments(course_id)", [])?;

            Ok(())
        });

        // Version 3: rooms and time slots with default seed rows
        self.add_migration(3, "add_rooms_and_timeslots", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS timeslots (
                    id INTEGER PRIMARY KEY,
                    start_time TIME NOT NULL,
                    end_time TIME NOT NULL,
                    UNIQUE(start_time, end_time)
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS rooms (
                    id INTEGER PRIMARY KEY,
                    room_number TEXT NOT NULL UNIQUE,
                    capacity INTEGER NOT NULL DEFAULT 30
                )",
                [],
            )?;

            // Standard teaching periods; idempotent by the unique constraints.
            for (start, end) in [
                ("08:00:00", "09:30:00"),
                ("09:45:00", "11:15:00"),
                ("11:30:00", "13:00:00"),
                ("14:00:00", "15:30:00"),
                ("15:45:00", "17:15:00"),
            ] {
                tx.execute(
                    "INSERT OR IGNORE INTO timeslots (start_time, end_time) VALUES (?1, ?2)",
                    params![start, end],
                )?;
            }

            for (number, capacity) in [("101", 30), ("102", 35), ("103", 25), ("201", 40), ("202", 30), ("203", 35)] {
                tx.execute(
                    "INSERT OR IGNORE INTO rooms (room_number, capacity) VALUES (?1, ?2)",
                    params![number, capacity],
                )?;
            }

            Ok(())
        });

        // Version 4: class schedules
        // The two unique constraints are room exclusivity and teacher
        // exclusivity per time slot. They stay declared even though the
        // application checks conflicts before writing.
        self.add_migration(4, "add_class_schedules", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS class_schedules (
                    id INTEGER PRIMARY KEY,
                    course_id INTEGER NOT NULL,
                    teacher_id INTEGER NOT NULL,
                    timeslot_id INTEGER NOT NULL,
                    room_id INTEGER NOT NULL,
                    FOREIGN KEY (course_id) REFERENCES courses(id) ON DELETE CASCADE,
                    FOREIGN KEY (teacher_id) REFERENCES teachers(id) ON DELETE CASCADE,
                    FOREIGN KEY (timeslot_id) REFERENCES timeslots(id) ON DELETE CASCADE,
                    FOREIGN KEY (room_id) REFERENCES rooms(id) ON DELETE CASCADE,
                    UNIQUE (timeslot_id, room_id),
                    UNIQUE (teacher_id, timeslot_id)
                )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_schedules_course ON class_schedules(course_id)", [])?;

            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Executes all pending migrations in the correct order.
    ///
    /// Creates the tracking table if needed, determines the current version,
    /// and applies everything newer inside a single transaction. A failing
    /// migration rolls the whole batch back.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;

        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_success!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    /// Checks if a specific migration version has been applied.
    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: i32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// Retrieves the complete migration history with timestamps.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    /// Rolls back migration records to a target version (debug builds only).
    ///
    /// Removes tracking rows without reversing schema changes; useful only
    /// for development and testing.
    #[cfg(debug_assertions)]
    pub fn rollback_to(&self, conn: &mut Connection, target_version: u32) -> Result<()> {
        let current_version = self.get_current_version(conn)?;

        if target_version >= current_version {
            msg_info!(Message::NothingToRollback);
            return Ok(());
        }

        msg_info!(Message::RollingBack(current_version, target_version));

        conn.execute("DELETE FROM migrations WHERE version > ?1", params![target_version])?;

        msg_success!(Message::RollbackCompleted(target_version));
        Ok(())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Initializes a database connection with all pending migrations applied.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

/// Retrieves the current database schema version.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

/// Checks if the database requires migration to the latest schema version.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    let latest = manager.migrations.last().map(|m| m.version).unwrap_or(0);
    Ok(current < latest)
}

/// Every record table the migrations create, in creation order.
const RECORD_TABLES: [&str; 8] = [
    "departments",
    "students",
    "teachers",
    "courses",
    "enrollments",
    "rooms",
    "timeslots",
    "class_schedules",
];

/// Row counts for each record table the current schema version has created.
///
/// Tables a later migration would add are skipped, so the summary stays
/// accurate on a partially migrated database.
pub fn record_counts(conn: &Connection) -> Result<Vec<(String, i64)>> {
    let mut counts = Vec::new();
    for table in RECORD_TABLES {
        let present = conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if present {
            let rows: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))?;
            counts.push((table.to_string(), rows));
        }
    }
    Ok(counts)
}
