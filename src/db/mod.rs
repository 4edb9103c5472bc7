//! Database layer for the cams application.
//!
//! Provides a complete data persistence layer built on SQLite, offering
//! type-safe operations for every college record. Each entity has its own
//! repository module that owns the parameterized queries for its table; the
//! schema itself is created and evolved by the migration system.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cams::db::departments::{Department, Departments};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut departments = Departments::new()?;
//! departments.create(&Department::new("Mathematics".to_string()))?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Department records.
pub mod departments;

/// Student records.
pub mod students;

/// Teacher records.
pub mod teachers;

/// Course records, linked to departments.
pub mod courses;

/// Enrollment records: one student in one course for one semester.
pub mod enrollments;

/// Room records.
pub mod rooms;

/// Time slot records.
pub mod timeslots;

/// Class schedule records and the conflict-checked write paths.
pub mod schedules;
