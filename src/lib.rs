//! # Cams - College Academic Management System
//!
//! A command-line records manager for a small college: departments, students,
//! teachers, courses, enrollments, rooms, time slots, and class schedules.
//!
//! ## Features
//!
//! - **Records Management**: Create, list, edit, and delete every entity
//! - **Enrollment Tracking**: Assign students to courses per semester with grades
//! - **Schedule Conflict Detection**: Room and teacher exclusivity checks before
//!   any class schedule is written
//! - **Data Export**: Export records to CSV, JSON, and Excel formats
//! - **Interactive Prompts**: Guided forms when a subcommand is run without arguments
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cams::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
