//! Data export functionality for external analysis and backup.
//!
//! Exports college records in CSV, JSON, or Excel format. File names are
//! timestamped so repeated exports never overwrite each other, unless the
//! caller provides an explicit output path.

use crate::db::{courses::Courses, enrollments::Enrollments, schedules::Schedules, students::Students};
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Enumeration of supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility
    Csv,
    /// Pretty-printed JSON preserving data types
    Json,
    /// Excel workbook with a formatted header row
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Enumeration of record sets available for export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// All students
    Students,
    /// All courses with their department names
    Courses,
    /// All enrollments with student and course names
    Enrollments,
    /// All class schedules with display columns
    Schedules,
}

impl ExportData {
    fn name(&self) -> &'static str {
        match self {
            ExportData::Students => "students",
            ExportData::Courses => "courses",
            ExportData::Enrollments => "enrollments",
            ExportData::Schedules => "schedules",
        }
    }
}

/// A record set flattened into headers and display rows, plus the typed
/// values for JSON output.
struct TableData {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
    json: serde_json::Value,
}

impl TableData {
    fn build<T: Serialize>(headers: Vec<&'static str>, records: &[T], to_row: impl Fn(&T) -> Vec<String>) -> Result<Self> {
        Ok(Self {
            headers,
            rows: records.iter().map(to_row).collect(),
            json: serde_json::to_value(records)?,
        })
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    /// Exports the selected record set and returns the written file path.
    pub fn export(&self, data: ExportData) -> Result<PathBuf> {
        let table = self.fetch(data)?;
        if table.rows.is_empty() {
            msg_bail_anyhow!(Message::NoDataToExport);
        }

        let path = match &self.output_path {
            Some(path) => path.clone(),
            None => {
                let timestamp = Local::now().format("%Y%m%d_%H%M%S");
                PathBuf::from(format!("cams_{}_{}.{}", data.name(), timestamp, self.format.extension()))
            }
        };

        match self.format {
            ExportFormat::Csv => self.write_csv(&path, &table)?,
            ExportFormat::Json => self.write_json(&path, &table)?,
            ExportFormat::Excel => self.write_excel(&path, &table)?,
        }

        Ok(path)
    }

    fn fetch(&self, data: ExportData) -> Result<TableData> {
        match data {
            ExportData::Students => {
                let students = Students::new()?.list()?;
                TableData::build(vec!["id", "name", "dob", "email"], &students, |s| {
                    vec![
                        s.id.unwrap_or(0).to_string(),
                        s.name.clone(),
                        s.dob.to_string(),
                        s.email.clone(),
                    ]
                })
            }
            ExportData::Courses => {
                let courses = Courses::new()?.list_detailed()?;
                TableData::build(vec!["id", "name", "credit", "department"], &courses, |c| {
                    vec![c.id.to_string(), c.name.clone(), c.credit.clone(), c.department.clone()]
                })
            }
            ExportData::Enrollments => {
                let enrollments = Enrollments::new()?.list_detailed()?;
                TableData::build(vec!["id", "student", "course", "semester", "grade"], &enrollments, |e| {
                    vec![
                        e.id.to_string(),
                        e.student.clone(),
                        e.course.clone(),
                        e.semester.clone(),
                        e.grade.clone(),
                    ]
                })
            }
            ExportData::Schedules => {
                let schedules = Schedules::new()?.list_detailed()?;
                TableData::build(vec!["id", "course", "teacher", "timeslot", "room"], &schedules, |s| {
                    vec![
                        s.id.to_string(),
                        s.course.clone(),
                        s.teacher.clone(),
                        s.timeslot.clone(),
                        s.room.clone(),
                    ]
                })
            }
        }
    }

    fn write_csv(&self, path: &PathBuf, table: &TableData) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json(&self, path: &PathBuf, table: &TableData) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_json::to_string_pretty(&table.json)?.as_bytes())?;
        Ok(())
    }

    fn write_excel(&self, path: &PathBuf, table: &TableData) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold();

        for (col, header) in table.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }
        for (row_idx, row) in table.rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                worksheet.write_string(row_idx as u32 + 1, col as u16, value)?;
            }
        }

        workbook.save(path)?;
        Ok(())
    }
}
