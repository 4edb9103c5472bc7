use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

const INSERT_STUDENT: &str = "INSERT INTO students (name, dob, email) VALUES (?1, ?2, ?3)";
const UPDATE_STUDENT: &str = "UPDATE students SET name = ?2, dob = ?3, email = ?4 WHERE id = ?1";
const DELETE_STUDENT: &str = "DELETE FROM students WHERE id = ?1";
const SELECT_ALL_STUDENTS: &str = "SELECT * FROM students ORDER BY name";
const SELECT_STUDENT_BY_ID: &str = "SELECT * FROM students WHERE id = ?1";
const SELECT_STUDENT_BY_EMAIL: &str = "SELECT * FROM students WHERE email = ?1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Option<i64>,
    pub name: String,
    pub dob: NaiveDate,
    pub email: String,
}

impl Student {
    pub fn new(name: String, dob: NaiveDate, email: String) -> Self {
        Self {
            id: None,
            name,
            dob,
            email,
        }
    }
}

pub struct Students {
    conn: Connection,
}

impl Students {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Create a new student
    pub fn create(&mut self, student: &Student) -> Result<i64> {
        self.conn.execute(INSERT_STUDENT, params![student.name, student.dob, student.email])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing student
    pub fn update(&mut self, id: i64, student: &Student) -> Result<()> {
        let affected = self.conn.execute(UPDATE_STUDENT, params![id, student.name, student.dob, student.email])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::StudentNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Delete a student
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_STUDENT, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::StudentNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Get all students ordered by name
    pub fn list(&mut self) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_STUDENTS)?;
        let iter = stmt.query_map([], Self::map_row)?;

        let mut students = Vec::new();
        for student in iter {
            students.push(student?);
        }
        Ok(students)
    }

    /// Get a student by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Student>> {
        self.conn.query_row(SELECT_STUDENT_BY_ID, params![id], Self::map_row).optional().map_err(Into::into)
    }

    /// Get a student by email
    pub fn get_by_email(&mut self, email: &str) -> Result<Option<Student>> {
        self.conn
            .query_row(SELECT_STUDENT_BY_EMAIL, params![email], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Student> {
        Ok(Student {
            id: row.get(0)?,
            name: row.get(1)?,
            dob: row.get(2)?,
            email: row.get(3)?,
        })
    }
}
