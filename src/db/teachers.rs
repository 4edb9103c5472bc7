use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

const INSERT_TEACHER: &str = "INSERT INTO teachers (name, email) VALUES (?1, ?2)";
const UPDATE_TEACHER: &str = "UPDATE teachers SET name = ?2, email = ?3 WHERE id = ?1";
const DELETE_TEACHER: &str = "DELETE FROM teachers WHERE id = ?1";
const SELECT_ALL_TEACHERS: &str = "SELECT * FROM teachers ORDER BY name";
const SELECT_TEACHER_BY_ID: &str = "SELECT * FROM teachers WHERE id = ?1";
const SELECT_TEACHER_BY_EMAIL: &str = "SELECT * FROM teachers WHERE email = ?1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
}

impl Teacher {
    pub fn new(name: String, email: String) -> Self {
        Self { id: None, name, email }
    }
}

pub struct Teachers {
    conn: Connection,
}

impl Teachers {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Create a new teacher
    pub fn create(&mut self, teacher: &Teacher) -> Result<i64> {
        self.conn.execute(INSERT_TEACHER, params![teacher.name, teacher.email])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing teacher
    pub fn update(&mut self, id: i64, teacher: &Teacher) -> Result<()> {
        let affected = self.conn.execute(UPDATE_TEACHER, params![id, teacher.name, teacher.email])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TeacherNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Delete a teacher
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_TEACHER, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TeacherNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Get all teachers ordered by name
    pub fn list(&mut self) -> Result<Vec<Teacher>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TEACHERS)?;
        let iter = stmt.query_map([], Self::map_row)?;

        let mut teachers = Vec::new();
        for teacher in iter {
            teachers.push(teacher?);
        }
        Ok(teachers)
    }

    /// Get a teacher by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Teacher>> {
        self.conn.query_row(SELECT_TEACHER_BY_ID, params![id], Self::map_row).optional().map_err(Into::into)
    }

    /// Get a teacher by email
    pub fn get_by_email(&mut self, email: &str) -> Result<Option<Teacher>> {
        self.conn
            .query_row(SELECT_TEACHER_BY_EMAIL, params![email], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Teacher> {
        Ok(Teacher {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
        })
    }
}
