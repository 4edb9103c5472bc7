use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

const INSERT_DEPARTMENT: &str = "INSERT INTO departments (name) VALUES (?1)";
const UPDATE_DEPARTMENT: &str = "UPDATE departments SET name = ?2 WHERE id = ?1";
const DELETE_DEPARTMENT: &str = "DELETE FROM departments WHERE id = ?1";
const SELECT_ALL_DEPARTMENTS: &str = "SELECT * FROM departments ORDER BY name";
const SELECT_DEPARTMENT_BY_ID: &str = "SELECT * FROM departments WHERE id = ?1";
const SELECT_DEPARTMENT_BY_NAME: &str = "SELECT * FROM departments WHERE name = ?1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: Option<i64>,
    pub name: String,
}

impl Department {
    pub fn new(name: String) -> Self {
        Self { id: None, name }
    }
}

pub struct Departments {
    conn: Connection,
}

impl Departments {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Create a new department
    pub fn create(&mut self, department: &Department) -> Result<i64> {
        self.conn.execute(INSERT_DEPARTMENT, params![department.name])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing department
    pub fn update(&mut self, id: i64, name: &str) -> Result<()> {
        let affected = self.conn.execute(UPDATE_DEPARTMENT, params![id, name])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::DepartmentNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Delete a department
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_DEPARTMENT, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::DepartmentNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Get all departments ordered by name
    pub fn list(&mut self) -> Result<Vec<Department>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_DEPARTMENTS)?;
        let iter = stmt.query_map([], |row| {
            Ok(Department {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut departments = Vec::new();
        for department in iter {
            departments.push(department?);
        }
        Ok(departments)
    }

    /// Get a department by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Department>> {
        self.conn
            .query_row(SELECT_DEPARTMENT_BY_ID, params![id], |row| {
                Ok(Department {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Get a department by name
    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Department>> {
        self.conn
            .query_row(SELECT_DEPARTMENT_BY_NAME, params![name], |row| {
                Ok(Department {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }
}
