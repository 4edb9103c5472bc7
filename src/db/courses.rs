use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

const INSERT_COURSE: &str = "INSERT INTO courses (name, credit, department_id) VALUES (?1, ?2, ?3)";
const UPDATE_COURSE: &str = "UPDATE courses SET name = ?2, credit = ?3, department_id = ?4 WHERE id = ?1";
const DELETE_COURSE: &str = "DELETE FROM courses WHERE id = ?1";
const SELECT_ALL_COURSES: &str = "SELECT * FROM courses ORDER BY name";
const SELECT_COURSE_BY_ID: &str = "SELECT * FROM courses WHERE id = ?1";
const SELECT_COURSES_DETAILED: &str = "
    SELECT c.id, c.name, c.credit, COALESCE(d.name, '-')
    FROM courses c
    LEFT JOIN departments d ON d.id = c.department_id
    ORDER BY c.name
";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Option<i64>,
    pub name: String,
    pub credit: String,
    pub department_id: Option<i64>,
}

impl Course {
    pub fn new(name: String, credit: String, department_id: Option<i64>) -> Self {
        Self {
            id: None,
            name,
            credit,
            department_id,
        }
    }
}

/// A course joined with its department name, for table views and export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDetail {
    pub id: i64,
    pub name: String,
    pub credit: String,
    pub department: String,
}

pub struct Courses {
    conn: Connection,
}

impl Courses {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Create a new course
    pub fn create(&mut self, course: &Course) -> Result<i64> {
        self.conn.execute(INSERT_COURSE, params![course.name, course.credit, course.department_id])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing course
    pub fn update(&mut self, id: i64, course: &Course) -> Result<()> {
        let affected = self.conn.execute(UPDATE_COURSE, params![id, course.name, course.credit, course.department_id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::CourseNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Delete a course
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_COURSE, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::CourseNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Get all courses ordered by name
    pub fn list(&mut self) -> Result<Vec<Course>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_COURSES)?;
        let iter = stmt.query_map([], Self::map_row)?;

        let mut courses = Vec::new();
        for course in iter {
            courses.push(course?);
        }
        Ok(courses)
    }

    /// Get all courses joined with their department name
    pub fn list_detailed(&mut self) -> Result<Vec<CourseDetail>> {
        let mut stmt = self.conn.prepare(SELECT_COURSES_DETAILED)?;
        let iter = stmt.query_map([], |row| {
            Ok(CourseDetail {
                id: row.get(0)?,
                name: row.get(1)?,
                credit: row.get(2)?,
                department: row.get(3)?,
            })
        })?;

        let mut courses = Vec::new();
        for course in iter {
            courses.push(course?);
        }
        Ok(courses)
    }

    /// Get a course by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Course>> {
        self.conn.query_row(SELECT_COURSE_BY_ID, params![id], Self::map_row).optional().map_err(Into::into)
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Course> {
        Ok(Course {
            id: row.get(0)?,
            name: row.get(1)?,
            credit: row.get(2)?,
            department_id: row.get(3)?,
        })
    }
}
