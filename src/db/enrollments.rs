use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

const INSERT_ENROLLMENT: &str = "INSERT INTO enrollments (student_id, course_id, semester, grade) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_ENROLLMENT: &str = "UPDATE enrollments SET student_id = ?2, course_id = ?3, semester = ?4, grade = ?5 WHERE id = ?1";
const UPDATE_GRADE: &str = "UPDATE enrollments SET grade = ?2 WHERE id = ?1";
const DELETE_ENROLLMENT: &str = "DELETE FROM enrollments WHERE id = ?1";
const SELECT_ENROLLMENT_BY_ID: &str = "SELECT * FROM enrollments WHERE id = ?1";
const SELECT_ENROLLMENTS_BY_STUDENT: &str = "SELECT * FROM enrollments WHERE student_id = ?1 ORDER BY semester";
const COUNT_ENROLLMENT: &str = "SELECT COUNT(*) FROM enrollments WHERE student_id = ?1 AND course_id = ?2 AND semester = ?3";
const SELECT_ENROLLMENTS_DETAILED: &str = "
    SELECT e.id, s.name, c.name, e.semester, e.grade
    FROM enrollments e
    JOIN students s ON s.id = e.student_id
    JOIN courses c ON c.id = e.course_id
    ORDER BY e.id
";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Option<i64>,
    pub student_id: i64,
    pub course_id: i64,
    pub semester: String,
    pub grade: String,
}

impl Enrollment {
    pub fn new(student_id: i64, course_id: i64, semester: String, grade: String) -> Self {
        Self {
            id: None,
            student_id,
            course_id,
            semester,
            grade,
        }
    }
}

/// An enrollment joined with student and course names, for table views and export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentDetail {
    pub id: i64,
    pub student: String,
    pub course: String,
    pub semester: String,
    pub grade: String,
}

pub struct Enrollments {
    conn: Connection,
}

impl Enrollments {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Create a new enrollment
    pub fn create(&mut self, enrollment: &Enrollment) -> Result<i64> {
        self.conn.execute(
            INSERT_ENROLLMENT,
            params![enrollment.student_id, enrollment.course_id, enrollment.semester, enrollment.grade],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing enrollment
    pub fn update(&mut self, id: i64, enrollment: &Enrollment) -> Result<()> {
        let affected = self.conn.execute(
            UPDATE_ENROLLMENT,
            params![id, enrollment.student_id, enrollment.course_id, enrollment.semester, enrollment.grade],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::EnrollmentNotFound(id)));
        }
        Ok(())
    }

    /// Update only the grade of an enrollment
    pub fn update_grade(&mut self, id: i64, grade: &str) -> Result<()> {
        let affected = self.conn.execute(UPDATE_GRADE, params![id, grade])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::EnrollmentNotFound(id)));
        }
        Ok(())
    }

    /// Delete an enrollment
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_ENROLLMENT, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::EnrollmentNotFound(id)));
        }
        Ok(())
    }

    /// Get all enrollments joined with student and course names
    pub fn list_detailed(&mut self) -> Result<Vec<EnrollmentDetail>> {
        let mut stmt = self.conn.prepare(SELECT_ENROLLMENTS_DETAILED)?;
        let iter = stmt.query_map([], |row| {
            Ok(EnrollmentDetail {
                id: row.get(0)?,
                student: row.get(1)?,
                course: row.get(2)?,
                semester: row.get(3)?,
                grade: row.get(4)?,
            })
        })?;

        let mut enrollments = Vec::new();
        for enrollment in iter {
            enrollments.push(enrollment?);
        }
        Ok(enrollments)
    }

    /// Get an enrollment by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Enrollment>> {
        self.conn.query_row(SELECT_ENROLLMENT_BY_ID, params![id], Self::map_row).optional().map_err(Into::into)
    }

    /// Get all enrollments of one student
    pub fn list_by_student(&mut self, student_id: i64) -> Result<Vec<Enrollment>> {
        let mut stmt = self.conn.prepare(SELECT_ENROLLMENTS_BY_STUDENT)?;
        let iter = stmt.query_map(params![student_id], Self::map_row)?;

        let mut enrollments = Vec::new();
        for enrollment in iter {
            enrollments.push(enrollment?);
        }
        Ok(enrollments)
    }

    /// Checks whether a (student, course, semester) enrollment already exists.
    pub fn exists(&mut self, student_id: i64, course_id: i64, semester: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(COUNT_ENROLLMENT, params![student_id, course_id, semester], |row| row.get(0))?;
        Ok(count > 0)
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Enrollment> {
        Ok(Enrollment {
            id: row.get(0)?,
            student_id: row.get(1)?,
            course_id: row.get(2)?,
            semester: row.get(3)?,
            grade: row.get(4)?,
        })
    }
}
