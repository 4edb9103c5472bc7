//! Class schedule persistence with conflict-checked writes.
//!
//! Inserts and updates run their exclusivity checks inside the same
//! transaction as the write, so two writers cannot both pass validation and
//! then both persist. The `UNIQUE (timeslot_id, room_id)` and
//! `UNIQUE (teacher_id, timeslot_id)` constraints remain the final guard; a
//! violation that reaches them is surfaced verbatim, never retried.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::schedule::{validate, Assignment, ClassSchedule, Conflict};
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

const INSERT_SCHEDULE: &str = "INSERT INTO class_schedules (course_id, teacher_id, timeslot_id, room_id) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_SCHEDULE: &str = "UPDATE class_schedules SET course_id = ?2, teacher_id = ?3, timeslot_id = ?4, room_id = ?5 WHERE id = ?1";
const DELETE_SCHEDULE: &str = "DELETE FROM class_schedules WHERE id = ?1";
const SELECT_ALL_SCHEDULES: &str = "SELECT * FROM class_schedules ORDER BY id";
const SELECT_SCHEDULE_BY_ID: &str = "SELECT * FROM class_schedules WHERE id = ?1";
const SELECT_SCHEDULES_BY_TIMESLOT: &str = "SELECT * FROM class_schedules WHERE timeslot_id = ?1";
const SELECT_SCHEDULES_DETAILED: &str = "
    SELECT cs.id, c.name, t.name, strftime('%H:%M', ts.start_time) || ' - ' || strftime('%H:%M', ts.end_time), r.room_number
    FROM class_schedules cs
    JOIN courses c ON c.id = cs.course_id
    JOIN teachers t ON t.id = cs.teacher_id
    JOIN timeslots ts ON ts.id = cs.timeslot_id
    JOIN rooms r ON r.id = cs.room_id
    ORDER BY cs.id
";

/// A class schedule joined with its display columns, for table views and export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDetail {
    pub id: i64,
    pub course: String,
    pub teacher: String,
    pub timeslot: String,
    pub room: String,
}

pub struct Schedules {
    conn: Connection,
}

impl Schedules {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a schedule after passing the conflict checks.
    ///
    /// Check and write share one transaction. On a conflict the transaction
    /// is dropped unwritten and the returned error downcasts to [`Conflict`].
    pub fn insert_checked(&mut self, schedule: &ClassSchedule) -> Result<i64> {
        let tx = self.conn.transaction()?;
        Self::ensure_free(&tx, &schedule.assignment(), None)?;
        tx.execute(
            INSERT_SCHEDULE,
            params![schedule.course_id, schedule.teacher_id, schedule.timeslot_id, schedule.room_id],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    /// Updates a schedule after passing the conflict checks.
    ///
    /// The record's own row is excluded from the checks, so writing back
    /// unchanged values never conflicts with itself.
    pub fn update_checked(&mut self, id: i64, schedule: &ClassSchedule) -> Result<()> {
        let tx = self.conn.transaction()?;
        Self::ensure_free(&tx, &schedule.assignment(), Some(id))?;
        let affected = tx.execute(
            UPDATE_SCHEDULE,
            params![id, schedule.course_id, schedule.teacher_id, schedule.timeslot_id, schedule.room_id],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::ScheduleNotFound(id)));
        }
        tx.commit()?;
        Ok(())
    }

    /// Advisory conflict check for a candidate assignment.
    ///
    /// Reports the first conflict only, room before teacher. Reads the live
    /// set outside any write, so the answer can go stale; the checked write
    /// paths re-run the same predicate transactionally.
    pub fn check(&mut self, candidate: &Assignment, exclude_id: Option<i64>) -> Result<Option<Conflict>> {
        match Self::ensure_free(&self.conn, candidate, exclude_id) {
            Ok(()) => Ok(None),
            Err(e) => match e.downcast::<Conflict>() {
                Ok(conflict) => Ok(Some(conflict)),
                Err(other) => Err(other),
            },
        }
    }

    /// Delete a class schedule
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_SCHEDULE, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::ScheduleNotFound(id)));
        }
        Ok(())
    }

    /// Get all class schedules
    pub fn list(&mut self) -> Result<Vec<ClassSchedule>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_SCHEDULES)?;
        let iter = stmt.query_map([], Self::map_row)?;

        let mut schedules = Vec::new();
        for schedule in iter {
            schedules.push(schedule?);
        }
        Ok(schedules)
    }

    /// Get all class schedules joined with their display columns
    pub fn list_detailed(&mut self) -> Result<Vec<ScheduleDetail>> {
        let mut stmt = self.conn.prepare(SELECT_SCHEDULES_DETAILED)?;
        let iter = stmt.query_map([], |row| {
            Ok(ScheduleDetail {
                id: row.get(0)?,
                course: row.get(1)?,
                teacher: row.get(2)?,
                timeslot: row.get(3)?,
                room: row.get(4)?,
            })
        })?;

        let mut schedules = Vec::new();
        for schedule in iter {
            schedules.push(schedule?);
        }
        Ok(schedules)
    }

    /// Get a class schedule by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<ClassSchedule>> {
        self.conn.query_row(SELECT_SCHEDULE_BY_ID, params![id], Self::map_row).optional().map_err(Into::into)
    }

    /// Runs the exclusivity checks against the given connection or
    /// transaction. Narrows the read to the candidate's time slot and hands
    /// the result to [`validate`], which owns the conflict rules. Errors
    /// downcast to [`Conflict`].
    fn ensure_free(conn: &Connection, candidate: &Assignment, exclude_id: Option<i64>) -> Result<()> {
        let mut stmt = conn.prepare(SELECT_SCHEDULES_BY_TIMESLOT)?;
        let existing = stmt
            .query_map(params![candidate.timeslot_id], Self::map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        validate(candidate, exclude_id, &existing)?;
        Ok(())
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<ClassSchedule> {
        Ok(ClassSchedule {
            id: row.get(0)?,
            course_id: row.get(1)?,
            teacher_id: row.get(2)?,
            timeslot_id: row.get(3)?,
            room_id: row.get(4)?,
        })
    }
}
