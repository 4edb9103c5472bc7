use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveTime;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::fmt;

const INSERT_TIMESLOT: &str = "INSERT INTO timeslots (start_time, end_time) VALUES (?1, ?2)";
const UPDATE_TIMESLOT: &str = "UPDATE timeslots SET start_time = ?2, end_time = ?3 WHERE id = ?1";
const DELETE_TIMESLOT: &str = "DELETE FROM timeslots WHERE id = ?1";
const SELECT_ALL_TIMESLOTS: &str = "SELECT * FROM timeslots ORDER BY start_time";
const SELECT_TIMESLOT_BY_ID: &str = "SELECT * FROM timeslots WHERE id = ?1";
const COUNT_TIMESLOT_SPAN: &str = "SELECT COUNT(*) FROM timeslots WHERE start_time = ?1 AND end_time = ?2";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Option<i64>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeSlot {
    pub fn new(start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            id: None,
            start_time,
            end_time,
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start_time.format("%H:%M"), self.end_time.format("%H:%M"))
    }
}

pub struct TimeSlots {
    conn: Connection,
}

impl TimeSlots {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Create a new time slot
    pub fn create(&mut self, slot: &TimeSlot) -> Result<i64> {
        self.conn.execute(INSERT_TIMESLOT, params![slot.start_time, slot.end_time])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing time slot
    pub fn update(&mut self, id: i64, slot: &TimeSlot) -> Result<()> {
        let affected = self.conn.execute(UPDATE_TIMESLOT, params![id, slot.start_time, slot.end_time])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TimeSlotNotFound(id)));
        }
        Ok(())
    }

    /// Delete a time slot
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_TIMESLOT, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TimeSlotNotFound(id)));
        }
        Ok(())
    }

    /// Get all time slots ordered by start time
    pub fn list(&mut self) -> Result<Vec<TimeSlot>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TIMESLOTS)?;
        let iter = stmt.query_map([], Self::map_row)?;

        let mut slots = Vec::new();
        for slot in iter {
            slots.push(slot?);
        }
        Ok(slots)
    }

    /// Get a time slot by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<TimeSlot>> {
        self.conn.query_row(SELECT_TIMESLOT_BY_ID, params![id], Self::map_row).optional().map_err(Into::into)
    }

    /// Checks whether a slot with the exact same interval already exists.
    pub fn exists(&mut self, start_time: NaiveTime, end_time: NaiveTime) -> Result<bool> {
        let count: i64 = self.conn.query_row(COUNT_TIMESLOT_SPAN, params![start_time, end_time], |row| row.get(0))?;
        Ok(count > 0)
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<TimeSlot> {
        Ok(TimeSlot {
            id: row.get(0)?,
            start_time: row.get(1)?,
            end_time: row.get(2)?,
        })
    }
}
