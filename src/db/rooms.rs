use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

const INSERT_ROOM: &str = "INSERT INTO rooms (room_number, capacity) VALUES (?1, ?2)";
const UPDATE_ROOM: &str = "UPDATE rooms SET room_number = ?2, capacity = ?3 WHERE id = ?1";
const DELETE_ROOM: &str = "DELETE FROM rooms WHERE id = ?1";
const SELECT_ALL_ROOMS: &str = "SELECT * FROM rooms ORDER BY room_number";
const SELECT_ROOM_BY_ID: &str = "SELECT * FROM rooms WHERE id = ?1";
const SELECT_ROOM_BY_NUMBER: &str = "SELECT * FROM rooms WHERE room_number = ?1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Option<i64>,
    pub room_number: String,
    pub capacity: i64,
}

impl Room {
    pub fn new(room_number: String, capacity: i64) -> Self {
        Self {
            id: None,
            room_number,
            capacity,
        }
    }
}

pub struct Rooms {
    conn: Connection,
}

impl Rooms {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Create a new room
    pub fn create(&mut self, room: &Room) -> Result<i64> {
        self.conn.execute(INSERT_ROOM, params![room.room_number, room.capacity])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing room
    pub fn update(&mut self, id: i64, room: &Room) -> Result<()> {
        let affected = self.conn.execute(UPDATE_ROOM, params![id, room.room_number, room.capacity])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::RoomNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Delete a room
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_ROOM, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::RoomNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Get all rooms ordered by room number
    pub fn list(&mut self) -> Result<Vec<Room>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_ROOMS)?;
        let iter = stmt.query_map([], Self::map_row)?;

        let mut rooms = Vec::new();
        for room in iter {
            rooms.push(room?);
        }
        Ok(rooms)
    }

    /// Get a room by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Room>> {
        self.conn.query_row(SELECT_ROOM_BY_ID, params![id], Self::map_row).optional().map_err(Into::into)
    }

    /// Get a room by its number
    pub fn get_by_number(&mut self, room_number: &str) -> Result<Option<Room>> {
        self.conn
            .query_row(SELECT_ROOM_BY_NUMBER, params![room_number], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Room> {
        Ok(Room {
            id: row.get(0)?,
            room_number: row.get(1)?,
            capacity: row.get(2)?,
        })
    }
}
