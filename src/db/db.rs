use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "cams.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the application database and applies any pending migrations.
    ///
    /// The file location comes from the configuration's `db_path` override
    /// when set, otherwise from the platform data directory. Foreign key
    /// enforcement is switched on for every connection; the schema relies
    /// on it for cascading deletes.
    pub fn new() -> Result<Db> {
        let mut conn = Self::open()?;
        super::migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens a connection without running migrations. Used by the
    /// development-time migration inspection commands.
    pub fn new_without_migrations() -> Result<Connection> {
        Self::open()
    }

    fn open() -> Result<Connection> {
        let db_file_path = match Config::read()?.db_path {
            Some(path) => path,
            None => DataStorage::new().get_path(DB_FILE_NAME)?,
        };
        let conn = Connection::open(db_file_path)?;
        conn.pragma_update(None, "foreign_keys", true)?;

        Ok(conn)
    }
}
