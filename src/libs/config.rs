//! Configuration management for the cams application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory. The configuration is intentionally small: an optional override
//! for the database file location and a default semester used to pre-fill
//! enrollment prompts. `Config::init` runs the interactive setup wizard.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Optional absolute path to the SQLite database file.
    ///
    /// When unset, the database lives next to the configuration file in the
    /// application data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Semester offered as the default in enrollment prompts, e.g. "2026-FALL".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_semester: Option<String>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when absent.
    pub fn read() -> Result<Self> {
        let config_path = Self::file_path()?;
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let file = File::open(&config_path)?;
        let config = serde_json::from_reader(file).map_err(|_| crate::msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    /// Persists the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::file_path()?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard on top of the current settings.
    pub fn init() -> Result<Self> {
        let current = Self::read()?;

        let db_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(current.db_path.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let default_semester: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultSemester.to_string())
            .default(current.default_semester.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            db_path: if db_path.is_empty() { None } else { Some(PathBuf::from(db_path)) },
            default_semester: if default_semester.is_empty() { None } else { Some(default_semester) },
        })
    }

    /// Removes the configuration file if it exists.
    pub fn delete() -> Result<()> {
        let config_path = Self::file_path()?;
        if config_path.exists() {
            fs::remove_file(config_path)?;
        }
        Ok(())
    }

    fn file_path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }
}
