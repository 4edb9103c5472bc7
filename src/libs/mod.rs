//! Core library modules for the cams application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Schedule Rules**: The room/teacher conflict validator
//! - **User Interface**: Console table rendering and data export

pub mod config;
pub mod data_storage;
pub mod export;
pub mod messages;
pub mod schedule;
pub mod view;
