//! Chat command layer - command parsing, dispatch, and reply rendering.
//!
//! This module is transport-agnostic: it turns one inbound text line into
//! one reply string. The webhook adapter in `api` feeds it messages and
//! delivers whatever comes back.

/// Command implementations (member, month, contribution, general)
pub mod commands;
/// Allow-list gate, tokenizer, and command table
pub mod dispatch;

use crate::config::settings::AppConfig;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared data available to all command handlers.
pub struct BotData {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
    /// Application configuration (allow-list, report title)
    pub config: Arc<AppConfig>,
}

impl BotData {
    /// Creates a new `BotData` instance with the given database connection
    /// and configuration.
    #[must_use]
    pub const fn new(database: DatabaseConnection, config: Arc<AppConfig>) -> Self {
        Self { database, config }
    }
}
