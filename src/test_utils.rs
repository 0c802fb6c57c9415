//! Shared test utilities for `ChamaBuddy`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    bot::BotData,
    config::settings::{AppConfig, WhatsAppConfig},
    core::{member, month},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Phone number on the allow-list of [`test_app_config`].
pub const TEST_ADMIN_PHONE: &str = "254700000000";

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test member with sensible defaults.
///
/// # Defaults
/// * `category`: "Parents"
/// * `default_amount`: 500
pub async fn create_test_member(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::member::Model> {
    member::create_member(db, name.to_string(), "Parents".to_string(), 500).await
}

/// Creates a test member with custom category and default amount.
pub async fn create_custom_member(
    db: &DatabaseConnection,
    name: &str,
    category: &str,
    default_amount: i64,
) -> Result<entities::member::Model> {
    member::create_member(db, name.to_string(), category.to_string(), default_amount).await
}

/// Creates a test month.
pub async fn create_test_month(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::month::Model> {
    month::create_month(db, name.to_string()).await
}

/// Sets up a complete test environment with one member and one month.
/// Returns (db, member, month) for common payment scenarios.
pub async fn setup_with_member_and_month() -> Result<(
    DatabaseConnection,
    entities::member::Model,
    entities::month::Model,
)> {
    let db = setup_test_db().await?;
    let test_member = create_test_member(&db, "Pauline Nthenya").await?;
    let test_month = create_test_month(&db, "August").await?;
    Ok((db, test_member, test_month))
}

/// Builds an [`AppConfig`] suitable for tests: one admin number, no WhatsApp
/// credentials (simulated transport).
#[must_use]
pub fn test_app_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        admin_phones: vec![TEST_ADMIN_PHONE.to_string()],
        report_title: "SHOSHO'S BIRTHDAY CONTRIBUTION".to_string(),
        whatsapp: WhatsAppConfig {
            api_url: "https://example.invalid".to_string(),
            phone_number_id: String::new(),
            access_token: None,
            verify_token: Some("test-verify-token".to_string()),
        },
    }
}

/// Wraps a database connection in a [`BotData`] with the test configuration.
#[must_use]
pub fn test_bot_data(db: DatabaseConnection) -> BotData {
    BotData::new(db, Arc::new(test_app_config()))
}
