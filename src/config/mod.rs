/// Database connection and schema creation
pub mod database;

/// Seed roster loading from roster.toml
pub mod roster;

/// Application settings loaded from the environment
pub mod settings;
