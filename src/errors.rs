//! Unified error types and result handling.
//!
//! Every fallible operation in the crate returns [`Result`]. Domain failures
//! (duplicates, missing references, bad input, unauthorized senders) carry
//! enough context to render a user-facing message; infrastructure failures
//! wrap their source error.

use thiserror::Error;

/// Unified error type for all crate operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or parsing failed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Attempted creation of an entity whose unique name already exists
    #[error("{entity} '{name}' already exists")]
    Duplicate {
        /// Kind of entity ("Member", "Month")
        entity: &'static str,
        /// The conflicting name
        name: String,
    },

    /// A referenced entity does not exist
    #[error("{entity} '{name}' not found")]
    NotFound {
        /// Kind of entity ("Member", "Month", "Contribution")
        entity: &'static str,
        /// The name or id that failed to resolve
        name: String,
    },

    /// Malformed or out-of-range input
    #[error("{message}")]
    Validation {
        /// Description of the rejected input
        message: String,
    },

    /// Sender identity is not on the admin allow-list
    #[error("Sender '{phone}' is not authorized")]
    Unauthorized {
        /// The rejected sender identity
        phone: String,
    },

    /// Outbound message delivery failed
    #[error("Message delivery failed: {message}")]
    Transport {
        /// Description from the transport layer
        message: String,
    },

    /// Database error from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// String formatting error
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_display() {
        let err = Error::Duplicate {
            entity: "Member",
            name: "Pauline Nthenya".to_string(),
        };
        assert_eq!(err.to_string(), "Member 'Pauline Nthenya' already exists");
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::NotFound {
            entity: "Month",
            name: "August".to_string(),
        };
        assert_eq!(err.to_string(), "Month 'August' not found");
    }

    #[test]
    fn test_validation_display_is_bare_message() {
        let err = Error::Validation {
            message: "Invalid amount. Please provide a number.".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid amount. Please provide a number.");
    }
}
