//! Seed roster loading from roster.toml
//!
//! The roster defines the months and members inserted by the `initdb`
//! command. A `roster.toml` in the working directory overrides the built-in
//! default roster.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire roster.toml file
#[derive(Debug, Deserialize)]
pub struct RosterConfig {
    /// Month names to create, in order
    pub months: Vec<String>,
    /// Members to create
    pub members: Vec<MemberSeed>,
}

/// Seed data for a single member
#[derive(Debug, Deserialize, Clone)]
pub struct MemberSeed {
    /// Member name
    pub name: String,
    /// Grouping category
    pub category: String,
    /// Default contribution amount in KES
    pub default_amount: i64,
}

/// Resolves the default contribution amount for a known category.
///
/// Used by the `addmember` command when no explicit amount is given;
/// category matching is case-insensitive.
#[must_use]
pub fn default_amount_for(category: &str) -> Option<i64> {
    match category.to_lowercase().as_str() {
        "parents" => Some(500),
        "genmillennial" | "genz" => Some(300),
        "genalpha" => Some(50),
        _ => None,
    }
}

/// Loads a roster from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<RosterConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read roster file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse roster.toml: {e}"),
    })
}

/// Returns the built-in default roster: the second half of the year and the
/// fifteen-member family roster with category defaults.
#[must_use]
pub fn default_roster() -> RosterConfig {
    let months = [
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    let mut members = Vec::new();
    for name in [
        "Pauline Nthenya",
        "Jeniffer Wayua",
        "Agnes Mwende",
        "Cynthia Nzilani",
    ] {
        members.push(MemberSeed {
            name: name.to_string(),
            category: "Parents".to_string(),
            default_amount: 500,
        });
    }
    for name in [
        "Sharon Mwende",
        "Ian Kyalo",
        "Yvonne Wanza",
        "Churchill Omariba",
    ] {
        members.push(MemberSeed {
            name: name.to_string(),
            category: "GenMillennial".to_string(),
            default_amount: 300,
        });
    }
    for name in [
        "Oscar Mandela",
        "Martin Mutua",
        "Shannel Nthenya",
        "Victor Mutua",
        "Wayne Wambua",
        "Varsha Mutheu",
        "Angel Wanza",
    ] {
        members.push(MemberSeed {
            name: name.to_string(),
            category: "GenAlpha".to_string(),
            default_amount: 50,
        });
    }

    RosterConfig { months, members }
}

/// Loads `roster.toml` from the working directory if present, otherwise the
/// built-in default roster.
#[must_use]
pub fn load_roster_or_default() -> RosterConfig {
    let path = Path::new("roster.toml");
    if path.exists() {
        match load_roster(path) {
            Ok(roster) => return roster,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to built-in roster");
            }
        }
    }
    default_roster()
}
