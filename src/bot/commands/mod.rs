//! Command handlers, split by domain.
//!
//! Each handler validates its arguments, delegates to `core`, and formats
//! the reply. Wrong argument counts and unparseable amounts short-circuit
//! with a usage reply before any domain call.

/// MarkPaid, Report, and ListContributions
pub mod contribution;
/// Help, Examples, InitDB, Dashboard, Stats
pub mod general;
/// AddMember and ListMembers
pub mod member;
/// AddMonth and ListMonths
pub mod month;

/// Parses an optional trailing amount token.
///
/// `Ok(None)` when the token is absent, `Err` with the fixed invalid-amount
/// reply when it is present but not a non-negative integer.
pub(crate) fn parse_optional_amount(token: Option<&&str>) -> Result<Option<i64>, String> {
    match token {
        Some(raw) => match raw.parse::<i64>() {
            Ok(value) if value >= 0 => Ok(Some(value)),
            _ => Err("Invalid amount. Please provide a number.".to_string()),
        },
        None => Ok(None),
    }
}
