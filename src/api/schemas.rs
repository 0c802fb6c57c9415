//! Request payload schemas for the dashboard API.
//!
//! Responses serialize the entity models directly; only the inbound shapes
//! live here. Amounts are plain integers, timestamps ISO-8601 strings.

use serde::Deserialize;

/// Payload for creating a member.
#[derive(Debug, Deserialize)]
pub struct MemberCreate {
    /// Unique member name
    pub name: String,
    /// Grouping category
    pub category: String,
    /// Default contribution amount in KES
    pub default_amount: i64,
}

/// Payload for editing a member; absent fields stay unchanged.
#[derive(Debug, Deserialize, Default)]
pub struct MemberUpdate {
    /// New unique name
    pub name: Option<String>,
    /// New category
    pub category: Option<String>,
    /// New default contribution amount
    pub default_amount: Option<i64>,
}

/// Payload for creating a month.
#[derive(Debug, Deserialize)]
pub struct MonthCreate {
    /// Unique period name
    pub name: String,
}

/// Payload for upserting a contribution, keyed by the (member, month) pair.
#[derive(Debug, Deserialize)]
pub struct ContributionUpsert {
    /// Owning member id
    pub member_id: i64,
    /// Owning month id
    pub month_id: i64,
    /// Amount in KES; the member's default applies when absent
    pub amount: Option<i64>,
    /// Paid flag; defaults to false like a freshly created pending row
    #[serde(default)]
    pub paid: bool,
}

/// Query filters for listing contributions.
#[derive(Debug, Deserialize, Default)]
pub struct ContributionFilter {
    /// Restrict to one member
    pub member_id: Option<i64>,
    /// Restrict to one month
    pub month_id: Option<i64>,
}
