//! Member entity - a roster entry in the contribution pool.
//!
//! Each member has a unique name, a category used for report grouping and
//! default-amount selection, and the default contribution amount in KES.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Member database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "members")]
pub struct Model {
    /// Unique identifier for the member
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Member name, unique across the roster
    #[sea_orm(unique)]
    pub name: String,
    /// Grouping category (e.g., "Parents", "GenMillennial", "GenAlpha")
    pub category: String,
    /// Default contribution amount in KES
    pub default_amount: i64,
    /// When the member was created
    pub created_at: DateTimeUtc,
    /// When the member was last edited, None if never edited
    pub updated_at: Option<DateTimeUtc>,
}

/// Defines relationships between Member and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One member has many contributions
    #[sea_orm(has_many = "super::contribution::Entity")]
    Contributions,
}

impl Related<super::contribution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contributions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
