//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod contribution;
pub mod member;
pub mod month;

// Re-export specific types to avoid conflicts
pub use contribution::{
    Column as ContributionColumn, Entity as Contribution, Model as ContributionModel,
};
pub use member::{Column as MemberColumn, Entity as Member, Model as MemberModel};
pub use month::{Column as MonthColumn, Entity as Month, Model as MonthModel};
