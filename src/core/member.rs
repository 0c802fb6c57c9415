//! Member business logic - Handles all member-related operations.
//!
//! Provides functions for creating, retrieving, updating, and deleting
//! members. Member names are unique (case-sensitive exact match); deletion is
//! refused while the member has recorded contributions.

use crate::{
    entities::{Contribution, Member, contribution, member},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};

/// Creates a new member with the given name, category, and default amount.
///
/// Fails with [`Error::Duplicate`] if a member with the same name already
/// exists. The name is trimmed; empty names and negative amounts are
/// rejected.
pub async fn create_member(
    db: &DatabaseConnection,
    name: String,
    category: String,
    default_amount: i64,
) -> Result<member::Model> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "Member name cannot be empty".to_string(),
        });
    }
    if default_amount < 0 {
        return Err(Error::Validation {
            message: format!("Default amount must be non-negative, got {default_amount}"),
        });
    }

    let existing = Member::find()
        .filter(member::Column::Name.eq(&name))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::Duplicate {
            entity: "Member",
            name,
        });
    }

    let now = chrono::Utc::now();
    let new_member = member::ActiveModel {
        name: Set(name),
        category: Set(category),
        default_amount: Set(default_amount),
        created_at: Set(now),
        updated_at: Set(None),
        ..Default::default()
    };

    let result = new_member.insert(db).await?;
    Ok(result)
}

/// Retrieves all members, ordered by category then name.
pub async fn get_all_members(db: &DatabaseConnection) -> Result<Vec<member::Model>> {
    Member::find()
        .order_by_asc(member::Column::Category)
        .order_by_asc(member::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a member by exact name, returning None if absent.
pub async fn get_member_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<member::Model>> {
    Member::find()
        .filter(member::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a member by its unique id.
pub async fn get_member_by_id(
    db: &DatabaseConnection,
    member_id: i64,
) -> Result<Option<member::Model>> {
    Member::find_by_id(member_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Fields that can change on an existing member.
#[derive(Debug, Default, Clone)]
pub struct MemberChanges {
    /// New unique name
    pub name: Option<String>,
    /// New category
    pub category: Option<String>,
    /// New default contribution amount
    pub default_amount: Option<i64>,
}

/// Applies edits to an existing member.
///
/// Fails with [`Error::NotFound`] if the member does not exist and with
/// [`Error::Duplicate`] when renaming onto a name that is already taken.
pub async fn update_member(
    db: &DatabaseConnection,
    member_id: i64,
    changes: MemberChanges,
) -> Result<member::Model> {
    let existing = Member::find_by_id(member_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "Member",
            name: member_id.to_string(),
        })?;

    if let Some(amount) = changes.default_amount {
        if amount < 0 {
            return Err(Error::Validation {
                message: format!("Default amount must be non-negative, got {amount}"),
            });
        }
    }

    if let Some(ref new_name) = changes.name {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(Error::Validation {
                message: "Member name cannot be empty".to_string(),
            });
        }
        if new_name != existing.name {
            let taken = Member::find()
                .filter(member::Column::Name.eq(new_name))
                .one(db)
                .await?;
            if taken.is_some() {
                return Err(Error::Duplicate {
                    entity: "Member",
                    name: new_name.to_string(),
                });
            }
        }
    }

    let mut active: member::ActiveModel = existing.into();
    if let Some(name) = changes.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(category) = changes.category {
        active.category = Set(category);
    }
    if let Some(amount) = changes.default_amount {
        active.default_amount = Set(amount);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    let updated = active.update(db).await?;
    Ok(updated)
}

/// Deletes a member that has no recorded contributions.
///
/// A member with one or more contributions is never deleted; the caller gets
/// a validation error naming the count instead.
pub async fn delete_member(db: &DatabaseConnection, member_id: i64) -> Result<()> {
    let existing = Member::find_by_id(member_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "Member",
            name: member_id.to_string(),
        })?;

    let contribution_count = Contribution::find()
        .filter(contribution::Column::MemberId.eq(member_id))
        .count(db)
        .await?;
    if contribution_count > 0 {
        return Err(Error::Validation {
            message: format!(
                "Member '{}' has {contribution_count} recorded contribution(s) and cannot be deleted",
                existing.name
            ),
        });
    }

    existing.delete(db).await?;
    Ok(())
}
