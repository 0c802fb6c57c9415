//! Month business logic - create, list, and look up contribution periods.
//!
//! Month names are free-text period keys, unique across the table. Months
//! are never edited; deletion respects the same referential guard as
//! members.

use crate::{
    entities::{Contribution, Month, contribution, month},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};

/// Creates a new month with the given name.
///
/// Fails with [`Error::Duplicate`] if the name already exists.
pub async fn create_month(db: &DatabaseConnection, name: String) -> Result<month::Model> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "Month name cannot be empty".to_string(),
        });
    }

    let existing = Month::find()
        .filter(month::Column::Name.eq(&name))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::Duplicate {
            entity: "Month",
            name,
        });
    }

    let new_month = month::ActiveModel {
        name: Set(name),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = new_month.insert(db).await?;
    Ok(result)
}

/// Retrieves all months in creation order.
pub async fn get_all_months(db: &DatabaseConnection) -> Result<Vec<month::Model>> {
    Month::find()
        .order_by_asc(month::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a month by exact name, returning None if absent.
pub async fn get_month_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<month::Model>> {
    Month::find()
        .filter(month::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a month by its unique id.
pub async fn get_month_by_id(
    db: &DatabaseConnection,
    month_id: i64,
) -> Result<Option<month::Model>> {
    Month::find_by_id(month_id).one(db).await.map_err(Into::into)
}

/// Deletes a month that has no recorded contributions.
pub async fn delete_month(db: &DatabaseConnection, month_id: i64) -> Result<()> {
    let existing = Month::find_by_id(month_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "Month",
            name: month_id.to_string(),
        })?;

    let contribution_count = Contribution::find()
        .filter(contribution::Column::MonthId.eq(month_id))
        .count(db)
        .await?;
    if contribution_count > 0 {
        return Err(Error::Validation {
            message: format!(
                "Month '{}' has {contribution_count} recorded contribution(s) and cannot be deleted",
                existing.name
            ),
        });
    }

    existing.delete(db).await?;
    Ok(())
}
