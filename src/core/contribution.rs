//! Contribution business logic - payment recording and queries.
//!
//! The central operation is `mark_paid`: an upsert keyed by the
//! (member, month) pair, run inside a database transaction on top of the
//! unique pair index, so repeated calls converge to the latest amount and a
//! racing pair of writers cannot produce two rows.

use crate::{
    entities::{Contribution, Member, Month, contribution, member, month},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Records a payment for a member in a month.
///
/// Looks up both entities by name and upserts the contribution for the pair:
/// an existing row gets the new amount and a fresh paid timestamp, otherwise
/// a new paid row is inserted. The amount falls back to the member's current
/// `default_amount` only when no amount is supplied; an explicit `0` is
/// stored as `0`.
pub async fn mark_paid(
    db: &DatabaseConnection,
    member_name: &str,
    month_name: &str,
    amount: Option<i64>,
) -> Result<contribution::Model> {
    if let Some(value) = amount {
        if value < 0 {
            return Err(Error::Validation {
                message: format!("Amount must be non-negative, got {value}"),
            });
        }
    }

    let txn = db.begin().await?;

    let paying_member = Member::find()
        .filter(member::Column::Name.eq(member_name))
        .one(&txn)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "Member",
            name: member_name.to_string(),
        })?;

    let target_month = Month::find()
        .filter(month::Column::Name.eq(month_name))
        .one(&txn)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "Month",
            name: month_name.to_string(),
        })?;

    let amount = amount.unwrap_or(paying_member.default_amount);
    let result = upsert_in_txn(&txn, paying_member.id, target_month.id, amount, true).await?;

    txn.commit().await?;
    Ok(result)
}

/// Upserts a contribution keyed by entity ids, used by the dashboard API.
///
/// The amount falls back to the member's default when not supplied. `paid`
/// controls the paid flag and timestamp; an unpaid upsert clears `paid_at`.
pub async fn upsert_contribution(
    db: &DatabaseConnection,
    member_id: i64,
    month_id: i64,
    amount: Option<i64>,
    paid: bool,
) -> Result<contribution::Model> {
    if let Some(value) = amount {
        if value < 0 {
            return Err(Error::Validation {
                message: format!("Amount must be non-negative, got {value}"),
            });
        }
    }

    let txn = db.begin().await?;

    let paying_member = Member::find_by_id(member_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "Member",
            name: member_id.to_string(),
        })?;

    Month::find_by_id(month_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "Month",
            name: month_id.to_string(),
        })?;

    let amount = amount.unwrap_or(paying_member.default_amount);
    let result = upsert_in_txn(&txn, member_id, month_id, amount, paid).await?;

    txn.commit().await?;
    Ok(result)
}

/// Insert-or-update for the (member, month) pair inside an open transaction.
async fn upsert_in_txn<C>(
    db: &C,
    member_id: i64,
    month_id: i64,
    amount: i64,
    paid: bool,
) -> Result<contribution::Model>
where
    C: ConnectionTrait,
{
    let existing = Contribution::find()
        .filter(contribution::Column::MemberId.eq(member_id))
        .filter(contribution::Column::MonthId.eq(month_id))
        .one(db)
        .await?;

    let now = chrono::Utc::now();
    let result = match existing {
        Some(found) => {
            let mut active: contribution::ActiveModel = found.into();
            active.amount = Set(amount);
            active.paid = Set(paid);
            active.paid_at = Set(paid.then_some(now));
            active.updated_at = Set(Some(now));
            active.update(db).await?
        }
        None => {
            contribution::ActiveModel {
                member_id: Set(member_id),
                month_id: Set(month_id),
                amount: Set(amount),
                paid: Set(paid),
                paid_at: Set(paid.then_some(now)),
                created_at: Set(now),
                updated_at: Set(None),
                ..Default::default()
            }
            .insert(db)
            .await?
        }
    };
    Ok(result)
}

/// Retrieves all contributions in id order.
pub async fn get_all_contributions(db: &DatabaseConnection) -> Result<Vec<contribution::Model>> {
    Contribution::find()
        .order_by_asc(contribution::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all contributions for a member, in id order.
pub async fn get_contributions_for_member(
    db: &DatabaseConnection,
    member_id: i64,
) -> Result<Vec<contribution::Model>> {
    Contribution::find()
        .filter(contribution::Column::MemberId.eq(member_id))
        .order_by_asc(contribution::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all contributions for a month, in id order.
pub async fn get_contributions_for_month(
    db: &DatabaseConnection,
    month_id: i64,
) -> Result<Vec<contribution::Model>> {
    Contribution::find()
        .filter(contribution::Column::MonthId.eq(month_id))
        .order_by_asc(contribution::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a member's contributions together with their months, in id
/// order. Used for the member-facing listing.
pub async fn get_contributions_with_months_for_member(
    db: &DatabaseConnection,
    member_id: i64,
) -> Result<Vec<(contribution::Model, Option<month::Model>)>> {
    Contribution::find()
        .filter(contribution::Column::MemberId.eq(member_id))
        .order_by_asc(contribution::Column::Id)
        .find_also_related(Month)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a month's contributions together with their members, in id
/// order. Used for the month-facing listing.
pub async fn get_contributions_with_members_for_month(
    db: &DatabaseConnection,
    month_id: i64,
) -> Result<Vec<(contribution::Model, Option<member::Model>)>> {
    Contribution::find()
        .filter(contribution::Column::MonthId.eq(month_id))
        .order_by_asc(contribution::Column::Id)
        .find_also_related(Member)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the paid contributions for a month with their members, in id
/// order. This is the report's input.
pub async fn get_paid_contributions_for_month(
    db: &DatabaseConnection,
    month_id: i64,
) -> Result<Vec<(contribution::Model, Option<member::Model>)>> {
    Contribution::find()
        .filter(contribution::Column::MonthId.eq(month_id))
        .filter(contribution::Column::Paid.eq(true))
        .order_by_asc(contribution::Column::Id)
        .find_also_related(Member)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a contribution by its unique id.
pub async fn get_contribution_by_id(
    db: &DatabaseConnection,
    contribution_id: i64,
) -> Result<Option<contribution::Model>> {
    Contribution::find_by_id(contribution_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Administratively deletes a contribution.
pub async fn delete_contribution(db: &DatabaseConnection, contribution_id: i64) -> Result<()> {
    let existing = Contribution::find_by_id(contribution_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "Contribution",
            name: contribution_id.to_string(),
        })?;

    existing.delete(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase, PaginatorTrait};

    #[tokio::test]
    async fn test_mark_paid_negative_amount_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = mark_paid(&db, "Pauline Nthenya", "August", Some(-5)).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_mark_paid_member_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_month(&db, "August").await?;

        let result = mark_paid(&db, "Nobody", "August", None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "Member",
                name: _
            }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_mark_paid_month_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_member(&db, "Pauline Nthenya").await?;

        let result = mark_paid(&db, "Pauline Nthenya", "Nowhere", None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "Month",
                name: _
            }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_mark_paid_uses_member_default_amount() -> Result<()> {
        let (db, member, month) = setup_with_member_and_month().await?;

        let contribution = mark_paid(&db, &member.name, &month.name, None).await?;

        assert_eq!(contribution.amount, member.default_amount);
        assert!(contribution.paid);
        assert!(contribution.paid_at.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_mark_paid_uses_default_at_call_time() -> Result<()> {
        let (db, member, month) = setup_with_member_and_month().await?;

        // Change the default before paying; the new default applies
        crate::core::member::update_member(
            &db,
            member.id,
            crate::core::member::MemberChanges {
                default_amount: Some(750),
                ..Default::default()
            },
        )
        .await?;

        let contribution = mark_paid(&db, &member.name, &month.name, None).await?;
        assert_eq!(contribution.amount, 750);

        Ok(())
    }

    #[tokio::test]
    async fn test_mark_paid_twice_converges_to_second_amount() -> Result<()> {
        let (db, member, month) = setup_with_member_and_month().await?;

        mark_paid(&db, &member.name, &month.name, Some(700)).await?;
        let second = mark_paid(&db, &member.name, &month.name, Some(900)).await?;

        assert_eq!(second.amount, 900);

        // Exactly one row for the pair
        let rows = get_contributions_for_month(&db, month.id).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 900);
        assert_eq!(Contribution::find().count(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_mark_paid_explicit_zero_is_stored() -> Result<()> {
        let (db, member, month) = setup_with_member_and_month().await?;

        let contribution = mark_paid(&db, &member.name, &month.name, Some(0)).await?;
        assert_eq!(contribution.amount, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_contribution_unpaid_clears_paid_at() -> Result<()> {
        let (db, member, month) = setup_with_member_and_month().await?;

        let paid = mark_paid(&db, &member.name, &month.name, Some(500)).await?;
        assert!(paid.paid_at.is_some());

        let pending = upsert_contribution(&db, member.id, month.id, Some(500), false).await?;
        assert_eq!(pending.id, paid.id);
        assert!(!pending.paid);
        assert!(pending.paid_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_contribution_unknown_ids() -> Result<()> {
        let (db, member, _month) = setup_with_member_and_month().await?;

        let result = upsert_contribution(&db, member.id, 999, Some(100), true).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "Month",
                name: _
            }
        ));

        let result = upsert_contribution(&db, 999, 1, Some(100), true).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "Member",
                name: _
            }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_contribution_queries_are_scoped_and_ordered() -> Result<()> {
        let db = setup_test_db().await?;
        let pauline = create_test_member(&db, "Pauline Nthenya").await?;
        let agnes = create_test_member(&db, "Agnes Mwende").await?;
        let august = create_test_month(&db, "August").await?;
        let september = create_test_month(&db, "September").await?;

        mark_paid(&db, "Pauline Nthenya", "August", Some(500)).await?;
        mark_paid(&db, "Agnes Mwende", "August", Some(500)).await?;
        mark_paid(&db, "Pauline Nthenya", "September", Some(500)).await?;

        let pauline_rows = get_contributions_for_member(&db, pauline.id).await?;
        assert_eq!(pauline_rows.len(), 2);
        assert!(pauline_rows[0].id < pauline_rows[1].id);

        let agnes_rows = get_contributions_for_member(&db, agnes.id).await?;
        assert_eq!(agnes_rows.len(), 1);

        let august_rows = get_contributions_for_month(&db, august.id).await?;
        assert_eq!(august_rows.len(), 2);

        let september_rows = get_contributions_for_month(&db, september.id).await?;
        assert_eq!(september_rows.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_paid_contributions_excludes_pending() -> Result<()> {
        let db = setup_test_db().await?;
        let pauline = create_test_member(&db, "Pauline Nthenya").await?;
        let agnes = create_test_member(&db, "Agnes Mwende").await?;
        let august = create_test_month(&db, "August").await?;

        mark_paid(&db, "Pauline Nthenya", "August", Some(500)).await?;
        upsert_contribution(&db, agnes.id, august.id, Some(500), false).await?;

        let rows = get_paid_contributions_for_month(&db, august.id).await?;
        assert_eq!(rows.len(), 1);
        let (contribution, member) = &rows[0];
        assert_eq!(contribution.member_id, pauline.id);
        assert_eq!(member.as_ref().unwrap().name, "Pauline Nthenya");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_contribution() -> Result<()> {
        let (db, member, month) = setup_with_member_and_month().await?;
        let contribution = mark_paid(&db, &member.name, &month.name, None).await?;

        delete_contribution(&db, contribution.id).await?;
        assert!(get_contribution_by_id(&db, contribution.id).await?.is_none());

        let result = delete_contribution(&db, contribution.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "Contribution",
                name: _
            }
        ));

        Ok(())
    }
}
