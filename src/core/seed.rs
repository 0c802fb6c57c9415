//! Database seeding from a roster configuration.
//!
//! Seeding is idempotent: months and members that already exist are counted
//! as skipped, everything else is created. Any failure other than a
//! duplicate aborts the run.

use crate::{
    config::roster::RosterConfig,
    core::{member, month},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use tracing::debug;

/// Outcome of a seeding run.
#[derive(Debug, Clone, Default)]
pub struct SeedSummary {
    /// Months created in this run
    pub months_added: usize,
    /// Months that already existed
    pub months_skipped: usize,
    /// Members created in this run
    pub members_added: usize,
    /// Members that already existed
    pub members_skipped: usize,
}

/// Seeds the configured months and members, skipping existing entries.
pub async fn seed_database(db: &DatabaseConnection, roster: &RosterConfig) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    for month_name in &roster.months {
        match month::create_month(db, month_name.clone()).await {
            Ok(created) => {
                debug!(month = %created.name, "seeded month");
                summary.months_added += 1;
            }
            Err(Error::Duplicate { .. }) => summary.months_skipped += 1,
            Err(other) => return Err(other),
        }
    }

    for seed in &roster.members {
        match member::create_member(
            db,
            seed.name.clone(),
            seed.category.clone(),
            seed.default_amount,
        )
        .await
        {
            Ok(created) => {
                debug!(member = %created.name, category = %created.category, "seeded member");
                summary.members_added += 1;
            }
            Err(Error::Duplicate { .. }) => summary.members_skipped += 1,
            Err(other) => return Err(other),
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::roster::default_roster;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_seed_default_roster() -> Result<()> {
        let db = setup_test_db().await?;

        let summary = seed_database(&db, &default_roster()).await?;
        assert_eq!(summary.months_added, 6);
        assert_eq!(summary.members_added, 15);
        assert_eq!(summary.months_skipped, 0);
        assert_eq!(summary.members_skipped, 0);

        let members = member::get_all_members(&db).await?;
        assert_eq!(members.len(), 15);
        let months = month::get_all_months(&db).await?;
        assert_eq!(months.len(), 6);

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;

        seed_database(&db, &default_roster()).await?;
        let second = seed_database(&db, &default_roster()).await?;

        assert_eq!(second.months_added, 0);
        assert_eq!(second.members_added, 0);
        assert_eq!(second.months_skipped, 6);
        assert_eq!(second.members_skipped, 15);

        assert_eq!(member::get_all_members(&db).await?.len(), 15);

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_partial_overlap() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_month(&db, "July").await?;
        create_custom_member(&db, "Pauline Nthenya", "Parents", 500).await?;

        let summary = seed_database(&db, &default_roster()).await?;
        assert_eq!(summary.months_added, 5);
        assert_eq!(summary.months_skipped, 1);
        assert_eq!(summary.members_added, 14);
        assert_eq!(summary.members_skipped, 1);

        Ok(())
    }
}
