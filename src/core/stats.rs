//! Aggregate statistics for the dashboard and the stats command.

use crate::{
    entities::{Contribution, Member, Month, contribution, member, month},
    errors::Result,
};
use sea_orm::{PaginatorTrait, QueryOrder, prelude::*};
use serde::Serialize;

/// Overall totals shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// Number of members on the roster
    pub members: u64,
    /// Number of months
    pub months: u64,
    /// Number of contribution rows (paid and pending)
    pub contributions: u64,
    /// Sum of all paid contribution amounts in KES
    pub total_collected: i64,
}

/// Member count for one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    /// Category name
    pub category: String,
    /// Number of members in the category
    pub members: usize,
}

/// Paid totals for one month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthTotal {
    /// Month name
    pub month: String,
    /// Number of paid contributions
    pub payments: usize,
    /// Sum of paid amounts in KES
    pub total: i64,
}

/// Per-category and per-month breakdowns.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsSummary {
    /// Member counts per category
    pub by_category: Vec<CategoryCount>,
    /// Paid sums per month, in month creation order
    pub by_month: Vec<MonthTotal>,
}

/// Computes the overall dashboard totals.
pub async fn dashboard_summary(db: &DatabaseConnection) -> Result<DashboardSummary> {
    let members = Member::find().count(db).await?;
    let months = Month::find().count(db).await?;
    let contributions = Contribution::find().count(db).await?;

    let paid_rows = Contribution::find()
        .filter(contribution::Column::Paid.eq(true))
        .all(db)
        .await?;
    let total_collected: i64 = paid_rows.iter().map(|row| row.amount).sum();

    Ok(DashboardSummary {
        members,
        months,
        contributions,
        total_collected,
    })
}

/// Computes per-category member counts and per-month paid sums.
pub async fn statistics_summary(db: &DatabaseConnection) -> Result<StatisticsSummary> {
    let members = Member::find()
        .order_by_asc(member::Column::Category)
        .order_by_asc(member::Column::Name)
        .all(db)
        .await?;

    let mut by_category: Vec<CategoryCount> = Vec::new();
    for roster_member in members {
        if let Some(position) = by_category
            .iter()
            .position(|entry| entry.category == roster_member.category)
        {
            by_category[position].members += 1;
        } else {
            by_category.push(CategoryCount {
                category: roster_member.category,
                members: 1,
            });
        }
    }

    let months = Month::find()
        .order_by_asc(month::Column::Id)
        .all(db)
        .await?;

    let mut by_month = Vec::with_capacity(months.len());
    for period in months {
        let paid_rows = Contribution::find()
            .filter(contribution::Column::MonthId.eq(period.id))
            .filter(contribution::Column::Paid.eq(true))
            .all(db)
            .await?;
        let total: i64 = paid_rows.iter().map(|row| row.amount).sum();
        by_month.push(MonthTotal {
            month: period.name,
            payments: paid_rows.len(),
            total,
        });
    }

    Ok(StatisticsSummary {
        by_category,
        by_month,
    })
}
