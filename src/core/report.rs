//! Report generation business logic.
//!
//! Renders the monthly contribution report: paid contributions grouped by
//! member category (in order of first appearance, not alphabetized), members
//! numbered within each category in contribution order, and a grand total in
//! KES with thousands separators.

use crate::{
    core::{contribution, month},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use std::fmt::Write;

/// Generates the report text for a month.
///
/// Fails with [`Error::NotFound`] if the month does not exist. A month with
/// no paid contributions gets a short "no contributions" message instead of
/// an empty report skeleton.
pub async fn generate_report(
    db: &DatabaseConnection,
    month_name: &str,
    title: &str,
) -> Result<String> {
    let target_month = month::get_month_by_name(db, month_name)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "Month",
            name: month_name.to_string(),
        })?;

    let rows = contribution::get_paid_contributions_for_month(db, target_month.id).await?;
    if rows.is_empty() {
        return Ok(format!(
            "📊 *{month_name} Report*\n\nNo contributions recorded for {month_name}."
        ));
    }

    // Group by category, first-appearance order
    let mut sections: Vec<(String, Vec<(String, i64)>)> = Vec::new();
    let mut total: i64 = 0;
    for (paid_contribution, paying_member) in rows {
        let paying_member = paying_member.ok_or_else(|| Error::NotFound {
            entity: "Member",
            name: paid_contribution.member_id.to_string(),
        })?;

        total += paid_contribution.amount;
        let entry = (paying_member.name, paid_contribution.amount);
        if let Some(position) = sections
            .iter()
            .position(|(category, _)| *category == paying_member.category)
        {
            sections[position].1.push(entry);
        } else {
            sections.push((paying_member.category, vec![entry]));
        }
    }

    let mut report = format!("🎂💃🏽 *{title}*\n\n*{month_name} Contributions:*\n\n");
    for (category, entries) in sections {
        writeln!(&mut report, "*{category}*")?;
        for (index, (name, amount)) in entries.iter().enumerate() {
            writeln!(&mut report, "{}. {} - {}/= ✅", index + 1, name, amount)?;
        }
        report.push('\n');
    }
    write!(&mut report, "*TOTAL: KES {}*", format_thousands(total))?;

    Ok(report)
}

/// Formats an amount with comma thousands separators ("1234567" → "1,234,567").
#[must_use]
pub fn format_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
