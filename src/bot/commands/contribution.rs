//! Contribution commands - MarkPaid, Report, and ListContributions.

use super::parse_optional_amount;
use crate::{
    bot::BotData,
    core::{contribution, member, month, report},
    errors::{Error, Result},
};
use std::fmt::Write;

/// Records a payment for a member in a month.
pub async fn mark_paid(data: &BotData, args: &[&str]) -> Result<String> {
    if args.len() < 2 {
        return Ok("Usage: MarkPaid <Name> <Month> [Amount]".to_string());
    }

    let member_name = args[0];
    let month_name = args[1];
    let amount = match parse_optional_amount(args.get(2)) {
        Ok(amount) => amount,
        Err(reply) => return Ok(reply),
    };

    let recorded =
        contribution::mark_paid(&data.database, member_name, month_name, amount).await?;

    Ok(format!(
        "✅ Payment recorded!\nMember: {member_name}\nMonth: {month_name}\nAmount: {} KES",
        recorded.amount
    ))
}

/// Generates the monthly report.
pub async fn report(data: &BotData, args: &[&str]) -> Result<String> {
    let Some(month_name) = args.first() else {
        return Ok("Usage: Report <Month>".to_string());
    };

    report::generate_report(&data.database, month_name, &data.config.report_title).await
}

/// Lists contributions for a member, or for a month when no member matches
/// the name. Members win when a member and a month share a name.
pub async fn list_contributions(data: &BotData, args: &[&str]) -> Result<String> {
    let Some(subject) = args.first() else {
        return Ok("Usage: ListContributions <MemberName|MonthName>".to_string());
    };

    if let Some(found) = member::get_member_by_name(&data.database, subject).await? {
        let rows =
            contribution::get_contributions_with_months_for_member(&data.database, found.id)
                .await?;
        if rows.is_empty() {
            return Ok(format!("No contributions recorded for {}.", found.name));
        }

        let mut message = format!("📒 *Contributions for {}*\n\n", found.name);
        for (row, period) in rows {
            let period_name = period.map_or_else(|| row.month_id.to_string(), |m| m.name);
            writeln!(
                &mut message,
                "• {period_name}: {}/= {}",
                row.amount,
                paid_marker(row.paid)
            )?;
        }
        return Ok(message);
    }

    if let Some(found) = month::get_month_by_name(&data.database, subject).await? {
        let rows =
            contribution::get_contributions_with_members_for_month(&data.database, found.id)
                .await?;
        if rows.is_empty() {
            return Ok(format!("No contributions recorded for {}.", found.name));
        }

        let mut message = format!("📒 *Contributions for {}*\n\n", found.name);
        for (row, payer) in rows {
            let payer_name = payer.map_or_else(|| row.member_id.to_string(), |m| m.name);
            writeln!(
                &mut message,
                "• {payer_name}: {}/= {}",
                row.amount,
                paid_marker(row.paid)
            )?;
        }
        return Ok(message);
    }

    Err(Error::NotFound {
        entity: "Member or month",
        name: (*subject).to_string(),
    })
}

const fn paid_marker(paid: bool) -> &'static str {
    if paid { "✅" } else { "⏳" }
}
