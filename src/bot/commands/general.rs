//! General commands - Help, Examples, InitDB, Dashboard, and Stats.

use crate::{
    bot::BotData,
    config::roster,
    core::{report::format_thousands, seed, stats},
    errors::Result,
};
use std::fmt::Write;

/// Returns the command summary.
#[must_use]
pub fn help_text() -> String {
    "🤖 *Chama Buddy Commands*\n\n\
    *Admin Commands:*\n\
    • `AddMember <Name> <Category> [Amount]` - Add new member\n\
    Categories: Parents (500 KES), GenMillennial/GenZ (300 KES), GenAlpha (50 KES)\n\
    • `MarkPaid <Name> <Month> [Amount]` - Mark contribution as paid\n\
    • `Report <Month>` - Generate monthly report\n\
    • `AddMonth <MonthName>` - Add new month\n\
    • `ListMembers` - Show all members by category\n\
    • `ListMonths` - Show all months\n\
    • `ListContributions <Name>` - Show contributions for a member or month\n\
    • `Dashboard` - Show overall totals\n\
    • `Stats` - Show per-category and per-month statistics\n\
    • `InitDB` - Seed the database with the configured roster\n\
    • `Examples` - Show example commands\n\
    • `Help` - Show this help message"
        .to_string()
}

/// Returns example command invocations.
#[must_use]
pub fn examples_text() -> String {
    "*Examples:*\n\
    • `AddMember Pauline Parents`\n\
    • `MarkPaid Pauline August 500`\n\
    • `Report August`\n\
    • `AddMonth September`\n\
    • `ListContributions Pauline`\n\
    • `InitDB`"
        .to_string()
}

/// Seeds the database with the configured roster (roster.toml when present,
/// the built-in roster otherwise) and summarizes what happened.
pub async fn init_db(data: &BotData) -> Result<String> {
    let roster = roster::load_roster_or_default();
    let summary = seed::seed_database(&data.database, &roster).await?;

    Ok(format!(
        "✅ Database initialized successfully!\n\n\
        📊 Members added: {} (already present: {})\n\
        🗓️ Months added: {} (already present: {})",
        summary.members_added,
        summary.members_skipped,
        summary.months_added,
        summary.months_skipped
    ))
}

/// Shows the overall totals.
pub async fn dashboard(data: &BotData) -> Result<String> {
    let summary = stats::dashboard_summary(&data.database).await?;

    Ok(format!(
        "📊 *DASHBOARD*\n\n\
        Members: {}\n\
        Months: {}\n\
        Contributions: {}\n\
        Total collected: KES {}",
        summary.members,
        summary.months,
        summary.contributions,
        format_thousands(summary.total_collected)
    ))
}

/// Shows per-category member counts and per-month collection totals.
pub async fn statistics(data: &BotData) -> Result<String> {
    let summary = stats::statistics_summary(&data.database).await?;
    if summary.by_category.is_empty() && summary.by_month.is_empty() {
        return Ok("No statistics available yet. Add members and months first.".to_string());
    }

    let mut message = String::from("📈 *STATISTICS*\n\n*Members by category:*\n");
    for entry in &summary.by_category {
        writeln!(&mut message, "• {}: {}", entry.category, entry.members)?;
    }

    message.push_str("\n*Collected by month:*\n");
    for entry in &summary.by_month {
        writeln!(
            &mut message,
            "• {}: KES {} ({} payment(s))",
            entry.month,
            format_thousands(entry.total),
            entry.payments
        )?;
    }

    Ok(message)
}
