//! Member commands - AddMember and ListMembers.

use super::parse_optional_amount;
use crate::{
    bot::BotData,
    config::roster,
    core::member,
    errors::Result,
};
use std::fmt::Write;

const ADD_MEMBER_USAGE: &str =
    "Usage: AddMember <Name> <Category> [Amount]\nCategories: Parents, GenMillennial, GenAlpha";

/// Adds a member to the roster.
///
/// When no amount is given the category must be one of the known categories
/// so a default can be resolved; an unknown category with no explicit amount
/// is rejected before any domain call.
pub async fn add_member(data: &BotData, args: &[&str]) -> Result<String> {
    if args.len() < 2 {
        return Ok(ADD_MEMBER_USAGE.to_string());
    }

    let name = args[0];
    let category = args[1];
    let explicit_amount = match parse_optional_amount(args.get(2)) {
        Ok(amount) => amount,
        Err(reply) => return Ok(reply),
    };

    let Some(amount) = explicit_amount.or_else(|| roster::default_amount_for(category)) else {
        return Ok("Invalid category. Use: Parents, GenMillennial, or GenAlpha".to_string());
    };

    let created = member::create_member(
        &data.database,
        name.to_string(),
        category.to_string(),
        amount,
    )
    .await?;

    Ok(format!(
        "✅ Member added successfully!\nName: {}\nCategory: {}\nDefault Amount: {} KES",
        created.name, created.category, created.default_amount
    ))
}

/// Lists all members grouped by category.
pub async fn list_members(data: &BotData) -> Result<String> {
    let members = member::get_all_members(&data.database).await?;
    if members.is_empty() {
        return Ok("No members found in the database.".to_string());
    }

    let mut sections: Vec<(String, Vec<(String, i64)>)> = Vec::new();
    for roster_member in members {
        let entry = (roster_member.name, roster_member.default_amount);
        if let Some(position) = sections
            .iter()
            .position(|(category, _)| *category == roster_member.category)
        {
            sections[position].1.push(entry);
        } else {
            sections.push((roster_member.category, vec![entry]));
        }
    }

    let mut message = String::from("📋 *ALL MEMBERS*\n\n");
    for (category, entries) in sections {
        writeln!(&mut message, "*{category}*")?;
        for (index, (name, amount)) in entries.iter().enumerate() {
            writeln!(&mut message, "{}. {} - {} KES", index + 1, name, amount)?;
        }
        message.push('\n');
    }

    Ok(message)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_add_member_with_explicit_amount() -> Result<()> {
        let db = setup_test_db().await?;
        let data = test_bot_data(db);

        let reply = add_member(&data, &["Pauline", "Parents", "750"]).await?;
        assert!(reply.contains("Default Amount: 750 KES"));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_member_category_default() -> Result<()> {
        let db = setup_test_db().await?;
        let data = test_bot_data(db);

        let reply = add_member(&data, &["Oscar", "GenAlpha"]).await?;
        assert!(reply.contains("Default Amount: 50 KES"));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_member_unknown_category_without_amount() -> Result<()> {
        let db = setup_test_db().await?;
        let data = test_bot_data(db);

        let reply = add_member(&data, &["Bob", "Visitors"]).await?;
        assert_eq!(
            reply,
            "Invalid category. Use: Parents, GenMillennial, or GenAlpha"
        );

        // Unknown category with an explicit amount is accepted
        let reply = add_member(&data, &["Bob", "Visitors", "100"]).await?;
        assert!(reply.contains("Member added successfully"));
        assert!(reply.contains("Category: Visitors"));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_member_invalid_amount() -> Result<()> {
        let db = setup_test_db().await?;
        let data = test_bot_data(db);

        let reply = add_member(&data, &["Bob", "Parents", "lots"]).await?;
        assert_eq!(reply, "Invalid amount. Please provide a number.");
        assert!(
            crate::core::member::get_all_members(&data.database)
                .await?
                .is_empty()
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_list_members_grouped() -> Result<()> {
        let db = setup_test_db().await?;
        create_custom_member(&db, "Oscar Mandela", "GenAlpha", 50).await?;
        create_custom_member(&db, "Pauline Nthenya", "Parents", 500).await?;
        create_custom_member(&db, "Agnes Mwende", "Parents", 500).await?;
        let data = test_bot_data(db);

        let message = list_members(&data).await?;
        assert!(message.starts_with("📋 *ALL MEMBERS*"));
        assert!(message.contains("*GenAlpha*\n1. Oscar Mandela - 50 KES"));
        assert!(message.contains("*Parents*\n1. Agnes Mwende - 500 KES\n2. Pauline Nthenya - 500 KES"));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_members_empty() -> Result<()> {
        let db = setup_test_db().await?;
        let data = test_bot_data(db);

        assert_eq!(
            list_members(&data).await?,
            "No members found in the database."
        );

        Ok(())
    }
}
