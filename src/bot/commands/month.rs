//! Month commands - AddMonth and ListMonths.

use crate::{bot::BotData, core::month, errors::Result};
use std::fmt::Write;

/// Adds a new contribution period.
pub async fn add_month(data: &BotData, args: &[&str]) -> Result<String> {
    let Some(month_name) = args.first() else {
        return Ok("Usage: AddMonth <MonthName>".to_string());
    };

    let created = month::create_month(&data.database, (*month_name).to_string()).await?;

    Ok(format!("✅ Month added successfully!\nMonth: {}", created.name))
}

/// Lists all months in creation order.
pub async fn list_months(data: &BotData) -> Result<String> {
    let months = month::get_all_months(&data.database).await?;
    if months.is_empty() {
        return Ok("No months found in the database.".to_string());
    }

    let mut message = String::from("🗓️ *ALL MONTHS*\n\n");
    for (index, period) in months.iter().enumerate() {
        writeln!(&mut message, "{}. {}", index + 1, period.name)?;
    }

    Ok(message)
}
