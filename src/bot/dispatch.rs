//! Command parsing and dispatch.
//!
//! Each inbound message is handled as an independent request-response
//! exchange: authorization check first, then tokenization, then a lookup in
//! the command table, then the handler. Every failure is rendered as a
//! user-facing message; nothing internal leaks to the sender.

use crate::{
    bot::{BotData, commands},
    errors::{Error, Result},
};
use tracing::{error, warn};

/// Fixed reply for senders not on the allow-list.
pub const REJECTION_MESSAGE: &str =
    "You are not authorized to use this system. Please contact an admin.";

/// Fixed reply for unrecognized command tokens.
pub const UNKNOWN_COMMAND_MESSAGE: &str = "Unknown command. Type 'help' for available commands.";

const OPERATION_FAILED_MESSAGE: &str =
    "An error occurred while processing your request. Please try again.";

/// The recognized commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add a member to the roster
    AddMember,
    /// Record a payment
    MarkPaid,
    /// Generate the monthly report
    Report,
    /// Add a contribution period
    AddMonth,
    /// Show the command summary
    Help,
    /// Seed the database with the configured roster
    InitDb,
    /// List members grouped by category
    ListMembers,
    /// List contributions for a member or month
    ListContributions,
    /// List all months
    ListMonths,
    /// Show overall totals
    Dashboard,
    /// Show per-category and per-month statistics
    Statistics,
    /// Show example command invocations
    Examples,
}

impl Command {
    /// Resolves a command token, case-insensitively, including the
    /// documented aliases.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "addmember" | "add-member" => Some(Self::AddMember),
            "markpaid" | "mark-paid" => Some(Self::MarkPaid),
            "report" | "generate-report" => Some(Self::Report),
            "addmonth" | "add-month" => Some(Self::AddMonth),
            "help" | "menu" => Some(Self::Help),
            "initdb" | "init" | "seed" => Some(Self::InitDb),
            "listmembers" | "list-members" | "members" => Some(Self::ListMembers),
            "listcontributions" | "list-contributions" => Some(Self::ListContributions),
            "listmonths" | "list-months" | "months" => Some(Self::ListMonths),
            "dashboard" | "dashboard-summary" => Some(Self::Dashboard),
            "stats" | "statistics" | "statistics-summary" => Some(Self::Statistics),
            "examples" | "show-examples" => Some(Self::Examples),
            _ => None,
        }
    }
}

/// Handles one inbound message and produces the reply text.
///
/// The allow-list check runs before any parsing, so unauthorized senders
/// never reach a handler. Returns `None` for blank input, which gets no
/// reply at all.
pub async fn handle_message(data: &BotData, sender: &str, text: &str) -> Option<String> {
    if let Err(Error::Unauthorized { phone }) = ensure_admin(data, sender) {
        warn!(sender = %phone, "rejected message from unauthorized sender");
        return Some(REJECTION_MESSAGE.to_string());
    }

    let mut tokens = text.split_whitespace();
    let command_token = tokens.next()?;
    let args: Vec<&str> = tokens.collect();

    let Some(command) = Command::parse(command_token) else {
        return Some(UNKNOWN_COMMAND_MESSAGE.to_string());
    };

    Some(run_command(data, command, &args).await)
}

fn ensure_admin(data: &BotData, sender: &str) -> Result<()> {
    if data.config.is_admin(sender) {
        Ok(())
    } else {
        Err(Error::Unauthorized {
            phone: sender.to_string(),
        })
    }
}

async fn run_command(data: &BotData, command: Command, args: &[&str]) -> String {
    let result = match command {
        Command::AddMember => commands::member::add_member(data, args).await,
        Command::MarkPaid => commands::contribution::mark_paid(data, args).await,
        Command::Report => commands::contribution::report(data, args).await,
        Command::AddMonth => commands::month::add_month(data, args).await,
        Command::Help => Ok(commands::general::help_text()),
        Command::InitDb => commands::general::init_db(data).await,
        Command::ListMembers => commands::member::list_members(data).await,
        Command::ListContributions => commands::contribution::list_contributions(data, args).await,
        Command::ListMonths => commands::month::list_months(data).await,
        Command::Dashboard => commands::general::dashboard(data).await,
        Command::Statistics => commands::general::statistics(data).await,
        Command::Examples => Ok(commands::general::examples_text()),
    };

    match result {
        Ok(reply) => reply,
        Err(failure) => render_failure(command, &failure),
    }
}

/// Converts a handler failure into a user-facing reply.
///
/// Domain failures keep their message under a command-specific prefix;
/// infrastructure failures degrade to a generic message and get logged.
fn render_failure(command: Command, failure: &Error) -> String {
    let detail = match failure {
        Error::Duplicate { .. } | Error::NotFound { .. } | Error::Validation { .. } => {
            failure.to_string()
        }
        other => {
            error!(error = %other, ?command, "command failed");
            return OPERATION_FAILED_MESSAGE.to_string();
        }
    };

    let prefix = match command {
        Command::AddMember => "Error adding member",
        Command::MarkPaid => "Error marking payment",
        Command::Report => "Error generating report",
        Command::AddMonth => "Error adding month",
        Command::InitDb => "Error initializing database",
        _ => "Error",
    };
    format!("{prefix}: {detail}")
}
