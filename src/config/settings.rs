//! Application settings loaded from the environment.
//!
//! All runtime configuration is read once at startup into [`AppConfig`] and
//! passed down explicitly; nothing in the crate reads ambient globals after
//! boot. Secrets (the WhatsApp access token) stay in the environment and are
//! only referenced here.

use crate::errors::{Error, Result};

/// Credentials and endpoint for the outbound WhatsApp API.
#[derive(Debug, Clone)]
pub struct WhatsAppConfig {
    /// Base URL of the messages API
    pub api_url: String,
    /// Sender phone number id used in the messages URL path
    pub phone_number_id: String,
    /// Bearer token; None puts the client in simulated mode
    pub access_token: Option<String>,
    /// Shared secret for webhook verification; None disables verification
    pub verify_token: Option<String>,
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database connection URL
    pub database_url: String,
    /// Listen address for the HTTP server
    pub listen_addr: String,
    /// Phone numbers allowed to issue commands, matched by exact equality
    pub admin_phones: Vec<String>,
    /// Banner line used at the top of monthly reports
    pub report_title: String,
    /// Outbound WhatsApp transport settings
    pub whatsapp: WhatsAppConfig,
}

impl AppConfig {
    /// Returns true if the given sender identity is on the admin allow-list.
    #[must_use]
    pub fn is_admin(&self, phone: &str) -> bool {
        self.admin_phones.iter().any(|admin| admin == phone)
    }
}

/// Loads the main application configuration from environment variables.
///
/// Every setting has a default so a bare environment boots a local instance;
/// `ADMIN_PHONES` is the comma-separated allow-list and must resolve to at
/// least one number.
pub fn load_app_configuration() -> Result<AppConfig> {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/chama_buddy.sqlite?mode=rwc".to_string());

    let listen_addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    let admin_phones = match std::env::var("ADMIN_PHONES") {
        Ok(raw) => parse_admin_phones(&raw),
        Err(_) => vec!["254700000000".to_string(), "254711111111".to_string()],
    };
    if admin_phones.is_empty() {
        return Err(Error::Config {
            message: "ADMIN_PHONES must contain at least one phone number".to_string(),
        });
    }

    let report_title = std::env::var("REPORT_TITLE")
        .unwrap_or_else(|_| "SHOSHO'S BIRTHDAY CONTRIBUTION".to_string());

    let whatsapp = WhatsAppConfig {
        api_url: std::env::var("WHATSAPP_API_URL")
            .unwrap_or_else(|_| "https://graph.facebook.com/v19.0".to_string()),
        phone_number_id: std::env::var("WHATSAPP_PHONE_NUMBER_ID").unwrap_or_default(),
        access_token: std::env::var("WHATSAPP_ACCESS_TOKEN").ok(),
        verify_token: std::env::var("WHATSAPP_VERIFY_TOKEN").ok(),
    };
    if whatsapp.access_token.is_some() && whatsapp.phone_number_id.is_empty() {
        return Err(Error::Config {
            message: "WHATSAPP_PHONE_NUMBER_ID is required when WHATSAPP_ACCESS_TOKEN is set"
                .to_string(),
        });
    }

    Ok(AppConfig {
        database_url,
        listen_addr,
        admin_phones,
        report_title,
        whatsapp,
    })
}

fn parse_admin_phones(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}
