//! Outbound WhatsApp message delivery.
//!
//! Thin client over the Cloud API messages endpoint. Without an access token
//! the client runs in simulated mode: every send is logged and reported as
//! successful, which keeps local development and tests free of credentials.
//! Delivery failures surface as transport errors to the caller; they are
//! never retried here.

use crate::config::settings::WhatsAppConfig;
use crate::errors::{Error, Result};
use serde_json::json;
use tracing::{debug, info};

/// Client for sending WhatsApp text messages.
pub struct WhatsAppClient {
    http: reqwest::Client,
    api_url: String,
    phone_number_id: String,
    access_token: Option<String>,
}

impl WhatsAppClient {
    /// Builds a client from the configured credentials.
    #[must_use]
    pub fn from_config(config: &WhatsAppConfig) -> Self {
        if config.access_token.is_none() {
            info!("WhatsApp credentials not found, outbound messages will be simulated");
        }
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            phone_number_id: config.phone_number_id.clone(),
            access_token: config.access_token.clone(),
        }
    }

    /// Returns true when no credentials are configured.
    #[must_use]
    pub const fn is_simulated(&self) -> bool {
        self.access_token.is_none()
    }

    /// Sends a text message to the given recipient.
    pub async fn send_message(&self, to: &str, body: &str) -> Result<()> {
        let Some(token) = &self.access_token else {
            info!(recipient = %to, message = %body, "[SIMULATED] WhatsApp message");
            return Ok(());
        };

        let url = format!("{}/{}/messages", self.api_url, self.phone_number_id);
        let payload = json!({
            "messaging_product": "whatsapp",
            "to": to,
            "type": "text",
            "text": { "body": body },
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::Transport {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(Error::Transport {
                message: format!("WhatsApp API returned {}", response.status()),
            });
        }

        debug!(recipient = %to, "WhatsApp message sent");
        Ok(())
    }
}
