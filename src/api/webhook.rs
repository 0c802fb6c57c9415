//! WhatsApp webhook - hub verification and message intake.
//!
//! `GET /webhook` answers the platform's subscription handshake by echoing
//! the challenge when the verify token matches. `POST /webhook` unwraps the
//! nested event payload, runs each text message through the command
//! dispatcher, and sends the reply back through the outbound client.
//! Delivery failures are logged and reported in the response body; the
//! domain writes they follow have already committed and stay committed.

use super::AppState;
use crate::bot::{BotData, dispatch};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

/// Query parameters of the verification handshake.
#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    /// Always "subscribe" on a real handshake
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    /// Token the caller believes we configured
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    /// Opaque string to echo back on success
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// GET /webhook - verification handshake.
pub async fn verify(State(state): State<AppState>, Query(params): Query<VerifyParams>) -> Response {
    let expected = state.config.whatsapp.verify_token.as_deref();
    let token_matches = match (expected, params.verify_token.as_deref()) {
        (Some(expected), Some(provided)) => expected == provided,
        _ => false,
    };

    if params.mode.as_deref() == Some("subscribe") && token_matches {
        (StatusCode::OK, params.challenge.unwrap_or_default()).into_response()
    } else {
        (
            StatusCode::FORBIDDEN,
            Json(json!({ "detail": "Invalid verify token" })),
        )
            .into_response()
    }
}

/// Inbound event payload; only the fields the dispatcher needs are modeled,
/// everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    /// Event entries
    #[serde(default)]
    pub entry: Vec<Entry>,
}

/// One event entry.
#[derive(Debug, Deserialize)]
pub struct Entry {
    /// Changes within the entry
    #[serde(default)]
    pub changes: Vec<Change>,
}

/// One change within an entry.
#[derive(Debug, Deserialize)]
pub struct Change {
    /// Change payload
    pub value: ChangeValue,
}

/// The payload of a change.
#[derive(Debug, Deserialize)]
pub struct ChangeValue {
    /// Messages delivered with this change
    #[serde(default)]
    pub messages: Vec<InboundMessage>,
}

/// One inbound message.
#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    /// Sender identity (phone-number-like opaque string)
    pub from: String,
    /// Text content; absent for non-text messages, which are skipped
    pub text: Option<TextBody>,
}

/// Text content of a message.
#[derive(Debug, Deserialize)]
pub struct TextBody {
    /// The message line
    pub body: String,
}

/// POST /webhook - processes inbound messages and replies to each sender.
pub async fn receive(
    State(state): State<AppState>,
    Json(payload): Json<WebhookPayload>,
) -> Json<serde_json::Value> {
    let data = BotData::new(state.db.clone(), Arc::clone(&state.config));
    let mut delivery_failures = 0usize;

    for entry in payload.entry {
        for change in entry.changes {
            for message in change.value.messages {
                let Some(text) = message.text else { continue };
                info!(sender = %message.from, "processing inbound message");

                let Some(reply) = dispatch::handle_message(&data, &message.from, &text.body).await
                else {
                    continue;
                };

                if let Err(failure) = state.whatsapp.send_message(&message.from, &reply).await {
                    error!(error = %failure, sender = %message.from, "failed to deliver reply");
                    delivery_failures += 1;
                }
            }
        }
    }

    if delivery_failures > 0 {
        Json(json!({ "status": "error", "undelivered": delivery_failures }))
    } else {
        Json(json!({ "status": "ok" }))
    }
}
