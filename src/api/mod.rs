//! HTTP layer - webhook transport and the dashboard API.
//!
//! One axum router serves both surfaces: the WhatsApp webhook (inbound
//! messages and hub verification) and the JSON CRUD + reporting endpoints
//! used by the web dashboard.

/// Contribution CRUD endpoints
pub mod contributions;
/// Member CRUD endpoints
pub mod members;
/// Month CRUD endpoints
pub mod months;
/// Report, dashboard, and statistics endpoints
pub mod reports;
/// Request payload schemas
pub mod schemas;
/// WhatsApp webhook verification and message intake
pub mod webhook;

use crate::config::settings::AppConfig;
use crate::errors::Error;
use crate::whatsapp::WhatsAppClient;
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

/// Shared application state for all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Outbound message client
    pub whatsapp: Arc<WhatsAppClient>,
}

/// Error wrapper that renders crate errors as HTTP responses.
///
/// Domain failures map to their natural status codes; anything internal
/// degrades to a generic 500 body after being logged.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(value: Error) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            Error::Duplicate { .. } => (StatusCode::CONFLICT, self.0.to_string()),
            Error::NotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            Error::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, self.0.to_string()),
            Error::Unauthorized { .. } => (StatusCode::FORBIDDEN, self.0.to_string()),
            other => {
                error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "operation failed".to_string(),
                )
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Convenience result type for handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/webhook", get(webhook::verify).post(webhook::receive))
        .route("/api/members", get(members::list).post(members::create))
        .route(
            "/api/members/:id",
            get(members::get_by_id)
                .put(members::update)
                .delete(members::remove),
        )
        .route("/api/months", get(months::list).post(months::create))
        .route(
            "/api/months/:id",
            get(months::get_by_id).delete(months::remove),
        )
        .route(
            "/api/contributions",
            get(contributions::list).post(contributions::upsert),
        )
        .route("/api/contributions/:id", delete(contributions::remove))
        .route("/api/reports/:month", get(reports::by_month))
        .route("/api/dashboard", get(reports::dashboard))
        .route("/api/statistics", get(reports::statistics))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Chama Buddy contribution tracker API" }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::AppState;
    use crate::errors::Result;
    use crate::test_utils::{setup_test_db, test_app_config};
    use crate::whatsapp::WhatsAppClient;
    use std::sync::Arc;

    /// Builds an [`AppState`] over a fresh in-memory database with the test
    /// configuration and a simulated WhatsApp client.
    pub async fn test_app_state() -> Result<AppState> {
        let config = Arc::new(test_app_config());
        let whatsapp = Arc::new(WhatsAppClient::from_config(&config.whatsapp));
        Ok(AppState {
            db: setup_test_db().await?,
            config,
            whatsapp,
        })
    }
}
