//! Binary entry point: configuration, database setup, and the HTTP server.

use chama_buddy::{
    api::{self, AppState},
    config,
    errors::Result,
    whatsapp::WhatsAppClient,
};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::settings::load_app_configuration()
        .inspect_err(|e| error!("Failed to load application configuration: {e}"))?;
    info!("Successfully processed application configuration.");

    // 4. Initialize the database
    let db = config::database::create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;

    // 5. Build shared state and the router
    let config = Arc::new(app_config);
    let whatsapp = Arc::new(WhatsAppClient::from_config(&config.whatsapp));
    let app = api::router(AppState {
        db,
        config: Arc::clone(&config),
        whatsapp,
    });

    // 6. Serve webhook and dashboard traffic
    let listener = tokio::net::TcpListener::bind(config.listen_addr.as_str()).await?;
    info!(addr = %config.listen_addr, "Listening for webhook and dashboard requests.");
    axum::serve(listener, app).await?;

    Ok(())
}
