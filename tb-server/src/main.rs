use tb_server::services::files::FileStore;
use tb_server::{AppState, ServerError, build_router, logger};

use tb_auth::{JwtValidator, TokenIssuer};
use tb_config::Config;

use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = Config::config_dir()?;
        let log_dir = config_dir.join("logs");
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting tb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = tb_db::connect(&database_path).await?;

    info!("Running database migrations...");
    tb_db::MIGRATOR
        .run(&pool)
        .await
        .map_err(tb_db::DbError::from)?;
    info!("Migrations complete");

    // Token signing and validation share the configured HS256 secret.
    // validate() guarantees the secret is present and long enough.
    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .expect("validate() ensures jwt_secret is set");
    let issuer = TokenIssuer::new(
        secret.as_bytes(),
        config.auth.token_lifetime_minutes,
        config.auth.issuer.clone(),
        config.auth.audience.clone(),
    )?;
    let validator = JwtValidator::with_hs256(
        secret.as_bytes(),
        config.auth.issuer.as_deref(),
        config.auth.audience.as_deref(),
    );

    // Upload storage
    let storage_path = config.storage_path()?;
    std::fs::create_dir_all(&storage_path)?;
    let files = FileStore::new(storage_path, &config.storage);

    // Build application state
    let state = AppState {
        pool,
        issuer: Arc::new(issuer),
        validator: Arc::new(validator),
        files: Arc::new(files),
        environment: config.server.environment.clone(),
    };

    // Build router
    let app = build_router(state, &config.cors);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for SIGINT: {}", e);
            } else {
                info!("Received SIGINT (Ctrl+C), shutting down");
            }
        })
        .await?;

    info!("Shutdown complete");
    Ok(())
}
