//! CampusHub Server — university community portal backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use campushub_api::router::build_router;
use campushub_api::state::AppState;
use campushub_core::config::AppConfig;
use campushub_core::error::AppError;
use campushub_database::repositories::{
    PgEventRepository, PgGiveawayRepository, PgJobRepository, PgNotificationRepository,
    PgProductRepository, PgPurchaseRepository, PgReminderRepository,
    PgSellerNotificationRepository, PgWishlistRepository,
};
use campushub_service::{
    EventService, GiveawayService, MarketplaceService, NotificationService,
    SellerNotificationService,
};

#[tokio::main]
async fn main() {
    let env = std::env::var("CAMPUSHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Configuration loaded (env: {})", env);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting CampusHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = campushub_database::connection::create_pool(&config.database).await?;
    campushub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let event_repo = Arc::new(PgEventRepository::new(db_pool.clone()));
    let reminder_repo = Arc::new(PgReminderRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(PgNotificationRepository::new(db_pool.clone()));
    let seller_notification_repo = Arc::new(PgSellerNotificationRepository::new(db_pool.clone()));
    let product_repo = Arc::new(PgProductRepository::new(db_pool.clone()));
    let purchase_repo = Arc::new(PgPurchaseRepository::new(db_pool.clone()));
    let wishlist_repo = Arc::new(PgWishlistRepository::new(db_pool.clone()));
    let job_repo = Arc::new(PgJobRepository::new(db_pool.clone()));
    let giveaway_repo = Arc::new(PgGiveawayRepository::new(db_pool.clone()));

    // ── Step 3: Services ─────────────────────────────────────────
    let notification_service = Arc::new(NotificationService::new(
        notification_repo,
        reminder_repo.clone(),
        event_repo.clone(),
    ));
    let event_service = Arc::new(EventService::new(
        event_repo,
        reminder_repo,
        notification_service.clone(),
    ));
    let seller_notification_service = Arc::new(SellerNotificationService::new(
        seller_notification_repo.clone(),
    ));
    let marketplace_service = Arc::new(MarketplaceService::new(
        product_repo,
        purchase_repo,
        wishlist_repo,
        job_repo,
        seller_notification_repo.clone(),
    ));
    let giveaway_service = Arc::new(GiveawayService::new(
        giveaway_repo,
        seller_notification_repo,
    ));
    tracing::info!("Services initialized");

    // ── Step 4: HTTP server ──────────────────────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        event_service,
        notification_service,
        seller_notification_service,
        marketplace_service,
        giveaway_service,
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("CampusHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("CampusHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
