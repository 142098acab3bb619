//! # fleetbilld — fleet billing query daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load `.env`, then parse configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool (and the schema, when asked to)
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), then close the pool
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use fleetbill_adapter_http_axum::router;
use fleetbill_adapter_http_axum::state::AppState;
use fleetbill_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteBillingRepository, SqliteConsumptionRepository,
};
use fleetbill_app::services::billing_service::BillingService;
use fleetbill_app::services::utilization_service::UtilizationService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a missing .env file is not an error
    let dotenv = dotenvy::dotenv();

    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    // Database
    let db = StorageConfig {
        database_url: config.database.url.clone(),
        migrate: config.database.migrate,
        max_connections: config.database.max_connections,
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let billing_repo = SqliteBillingRepository::new(pool.clone());
    let consumption_repo = SqliteConsumptionRepository::new(pool);

    // Services
    let billing_service = BillingService::new(billing_repo);
    let utilization_service =
        UtilizationService::new(consumption_repo, config.billing.switches.clone());

    // HTTP
    let state = AppState::new(
        billing_service,
        utilization_service,
        config.billing.calculation_type,
    );
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        %bind_addr,
        calculation_type = %config.billing.calculation_type,
        "fleetbilld listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("fleetbilld stopped");

    Ok(())
}

/// Resolve once Ctrl-C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
