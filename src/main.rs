//! Print Hub Server
//!
//! REST API server for 3D printer filament inventory and job assignment.

use std::net::SocketAddr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use printhub_server::{
    api,
    config::{AppConfig, LoggingConfig},
    repository::Repository,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing; the guard flushes the log file on exit
    let _guard = init_tracing(&config.logging);

    tracing::info!("Starting Print Hub Server v{}", env!("CARGO_PKG_VERSION"));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let initial_snapshot = config.data.initial_snapshot.clone();

    // Create repository and services
    let state = AppState::new(config, Repository::default());

    if let Some(path) = initial_snapshot {
        let summary = state.services.snapshot.import_file(&path).await?;
        tracing::info!(
            path = %path,
            printers = summary.printers,
            filaments = summary.filaments,
            print_jobs = summary.print_jobs,
            "Initial data loaded"
        );
    }

    // Build router
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("printhub_server={},tower_http=debug", logging.level).into());

    let stdout = if logging.format == "json" {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    let (file, guard) = match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "printhub-server.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout)
        .with(file)
        .init();

    guard
}
