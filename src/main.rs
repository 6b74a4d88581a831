//! Main entry point for the medscore server.
//!
//! Bootstraps the calculator registry, then serves the REST API (with
//! OpenAPI/Swagger UI) on the configured address.

use medscore_core::{bootstrap, DispatchService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Starts the medscore REST API server (default: 0.0.0.0:3000).
///
/// # Environment Variables
/// - `MEDSCORE_ADDR`: Server address (default: "0.0.0.0:3000")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the calculator catalog fails to bootstrap,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medscore=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MEDSCORE_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    // The registry is complete before the listener binds; a duplicate
    // identifier aborts startup here.
    let registry = bootstrap()?;
    tracing::info!(
        calculators = registry.len(),
        "-- Starting medscore REST API on {}",
        addr
    );

    let app = api_rest::app(DispatchService::new(registry));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
