use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pitch_core::{CoreConfig, PgPitchStore, PitchService};

/// Main entry point for the PitchSite application
///
/// Connects to the hosted pitch datastore and serves the REST API.
///
/// # Environment Variables
/// - `PITCH_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `DATABASE_URL`: Postgres connection string (required)
/// - `PITCH_DB_MAX_CONNECTIONS`: connection pool size (default: 5)
/// - `PITCH_ESCAPE_HTML`: escape interpolated pitch text (default: false)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid or the datastore cannot be reached,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pitchsite=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("PITCH_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = CoreConfig::from_env()?;
    if cfg.render_options().escape_html {
        tracing::info!("HTML escaping of pitch fields enabled");
    }

    let store = PgPitchStore::connect(&cfg).await?;
    let pitch_service = PitchService::new(Arc::new(store), cfg.render_options());

    let app = api_rest::build_router(pitch_service);

    tracing::info!("++ Starting PitchSite REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
