use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use cheesecake::{
    AppState, backends,
    config::{BackendKind, Config},
    server,
};

/// Cheesecake Safaris - site data and comment API
#[derive(Parser, Debug)]
#[command(name = "cheesecake")]
#[command(version, about, long_about = None)]
struct Args {
    /// Storage behind the comment and gallery endpoints (overrides BACKEND)
    #[arg(long, value_enum)]
    backend: Option<BackendKind>,

    /// Port to listen on (overrides SERVER_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cheesecake=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(backend) = args.backend {
        config.backend = backend;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }

    let backend = backends::from_config(&config)?;
    tracing::info!("Serving data from {}", config.data_dir);
    tracing::info!("Serving site from {}", config.public_dir);

    let address = config.bind_address();
    let state = AppState {
        backend,
        config: Arc::new(config),
    };
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Server running on http://{}", address);

    axum::serve(listener, app).await?;
    Ok(())
}
