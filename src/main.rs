use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

use marquee::logging::init_tracing;
use marquee::router::init_router;
use marquee::state::init_app_state;
use marquee_config::ServerConfig;

#[derive(Debug, Parser)]
#[command(name = "marquee", about = "Marquee API server")]
struct Args {
    /// Address to listen on; overrides BIND_ADDRESS.
    #[arg(long)]
    bind: Option<String>,

    /// Start without applying pending database migrations.
    #[arg(long)]
    skip_migrations: bool,

    /// Directory for the rolling JSON log files.
    #[arg(long, default_value = "storage/logs")]
    log_dir: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    init_tracing(&args.log_dir)?;

    let mut server_config = ServerConfig::from_env()?;
    if let Some(bind) = args.bind {
        server_config.bind_address = bind;
    }

    let state = init_app_state(&server_config).await?;

    if !args.skip_migrations {
        marquee_db::run_migrations(&state.db).await?;
    }

    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&server_config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", server_config.bind_address))?;

    info!(
        address = %server_config.bind_address,
        environment = ?server_config.environment,
        "Server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
