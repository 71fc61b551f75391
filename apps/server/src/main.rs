use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing::{info, warn};

use fyyur::app::Directory;
use fyyur::cli::CliArgs;
use fyyur::config::init_app_config;
use fyyur::db::create_database_pool;
use fyyur::http::{build_router, AppState};
use fyyur::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    logging::init(&config)?;

    let pool = create_database_pool(&config).await?;
    let app = build_router(AppState::new(Directory::new(pool.clone())));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;
    info!("Fyyur listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutting down, closing database pool");
    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c, serving until killed");
        std::future::pending::<()>().await;
    }
}
