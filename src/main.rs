use std::sync::Arc;

use anyhow::Context;
use futures::FutureExt;
use tracing::info;

use alertmgr_core::app_state::build_app_state;
use alertmgr_core::config::ServerConfig;
use alertmgr_core::core::metrics::noop_metrics::NoopMetrics;
use alertmgr_core::logging::init_tracing;
use alertmgr_core::routes::app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = init_tracing()?;
    let config = ServerConfig::from_env()?;

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;

    info!(address = %config.bind_address(), max_batch_size = config.max_batch_size, "alertmgr-core started");

    let app = app_router().with_state(build_app_state(config, Arc::new(NoopMetrics)));
    let shutdown = tokio::signal::ctrl_c().map(|_| ());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("alertmgr-core stopped");
    Ok(())
}
