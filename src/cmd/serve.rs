use tokio::net::TcpListener;

use crate::config;
use crate::context::AppContext;
use crate::startup;

/// Loads settings, builds the outbound clients and the router, binds the
/// listener, and blocks the calling thread until the server shuts down.
pub fn run() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve())
}

async fn serve() -> anyhow::Result<()> {
    let settings = config::settings();
    let listener = TcpListener::bind(settings.application.address()).await?;
    let ctx = AppContext::new(settings);

    tracing::info!(address = %settings.application.address(), "starting draft-annotations-api");

    startup::run(listener, settings, ctx).await?;

    Ok(())
}
