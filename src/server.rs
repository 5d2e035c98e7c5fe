//! HTTP server initialization and runtime setup.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::memory::MemoryLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

/// Wires the application together and serves it until the process exits.
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server
/// fails at runtime.
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repository));
    let state = AppState::new(link_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
