//! HTTP service: the JSON API consumed by the dashboard plus the dashboard
//! pages themselves.
//!
//! ```text
//! handlers ──► core::stats / chart ──► data::DataStore (CSV + XML, TTL cache)
//! ```

pub mod dashboard;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

use crate::errors::AppResult;
use std::net::SocketAddr;
use tracing::info;

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> AppResult<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
