use crate::cli::parser::Commands;
use crate::config::Config;
use crate::data::DataStore;
use crate::errors::{AppError, AppResult};
use crate::http::{self, AppState};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Handle the `serve` command: install the tracing subscriber, then run the
/// HTTP service on a fresh tokio runtime.
pub fn handle(cmd: &Commands, cfg: &Config, store: DataStore) -> AppResult<()> {
    if let Commands::Serve { host, port } = cmd {
        init_tracing();

        let host = host.clone().unwrap_or_else(|| cfg.host.clone());
        let port = port.unwrap_or(cfg.port);
        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| AppError::Config(format!("invalid bind address {host}:{port}: {e}")))?;

        info!(
            csv = %store.csv_path().display(),
            xml = %store.xml_path().display(),
            cache_ttl_secs = cfg.cache_ttl_secs,
            "starting presence-analyzer server"
        );

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(http::serve(AppState::new(store), addr))?;
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second install (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
