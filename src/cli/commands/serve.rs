use crate::cli::parser::Commands;
use crate::config::{Backend, Config};
use crate::errors::{AppError, AppResult};
use crate::server;
use crate::store;
use std::net::SocketAddr;

/// Handle the `serve` command: expose the configured store over HTTP.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind, port } = cmd {
        if cfg.backend == Backend::Remote {
            return Err(AppError::Unsupported(
                "serve needs a sqlite or local backend, not remote".into(),
            ));
        }

        let host = bind.as_deref().unwrap_or(&cfg.bind_address);
        let port = port.unwrap_or(cfg.port);
        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| AppError::Config(format!("invalid bind address {host}:{port}: {e}")))?;

        let store = store::open(cfg)?;
        server::serve(addr, store).await?;
    }
    Ok(())
}
