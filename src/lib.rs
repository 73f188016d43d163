//! stagelist library root.
//! Exposes the CLI parser, the record stores, the HTTP server, the console
//! and a high-level `run()` used by main.rs.

pub mod cli;
pub mod config;
pub mod console;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod server;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Serve { .. } => commands::serve::handle(&cli.command, cfg).await,
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg).await,
        Commands::List { .. } => commands::list::handle(&cli.command, cfg).await,
        Commands::Toggle { .. } => commands::toggle::handle(&cli.command, cfg).await,
        Commands::Edit { .. } => commands::edit::handle(&cli.command, cfg).await,
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg).await,
        Commands::Order => commands::order::handle(cfg).await,
        Commands::Viewer { .. } => commands::viewer::handle(&cli.command, cfg).await,
        Commands::Console => commands::console::handle(cfg).await,
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg).await,
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default level.
fn init_tracing(command: &Commands) {
    let default = match command {
        Commands::Serve { .. } => "stagelist=info,tower_http=info",
        _ => "stagelist=warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Apply the global command-line overrides to the loaded configuration.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(backend) = cli.backend {
        cfg.backend = backend;
    }
    if let Some(url) = &cli.server {
        cfg.server_url = url.clone();
    }
    if let Some(file) = &cli.local_file {
        cfg.local_store = file.clone();
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(&cli.command);

    // load config once; test mode ignores the user's file
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };
    apply_overrides(&cli, &mut cfg);

    dispatch(&cli, &cfg).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Backend;

    #[test]
    fn flags_override_the_loaded_config() {
        let cli = Cli::parse_from([
            "stagelist",
            "--db",
            "/tmp/x.sqlite",
            "--backend",
            "remote",
            "--server",
            "http://10.0.0.2:5000",
            "list",
        ]);
        let mut cfg = Config::default();
        apply_overrides(&cli, &mut cfg);

        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.backend, Backend::Remote);
        assert_eq!(cfg.server_url, "http://10.0.0.2:5000");
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = Cli::parse_from(["stagelist", "toggle", "4", "--backend", "local"]);
        assert_eq!(cli.backend, Some(Backend::Local));
        assert!(matches!(cli.command, Commands::Toggle { id: 4 }));
    }
}
