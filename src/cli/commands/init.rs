use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode, kept if present)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = Config::config_file();

    println!("⚙️  Initializing stagelist…");

    if cli.test {
        info("Test mode: configuration file left untouched.");
    } else if path.exists() {
        info(format!("Keeping existing configuration: {}", path.display()));
    } else {
        cfg.save_to(&path)?;
        println!("📄 Config file : {}", path.display());
    }
    println!("🗄️  Database   : {}", cfg.database);

    let pool = DbPool::new(&cfg.database)?;
    println!("✅ Database initialized at {}", cfg.database);

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 stagelist initialization completed!");
    Ok(())
}
