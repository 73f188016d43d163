use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            let missing = Config::missing_keys(&path)?;
            if missing.is_empty() {
                success(format!("{} is complete.", path.display()));
            } else {
                warning(format!(
                    "{} is missing: {} (defaults in effect)",
                    path.display(),
                    missing.join(", ")
                ));
            }
        }

        if !*print_config && !*check {
            info("Use `config --print` or `config --check`.");
        }
    }

    Ok(())
}
