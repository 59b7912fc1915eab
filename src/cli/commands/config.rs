use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{yaml}");
            return Ok(());
        }

        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration looks good.");
            } else {
                for p in problems {
                    warning(p);
                }
            }
            return Ok(());
        }

        info(format!(
            "Configuration file: {}",
            Config::config_file().display()
        ));
        info(format!("Store directory:    {}", cfg.storage));
    }
    Ok(())
}
