use super::{ask_confirmation, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut store = open_store(cfg);
        let count = store.get_all().len();

        if count == 0 {
            info("The journal is already empty.");
            return Ok(());
        }

        if !*yes {
            let prompt = format!(
                "Delete ALL {} journal entries? This action is irreversible.",
                count
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        store.clear()?;
        success(format!("Deleted {} entries.", count));
    }
    Ok(())
}
