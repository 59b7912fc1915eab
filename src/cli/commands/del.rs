use super::{ask_confirmation, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes {
            let prompt = format!("Delete entry {}? This action is irreversible.", id);
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let mut store = open_store(cfg);
        if store.delete(id)? {
            success(format!("Entry {} has been deleted.", id));
        } else {
            return Err(AppError::EntryNotFound(id.clone()));
        }
    }
    Ok(())
}
