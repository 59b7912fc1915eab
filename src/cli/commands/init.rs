use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::{FileStorage, KvStorage};
use crate::store::STORAGE_KEY;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the store directory with an empty journal
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.store.clone(), cli.test)?;

    // Seed an empty journal so the first `list` finds a well-formed store,
    // but never overwrite an existing one.
    let mut storage = FileStorage::new(&cfg.storage);
    if storage.get(STORAGE_KEY)?.is_none() {
        storage.set(STORAGE_KEY, "[]")?;
    } else {
        info("Existing journal found, keeping it.");
    }

    success(format!("Journal initialized in {}", cfg.storage));
    if !cli.test {
        info(format!(
            "Configuration written to {}",
            Config::config_file().display()
        ));
    }
    Ok(())
}
