pub mod add;
pub mod clear;
pub mod config;
pub mod correlate;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod stats;
pub mod trend;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::storage::FileStorage;
use crate::store::EntryStore;
use std::io::{self, Write};

/// Open the journal store configured for this invocation.
pub(crate) fn open_store(cfg: &Config) -> EntryStore<FileStorage> {
    EntryStore::new(FileStorage::new(&cfg.storage))
}

/// Split a comma-separated medication string into trimmed labels,
/// dropping empties. At least one label must survive.
pub(crate) fn parse_medications(raw: &str) -> AppResult<Vec<String>> {
    let meds: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect();
    if meds.is_empty() {
        return Err(AppError::EmptyMedications);
    }
    Ok(meds)
}

/// Capture-side score validation. The analytics engine stays defensive
/// about out-of-range values regardless; this just keeps them out of
/// newly captured entries.
pub(crate) fn validate_score(score: i64) -> AppResult<i64> {
    if (1..=10).contains(&score) {
        Ok(score)
    } else {
        Err(AppError::InvalidScore(score))
    }
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    crate::ui::messages::warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
