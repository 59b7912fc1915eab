use super::{open_store, parse_medications, validate_score};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::EntryPatch;
use crate::ui::messages::{success, warning};
use crate::utils::format::join_medications;

/// Update an existing entry. Only the given fields change; id and timestamp
/// are fixed for the entry's lifetime.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        meds,
        score,
        notes,
    } = cmd
    {
        if meds.is_none() && score.is_none() && notes.is_none() {
            warning("Nothing to change: pass --meds, --score or --notes.");
            return Ok(());
        }

        let patch = EntryPatch {
            medications: meds.as_deref().map(parse_medications).transpose()?,
            wellbeing: score.map(validate_score).transpose()?,
            notes: notes.clone(),
        };

        let mut store = open_store(cfg);
        match store.update(id, patch)? {
            Some(entry) => success(format!(
                "Updated entry {}: {} ({}/10)",
                entry.id,
                join_medications(&entry.medications),
                entry
                    .score()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "--".to_string())
            )),
            None => return Err(AppError::EntryNotFound(id.clone())),
        }
    }
    Ok(())
}
