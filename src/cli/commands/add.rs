use super::{open_store, parse_medications, validate_score};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::EntryDraft;
use crate::ui::messages::success;
use crate::utils::format::{fmt_timestamp, join_medications};

/// Log a new journal entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { meds, score, notes } = cmd {
        //
        // 1. Parse the medication list (mandatory, comma separated)
        //
        let medications = parse_medications(meds)?;

        //
        // 2. Validate the score at the capture boundary
        //
        let score = validate_score(*score)?;

        //
        // 3. Stamp and persist
        //
        let draft = EntryDraft {
            medications,
            wellbeing: Some(score),
            notes: notes.as_deref().map(str::trim).filter(|n| !n.is_empty()).map(str::to_string),
        };

        let mut store = open_store(cfg);
        let entry = store.create(draft)?;

        success(format!(
            "Logged {} ({}/10) at {} [id {}]",
            join_medications(&entry.medications),
            score,
            fmt_timestamp(&entry.timestamp),
            entry.id
        ));
    }
    Ok(())
}
