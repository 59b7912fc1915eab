use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Entry;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREY, RESET, color_for_score};
use crate::utils::format::{fmt_timestamp, join_medications, wrap_notes};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit, all, json } = cmd {
        let store = open_store(cfg);
        let mut entries = store.get_all();

        // Newest first; storage order is not meaningful.
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let shown: &[Entry] = if *all {
            &entries
        } else {
            let n = limit.unwrap_or(cfg.list_limit);
            &entries[..entries.len().min(n)]
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(shown)?);
            return Ok(());
        }

        if entries.is_empty() {
            info("No entries yet. Log your first one with `medjournal add`.");
            return Ok(());
        }

        println!("Your entries ({})", entries.len());
        println!();
        for entry in shown {
            print_entry(entry);
        }
        if shown.len() < entries.len() {
            println!(
                "{}... {} more (use --all to show everything){}",
                GREY,
                entries.len() - shown.len(),
                RESET
            );
        }
    }
    Ok(())
}

fn print_entry(entry: &Entry) {
    let score = match entry.score() {
        Some(s) => format!("{}{:>2}/10{}", color_for_score(entry.score()), s, RESET),
        None => format!("{}--/10{}", GREY, RESET),
    };
    println!(
        "{}{}{}  {}  {}",
        CYAN,
        fmt_timestamp(&entry.timestamp),
        RESET,
        score,
        join_medications(&entry.medications)
    );
    println!("{}    id: {}{}", GREY, entry.id, RESET);
    if let Some(notes) = &entry.notes {
        println!("{}", wrap_notes(notes, 72, "    "));
    }
    println!();
}
