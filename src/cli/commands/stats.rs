use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::{
    average_wellbeing, medication_frequency, unique_medications, wellbeing_distribution,
};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, GREEN, RESET};
use crate::utils::fmt2;
use crate::utils::format::bar;
use crate::utils::table::{Column, Table};
use serde_json::json;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { json } = cmd {
        let store = open_store(cfg);
        let entries = store.get_all();

        let frequency = medication_frequency(&entries);
        let average = average_wellbeing(&entries);
        let distribution = wellbeing_distribution(&entries);
        let distinct = unique_medications(&entries).len();

        if *json {
            let out = json!({
                "total_entries": entries.len(),
                "average_wellbeing": fmt2(average),
                "distinct_medications": distinct,
                "medication_frequency": frequency,
                "wellbeing_distribution": distribution,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            return Ok(());
        }

        if entries.is_empty() {
            info("Start logging entries to see your statistics!");
            return Ok(());
        }

        header("Journal summary");
        println!("{}• Entries:{} {}{}{}", CYAN, RESET, GREEN, entries.len(), RESET);
        println!(
            "{}• Average well-being:{} {}{}{}",
            CYAN,
            RESET,
            GREEN,
            fmt2(average),
            RESET
        );
        println!(
            "{}• Distinct medications:{} {}{}{}",
            CYAN, RESET, GREEN, distinct, RESET
        );
        println!();

        header("Medication frequency");
        // Most frequent first; label order breaks ties.
        let mut by_count: Vec<(&String, &usize)> = frequency.iter().collect();
        by_count.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        let med_width = by_count
            .iter()
            .map(|(m, _)| m.len())
            .max()
            .unwrap_or(10)
            .max("Medication".len());
        let mut table = Table::new(vec![
            Column::new("Medication", med_width),
            Column::new("Times", 5),
        ]);
        for (med, count) in by_count {
            table.add_row(vec![med.clone(), count.to_string()]);
        }
        print!("{}", table.render());
        println!();

        header("Well-being distribution");
        let max_count = distribution.values().copied().max().unwrap_or(0);
        for (score, count) in &distribution {
            println!(
                "{:>2} | {:<40} {}",
                score,
                bar(*count, max_count, 40),
                count
            );
        }
        println!();
    }
    Ok(())
}
