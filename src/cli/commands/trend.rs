use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::wellbeing_trend;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::fmt2;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trend { days, json } = cmd {
        let window = days.unwrap_or(cfg.trend_window_days);

        let store = open_store(cfg);
        let entries = store.get_all();
        let trend = wellbeing_trend(&entries, window);

        if *json {
            println!("{}", serde_json::to_string_pretty(&trend)?);
            return Ok(());
        }

        if trend.is_empty() {
            info(format!("No entries in the last {} days.", window));
            return Ok(());
        }

        header(format!("Well-being trend, last {} days", window));
        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Average", 7),
            Column::new("Entries", 7),
        ]);
        for point in &trend {
            table.add_row(vec![
                point.date.to_string(),
                fmt2(point.average_wellbeing),
                point.count.to_string(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
