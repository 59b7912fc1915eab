use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::{
    Interpretation, MIN_CORRELATION_SAMPLES, MedicationCorrelation, medication_correlation,
    ranked_correlations, unique_medications,
};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{RESET, color_for_difference};
use crate::utils::fmt2;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Correlate { medication, json } = cmd {
        let store = open_store(cfg);
        let entries = store.get_all();

        match medication {
            Some(label) => {
                if !unique_medications(&entries).iter().any(|m| m == label) {
                    return Err(AppError::UnknownMedication(label.clone()));
                }
                let corr = medication_correlation(&entries, label);

                if *json {
                    println!("{}", serde_json::to_string_pretty(&corr)?);
                    return Ok(());
                }
                print_single(&corr);
            }
            None => {
                let ranked = ranked_correlations(&entries);

                if *json {
                    println!("{}", serde_json::to_string_pretty(&ranked)?);
                    return Ok(());
                }

                if ranked.is_empty() {
                    info(format!(
                        "No medication has been taken at least {} times yet.",
                        MIN_CORRELATION_SAMPLES
                    ));
                    return Ok(());
                }
                print_ranked(&ranked);
            }
        }
    }
    Ok(())
}

fn print_single(corr: &MedicationCorrelation) {
    header(format!("Correlation for {}", corr.medication));
    println!(
        "With    ({} entries): average well-being {}",
        corr.count_with_med,
        fmt2(corr.avg_with_med)
    );
    println!(
        "Without ({} entries): average well-being {}",
        corr.count_without_med,
        fmt2(corr.avg_without_med)
    );
    println!(
        "Difference: {}{}{} ({})",
        color_for_difference(corr.difference),
        fmt2(corr.difference),
        RESET,
        Interpretation::classify(corr.difference).label()
    );
    println!();

    if corr.count_with_med < MIN_CORRELATION_SAMPLES {
        warning(format!(
            "Only {} entry with this medication: the comparison is not meaningful yet.",
            corr.count_with_med
        ));
    }
    info("Observational only: a difference here is not evidence of causation.");
}

fn print_ranked(ranked: &[MedicationCorrelation]) {
    header("Medication correlations");

    let med_width = ranked
        .iter()
        .map(|c| c.medication.len())
        .max()
        .unwrap_or(10)
        .max("Medication".len());
    let mut table = Table::new(vec![
        Column::new("Medication", med_width),
        Column::new("With", 6),
        Column::new("Without", 7),
        Column::new("Taken", 5),
        Column::new("Diff", 6),
        Column::new("Reading", 15),
    ]);
    for corr in ranked {
        table.add_row(vec![
            corr.medication.clone(),
            fmt2(corr.avg_with_med),
            fmt2(corr.avg_without_med),
            corr.count_with_med.to_string(),
            fmt2(corr.difference),
            Interpretation::classify(corr.difference).label().to_string(),
        ]);
    }
    print!("{}", table.render());
    println!();
    info("Observational only: a difference here is not evidence of causation.");
}
