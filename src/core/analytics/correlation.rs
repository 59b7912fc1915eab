use super::average::{average_wellbeing, round2};
use super::frequency::unique_medications;
use super::MIN_CORRELATION_SAMPLES;
use crate::models::Entry;
use serde::Serialize;
use std::cmp::Ordering;

/// Observational with/without average-difference statistic for one
/// medication. Not a causal measure; the UI says as much.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicationCorrelation {
    pub medication: String,
    pub avg_with_med: f64,
    pub avg_without_med: f64,
    pub count_with_med: usize,
    pub count_without_med: usize,
    pub difference: f64,
}

/// Partition the snapshot on "medication list contains `medication`" and
/// compare average well-being across the halves. Entries with no medication
/// list fall on the "without" side.
///
/// `difference` is computed from the two already-rounded averages and then
/// rounded again. The double rounding can drift ±0.01 from the unrounded
/// subtraction; it is kept for output parity with existing journals.
pub fn medication_correlation(entries: &[Entry], medication: &str) -> MedicationCorrelation {
    let (with_med, without_med): (Vec<&Entry>, Vec<&Entry>) =
        entries.iter().partition(|e| e.has_medication(medication));

    let avg_with = average_wellbeing(with_med.iter().copied());
    let avg_without = average_wellbeing(without_med.iter().copied());

    MedicationCorrelation {
        medication: medication.to_string(),
        avg_with_med: avg_with,
        avg_without_med: avg_without,
        count_with_med: with_med.len(),
        count_without_med: without_med.len(),
        difference: round2(avg_with - avg_without),
    }
}

/// One correlation per distinct medication, thin samples dropped
/// (`count_with_med < 2`), sorted by descending signed difference.
pub fn ranked_correlations(entries: &[Entry]) -> Vec<MedicationCorrelation> {
    let mut ranked: Vec<MedicationCorrelation> = unique_medications(entries)
        .iter()
        .map(|med| medication_correlation(entries, med))
        .filter(|c| c.count_with_med >= MIN_CORRELATION_SAMPLES)
        .collect();
    ranked.sort_by(|a, b| {
        b.difference
            .partial_cmp(&a.difference)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// Reading of a correlation difference, as shown next to ranked results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Interpretation {
    StrongPositive,
    Positive,
    Neutral,
    Negative,
    StrongNegative,
}

impl Interpretation {
    /// Band boundaries: ±0.3 around zero is neutral, beyond ±1 is strong.
    pub fn classify(difference: f64) -> Self {
        if difference > 1.0 {
            Self::StrongPositive
        } else if difference > 0.3 {
            Self::Positive
        } else if difference < -1.0 {
            Self::StrongNegative
        } else if difference < -0.3 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::StrongPositive => "strong positive",
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
            Self::StrongNegative => "strong negative",
        }
    }
}
