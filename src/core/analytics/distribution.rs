use crate::models::Entry;
use std::collections::BTreeMap;

/// How many entries sit at each well-being score.
///
/// The result always carries all ten keys `1..=10`, zero-valued where empty.
/// Scores outside the nominal domain land in no bucket, so the bucket sum
/// can be less than the entry count.
pub fn wellbeing_distribution(entries: &[Entry]) -> BTreeMap<u8, usize> {
    let mut distribution: BTreeMap<u8, usize> = (1..=10).map(|score| (score, 0)).collect();
    for entry in entries {
        if let Some(score) = entry.score() {
            if let Some(slot) = distribution.get_mut(&(score as u8)) {
                *slot += 1;
            }
        }
    }
    distribution
}
