use crate::models::Entry;
use std::collections::{BTreeMap, BTreeSet};

/// Count how often each medication label appears across the snapshot.
///
/// The count is over medication-list *items*: a label listed twice inside a
/// single entry counts twice. Every label appearing anywhere in the snapshot
/// shows up as a key.
pub fn medication_frequency(entries: &[Entry]) -> BTreeMap<String, usize> {
    let mut frequency = BTreeMap::new();
    for entry in entries {
        for med in &entry.medications {
            *frequency.entry(med.clone()).or_insert(0) += 1;
        }
    }
    frequency
}

/// All distinct medication labels, ascending code-point order.
pub fn unique_medications(entries: &[Entry]) -> Vec<String> {
    let mut meds = BTreeSet::new();
    for entry in entries {
        for med in &entry.medications {
            meds.insert(med.clone());
        }
    }
    meds.into_iter().collect()
}
