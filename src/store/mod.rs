//! The entry store: CRUD over the journal, persisted as a single JSON array
//! under one namespaced key.
//!
//! Read failures (missing key, corrupt payload) degrade to an empty journal;
//! write failures propagate to the caller. The store imposes no ordering on
//! the collection — consumers sort as they need.

use crate::errors::AppResult;
use crate::models::{Entry, EntryDraft, EntryPatch};
use crate::storage::KvStorage;

/// Namespaced key the whole journal lives under.
pub const STORAGE_KEY: &str = "medication_entries";

pub struct EntryStore<S: KvStorage> {
    storage: S,
}

impl<S: KvStorage> EntryStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Snapshot of all entries. Missing or unreadable data reads as an empty
    /// journal, never an error.
    pub fn get_all(&self) -> Vec<Entry> {
        match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Stamp `id` + `timestamp` onto the draft and append it.
    pub fn create(&mut self, draft: EntryDraft) -> AppResult<Entry> {
        let entry = Entry::from_draft(draft);
        let mut entries = self.get_all();
        entries.push(entry.clone());
        self.write(&entries)?;
        Ok(entry)
    }

    /// Merge `patch` into the entry with the given id. `id` and `timestamp`
    /// are never altered. Returns `Ok(None)` when the id is unknown.
    pub fn update(&mut self, id: &str, patch: EntryPatch) -> AppResult<Option<Entry>> {
        let mut entries = self.get_all();
        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };

        if let Some(meds) = patch.medications {
            entry.medications = meds;
        }
        if let Some(score) = patch.wellbeing {
            entry.wellbeing = Some(score);
        }
        if let Some(notes) = patch.notes {
            entry.notes = if notes.is_empty() { None } else { Some(notes) };
        }
        let updated = entry.clone();

        self.write(&entries)?;
        Ok(Some(updated))
    }

    /// Delete by id. Returns whether an entry was actually removed.
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        let mut entries = self.get_all();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.write(&entries)?;
        Ok(true)
    }

    /// Drop the whole journal by removing the backing key.
    pub fn clear(&mut self) -> AppResult<()> {
        self.storage.remove(STORAGE_KEY)
    }

    fn write(&mut self, entries: &[Entry]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries)?;
        self.storage.set(STORAGE_KEY, &json)
    }
}
