use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One journal record: the medications taken together at a point in time,
/// plus the self-reported well-being score.
///
/// `id` and `timestamp` are stamped by the store at creation and never change
/// afterwards. All other fields are caller-supplied and may be absent in
/// older or hand-edited store files, hence the serde defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub timestamp: DateTime<Local>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub wellbeing: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Entry {
    /// Stamp a draft into a full entry. Only the store calls this.
    pub(crate) fn from_draft(draft: EntryDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Local::now(),
            medications: draft.medications,
            wellbeing: draft.wellbeing,
            notes: draft.notes,
        }
    }

    /// The normalized well-being score: `Some` only when the raw value is
    /// inside the nominal 1..=10 domain. Out-of-range and missing values
    /// both read as "no score". Averages coalesce that to 0, the
    /// distribution skips it entirely; both call sites go through here so
    /// the policy lives in one place.
    pub fn score(&self) -> Option<i64> {
        self.wellbeing.filter(|s| (1..=10).contains(s))
    }

    /// Score as used by the averaging functions (missing → 0).
    pub fn score_or_zero(&self) -> i64 {
        self.score().unwrap_or(0)
    }

    /// Whether this entry's medication list contains `label` (exact match).
    pub fn has_medication(&self, label: &str) -> bool {
        self.medications.iter().any(|m| m == label)
    }
}

/// Caller-supplied payload for a new entry. The store owns identity and
/// timestamp, so drafts deliberately have neither.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub medications: Vec<String>,
    pub wellbeing: Option<i64>,
    pub notes: Option<String>,
}

/// Partial update for an existing entry. `None` fields are left untouched;
/// `id` and `timestamp` cannot be patched.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub medications: Option<Vec<String>>,
    pub wellbeing: Option<i64>,
    pub notes: Option<String>,
}
