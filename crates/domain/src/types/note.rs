//! Notes and history entries attached to a flag

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::{Timestamp, Uid};
use crate::constants::{HISTORY_NOTES_FIELD, NOTE_DELETED_MARKER};

/// A timestamped annotation left by a reviewer.
///
/// `datetime` doubles as the note key within its flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Owner
    pub uid: Uid,
    pub content: String,
    pub datetime: Timestamp,
}

/// One audit log entry of a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub uid: Uid,
    pub datetime: Timestamp,
    pub changes: BTreeMap<String, String>,
}

/// A history entry to be appended; the store stamps the acting uid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryAppend {
    pub changes: BTreeMap<String, String>,
    pub datetime: Timestamp,
}

impl HistoryAppend {
    /// Entry recording that a note was removed at `datetime`.
    pub fn note_deleted(datetime: Timestamp) -> Self {
        let mut changes = BTreeMap::new();
        changes.insert(HISTORY_NOTES_FIELD.to_string(), NOTE_DELETED_MARKER.to_string());
        Self { changes, datetime }
    }
}

/// Notes and history of one flag, returned after note mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagNotesView {
    pub notes: Vec<Note>,
    pub history: Vec<HistoryEntry>,
}
