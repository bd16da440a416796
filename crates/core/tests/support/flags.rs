//! Recording mock for `FlagsPort`
//!
//! Every call is appended to an in-memory log. Responses are canned and can
//! be configured per test through the builder methods.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use flagdesk_core::FlagsPort;
use flagdesk_domain::{
    FlagId, FlagPatch, FlagRecord, FlagState, FlagType, FlagsError, HistoryAppend, HistoryEntry,
    Note, Result as DomainResult, Timestamp, Uid,
};
use parking_lot::Mutex;
use tokio::sync::{Barrier, Notify};

/// One recorded port invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Validate { uid: Uid, flag_type: String, target_id: String },
    Create { flag_type: String, target_id: String, uid: Uid, reason: String },
    Notify { flag_id: FlagId, uid: Uid },
    Update { flag_id: FlagId, uid: Uid, patch: FlagPatch },
    GetHistory(FlagId),
    GetNote(FlagId, Timestamp),
    GetNotes(FlagId),
    AppendNote { flag_id: FlagId, uid: Uid, note: String, datetime: Option<Timestamp> },
    DeleteNote(FlagId, Timestamp),
    AppendHistory { flag_id: FlagId, uid: Uid, entry: HistoryAppend },
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::Create { .. }
                | Self::Update { .. }
                | Self::AppendNote { .. }
                | Self::DeleteNote(..)
                | Self::AppendHistory { .. }
        )
    }
}

/// Recording `FlagsPort` with canned responses.
#[derive(Default)]
pub struct RecordingFlags {
    calls: Mutex<Vec<Call>>,
    validate_error: Option<FlagsError>,
    notify_error: Option<FlagsError>,
    notify_gate: Option<Arc<Notify>>,
    note: Option<DomainResult<Note>>,
    notes: Vec<Note>,
    history: Vec<HistoryEntry>,
    notes_delay: Option<Duration>,
    history_delay: Option<Duration>,
    read_barrier: Option<Arc<Barrier>>,
}

impl RecordingFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail `validate` with the given error.
    pub fn with_validate_error(mut self, err: FlagsError) -> Self {
        self.validate_error = Some(err);
        self
    }

    /// Fail `notify` with the given error.
    pub fn with_notify_error(mut self, err: FlagsError) -> Self {
        self.notify_error = Some(err);
        self
    }

    /// Block `notify` until the gate is notified.
    pub fn with_notify_gate(mut self, gate: Arc<Notify>) -> Self {
        self.notify_gate = Some(gate);
        self
    }

    /// Response for `get_note`.
    pub fn with_note(mut self, note: DomainResult<Note>) -> Self {
        self.note = Some(note);
        self
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_history(mut self, history: Vec<HistoryEntry>) -> Self {
        self.history = history;
        self
    }

    pub fn with_read_delays(mut self, notes: Duration, history: Duration) -> Self {
        self.notes_delay = Some(notes);
        self.history_delay = Some(history);
        self
    }

    /// Make `get_notes` and `get_history` wait for each other. Sequential
    /// reads would never get past the barrier.
    pub fn with_read_barrier(mut self) -> Self {
        self.read_barrier = Some(Arc::new(Barrier::new(2)));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    async fn read_gate(&self, delay: Option<Duration>) {
        if let Some(barrier) = &self.read_barrier {
            barrier.wait().await;
        }
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

pub fn note(uid: i64, content: &str, datetime: Timestamp) -> Note {
    Note { uid: Uid(uid), content: content.to_string(), datetime }
}

pub fn history(uid: i64, datetime: Timestamp, field: &str, value: &str) -> HistoryEntry {
    HistoryEntry {
        uid: Uid(uid),
        datetime,
        changes: [(field.to_string(), value.to_string())].into_iter().collect(),
    }
}

#[async_trait]
impl FlagsPort for RecordingFlags {
    async fn validate(&self, uid: Uid, flag_type: &str, target_id: &str) -> DomainResult<()> {
        self.record(Call::Validate {
            uid,
            flag_type: flag_type.to_string(),
            target_id: target_id.to_string(),
        });
        match &self.validate_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn create(
        &self,
        flag_type: &str,
        target_id: &str,
        uid: Uid,
        reason: &str,
    ) -> DomainResult<FlagRecord> {
        self.record(Call::Create {
            flag_type: flag_type.to_string(),
            target_id: target_id.to_string(),
            uid,
            reason: reason.to_string(),
        });
        Ok(FlagRecord {
            flag_id: FlagId::new("1"),
            flag_type: flag_type.parse::<FlagType>().map_err(|_| FlagsError::InvalidData)?,
            target_id: target_id.to_string(),
            uid,
            reason: reason.to_string(),
            state: FlagState::Open,
            assignee: None,
            datetime: 1_700_000_000_000,
        })
    }

    async fn notify(&self, flag: &FlagRecord, uid: Uid) -> DomainResult<()> {
        if let Some(gate) = &self.notify_gate {
            gate.notified().await;
        }
        self.record(Call::Notify { flag_id: flag.flag_id.clone(), uid });
        match &self.notify_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn update(&self, flag_id: &FlagId, uid: Uid, patch: &FlagPatch) -> DomainResult<()> {
        self.record(Call::Update { flag_id: flag_id.clone(), uid, patch: patch.clone() });
        Ok(())
    }

    async fn get_history(&self, flag_id: &FlagId) -> DomainResult<Vec<HistoryEntry>> {
        self.record(Call::GetHistory(flag_id.clone()));
        self.read_gate(self.history_delay).await;
        Ok(self.history.clone())
    }

    async fn get_note(&self, flag_id: &FlagId, datetime: Timestamp) -> DomainResult<Note> {
        self.record(Call::GetNote(flag_id.clone(), datetime));
        self.note.clone().unwrap_or(Err(FlagsError::InvalidData))
    }

    async fn get_notes(&self, flag_id: &FlagId) -> DomainResult<Vec<Note>> {
        self.record(Call::GetNotes(flag_id.clone()));
        self.read_gate(self.notes_delay).await;
        Ok(self.notes.clone())
    }

    async fn append_note(
        &self,
        flag_id: &FlagId,
        uid: Uid,
        note: &str,
        datetime: Option<Timestamp>,
    ) -> DomainResult<()> {
        self.record(Call::AppendNote {
            flag_id: flag_id.clone(),
            uid,
            note: note.to_string(),
            datetime,
        });
        Ok(())
    }

    async fn delete_note(&self, flag_id: &FlagId, datetime: Timestamp) -> DomainResult<()> {
        self.record(Call::DeleteNote(flag_id.clone(), datetime));
        Ok(())
    }

    async fn append_history(
        &self,
        flag_id: &FlagId,
        uid: Uid,
        entry: HistoryAppend,
    ) -> DomainResult<()> {
        self.record(Call::AppendHistory { flag_id: flag_id.clone(), uid, entry });
        Ok(())
    }
}
