//! In-memory flag store
//!
//! Keeps flags, their notes and history, plus a small content directory of
//! posts and users that reports can target. Notes and history are returned
//! newest first.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use flagdesk_core::{Clock, FlagsPort, SystemClock};
use flagdesk_domain::constants::{FLAG_CREATED_MARKER, HISTORY_NOTES_FIELD, NOTE_ADDED_MARKER};
use flagdesk_domain::{
    FlagId, FlagPatch, FlagRecord, FlagState, FlagType, FlagsError, HistoryAppend, HistoryEntry,
    Note, Result, Timestamp, Uid,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A reviewer notification produced by [`FlagsPort::notify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagNotification {
    pub flag_id: FlagId,
    pub recipient: Uid,
    /// Reporter
    pub from: Uid,
    pub datetime: Timestamp,
}

#[derive(Debug)]
struct StoredFlag {
    record: FlagRecord,
    notes: Vec<Note>,
    history: Vec<HistoryEntry>,
}

impl StoredFlag {
    fn push_history(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
        self.history.sort_by(|a, b| b.datetime.cmp(&a.datetime));
    }
}

#[derive(Debug, Default)]
struct StoreState {
    next_id: u64,
    posts: HashMap<String, Uid>,
    users: HashSet<Uid>,
    flags: HashMap<FlagId, StoredFlag>,
    notifications: Vec<FlagNotification>,
}

impl StoreState {
    fn flag(&self, flag_id: &FlagId) -> Result<&StoredFlag> {
        self.flags.get(flag_id).ok_or(FlagsError::NoFlag)
    }

    fn flag_mut(&mut self, flag_id: &FlagId) -> Result<&mut StoredFlag> {
        self.flags.get_mut(flag_id).ok_or(FlagsError::NoFlag)
    }
}

/// `FlagsPort` backed by process memory.
pub struct InMemoryFlagStore {
    state: RwLock<StoreState>,
    reviewers: Vec<Uid>,
    clock: Arc<dyn Clock>,
}

impl InMemoryFlagStore {
    /// Create an empty store whose `notify` addresses `reviewers`.
    pub fn new(reviewers: impl IntoIterator<Item = Uid>) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            reviewers: reviewers.into_iter().collect(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Make a post flaggable.
    pub fn register_post(&self, pid: impl Into<String>, author: Uid) {
        self.state.write().posts.insert(pid.into(), author);
    }

    /// Make a user account flaggable.
    pub fn register_user(&self, uid: Uid) {
        self.state.write().users.insert(uid);
    }

    /// Current record of a flag, if it exists.
    pub fn flag(&self, flag_id: &FlagId) -> Option<FlagRecord> {
        self.state.read().flags.get(flag_id).map(|stored| stored.record.clone())
    }

    /// Notifications produced so far, oldest first.
    pub fn notifications(&self) -> Vec<FlagNotification> {
        self.state.read().notifications.clone()
    }

    fn validate_target(
        state: &StoreState,
        uid: Uid,
        flag_type: FlagType,
        target_id: &str,
    ) -> Result<()> {
        match flag_type {
            FlagType::Post => {
                let author = state.posts.get(target_id).ok_or(FlagsError::NoPost)?;
                if *author == uid {
                    return Err(FlagsError::SelfFlag);
                }
            }
            FlagType::User => {
                let target: Uid = target_id.parse().map_err(|_| FlagsError::NoUser)?;
                if !state.users.contains(&target) {
                    return Err(FlagsError::NoUser);
                }
                if target == uid {
                    return Err(FlagsError::SelfFlag);
                }
            }
        }
        Ok(())
    }
}

fn parse_flag_type(raw: &str) -> Result<FlagType> {
    raw.parse::<FlagType>().map_err(|_| FlagsError::InvalidData)
}

#[async_trait]
impl FlagsPort for InMemoryFlagStore {
    async fn validate(&self, uid: Uid, flag_type: &str, target_id: &str) -> Result<()> {
        let flag_type = parse_flag_type(flag_type)?;
        let state = self.state.read();

        Self::validate_target(&state, uid, flag_type, target_id)?;

        let already = state.flags.values().any(|stored| {
            let record = &stored.record;
            record.uid == uid
                && record.flag_type == flag_type
                && record.target_id == target_id
                && matches!(record.state, FlagState::Open | FlagState::Wip)
        });
        if already {
            return Err(FlagsError::AlreadyFlagged);
        }
        Ok(())
    }

    async fn create(
        &self,
        flag_type: &str,
        target_id: &str,
        uid: Uid,
        reason: &str,
    ) -> Result<FlagRecord> {
        let flag_type = parse_flag_type(flag_type)?;
        let now = self.clock.now_millis();
        let mut state = self.state.write();

        state.next_id += 1;
        let record = FlagRecord {
            flag_id: FlagId::new(state.next_id.to_string()),
            flag_type,
            target_id: target_id.to_string(),
            uid,
            reason: reason.to_string(),
            state: FlagState::Open,
            assignee: None,
            datetime: now,
        };

        let mut changes = BTreeMap::new();
        changes.insert(FLAG_CREATED_MARKER.to_string(), record.reason.clone());
        let created = HistoryEntry { uid, datetime: now, changes };

        state.flags.insert(
            record.flag_id.clone(),
            StoredFlag { record: record.clone(), notes: Vec::new(), history: vec![created] },
        );
        debug!(flag_id = %record.flag_id, "flag stored");
        Ok(record)
    }

    async fn notify(&self, flag: &FlagRecord, uid: Uid) -> Result<()> {
        let now = self.clock.now_millis();
        let mut state = self.state.write();
        state.flag(&flag.flag_id)?;

        for recipient in &self.reviewers {
            state.notifications.push(FlagNotification {
                flag_id: flag.flag_id.clone(),
                recipient: *recipient,
                from: uid,
                datetime: now,
            });
        }
        info!(flag_id = %flag.flag_id, recipients = self.reviewers.len(), "reviewers notified");
        Ok(())
    }

    async fn update(&self, flag_id: &FlagId, uid: Uid, patch: &FlagPatch) -> Result<()> {
        let now = self.clock.now_millis();
        let mut state = self.state.write();
        let stored = state.flag_mut(flag_id)?;

        if patch.is_empty() {
            return Ok(());
        }
        if let Some(flag_state) = patch.state {
            stored.record.state = flag_state;
        }
        if let Some(assignee) = patch.assignee {
            stored.record.assignee = Some(assignee);
        }
        stored.push_history(HistoryEntry { uid, datetime: now, changes: patch.changes() });
        Ok(())
    }

    async fn get_history(&self, flag_id: &FlagId) -> Result<Vec<HistoryEntry>> {
        Ok(self.state.read().flag(flag_id)?.history.clone())
    }

    async fn get_note(&self, flag_id: &FlagId, datetime: Timestamp) -> Result<Note> {
        let state = self.state.read();
        state
            .flag(flag_id)?
            .notes
            .iter()
            .find(|note| note.datetime == datetime)
            .cloned()
            .ok_or(FlagsError::InvalidData)
    }

    async fn get_notes(&self, flag_id: &FlagId) -> Result<Vec<Note>> {
        Ok(self.state.read().flag(flag_id)?.notes.clone())
    }

    async fn append_note(
        &self,
        flag_id: &FlagId,
        uid: Uid,
        note: &str,
        datetime: Option<Timestamp>,
    ) -> Result<()> {
        let now = self.clock.now_millis();
        let mut state = self.state.write();
        let stored = state.flag_mut(flag_id)?;

        let existing =
            datetime.and_then(|dt| stored.notes.iter().position(|n| n.datetime == dt));
        match existing {
            Some(index) => {
                stored.notes[index].uid = uid;
                stored.notes[index].content = note.to_string();
            }
            None => {
                // Notes are keyed by datetime; never let two share one.
                let mut key = datetime.unwrap_or(now);
                while stored.notes.iter().any(|n| n.datetime == key) {
                    key += 1;
                }
                stored.notes.push(Note { uid, content: note.to_string(), datetime: key });
                stored.notes.sort_by(|a, b| b.datetime.cmp(&a.datetime));
            }
        }

        let mut changes = BTreeMap::new();
        changes.insert(HISTORY_NOTES_FIELD.to_string(), NOTE_ADDED_MARKER.to_string());
        stored.push_history(HistoryEntry { uid, datetime: now, changes });
        Ok(())
    }

    async fn delete_note(&self, flag_id: &FlagId, datetime: Timestamp) -> Result<()> {
        let mut state = self.state.write();
        let stored = state.flag_mut(flag_id)?;

        let before = stored.notes.len();
        stored.notes.retain(|note| note.datetime != datetime);
        if stored.notes.len() == before {
            return Err(FlagsError::InvalidData);
        }
        Ok(())
    }

    async fn append_history(&self, flag_id: &FlagId, uid: Uid, entry: HistoryAppend) -> Result<()> {
        let mut state = self.state.write();
        let stored = state.flag_mut(flag_id)?;
        stored.push_history(HistoryEntry { uid, datetime: entry.datetime, changes: entry.changes });
        Ok(())
    }
}
