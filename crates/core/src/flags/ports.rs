//! Port interface for the flag store
//!
//! The flag store owns flag records, notes, history and notification
//! fan-out. The facade never touches storage directly; every read and
//! mutation goes through this trait.
//!
//! # Error contract
//!
//! - `get_note` fails with [`FlagsError::InvalidData`] when no note exists at
//!   the given timestamp. The facade relies on this to tell "no prior note"
//!   apart from real failures.
//! - Mutations on an unknown flag fail with [`FlagsError::NoFlag`].
//!
//! [`FlagsError::InvalidData`]: flagdesk_domain::FlagsError::InvalidData
//! [`FlagsError::NoFlag`]: flagdesk_domain::FlagsError::NoFlag

use async_trait::async_trait;
use flagdesk_domain::{
    FlagId, FlagPatch, FlagRecord, HistoryAppend, HistoryEntry, Note, Result, Timestamp, Uid,
};

/// Trait for flag persistence, validation and notification
#[async_trait]
pub trait FlagsPort: Send + Sync {
    /// Check that `uid` may flag the target (target exists, not a duplicate,
    /// not self-reporting).
    async fn validate(&self, uid: Uid, flag_type: &str, target_id: &str) -> Result<()>;

    /// Create a new flag and return the stored record
    async fn create(
        &self,
        flag_type: &str,
        target_id: &str,
        uid: Uid,
        reason: &str,
    ) -> Result<FlagRecord>;

    /// Notify reviewers about a new flag raised by `uid`
    async fn notify(&self, flag: &FlagRecord, uid: Uid) -> Result<()>;

    /// Apply a patch to a flag on behalf of `uid`
    async fn update(&self, flag_id: &FlagId, uid: Uid, patch: &FlagPatch) -> Result<()>;

    /// Full audit log of a flag, newest first
    async fn get_history(&self, flag_id: &FlagId) -> Result<Vec<HistoryEntry>>;

    /// Single note keyed by its timestamp
    async fn get_note(&self, flag_id: &FlagId, datetime: Timestamp) -> Result<Note>;

    /// All notes of a flag, newest first
    async fn get_notes(&self, flag_id: &FlagId) -> Result<Vec<Note>>;

    /// Add a note; an existing note at `datetime` is replaced
    async fn append_note(
        &self,
        flag_id: &FlagId,
        uid: Uid,
        note: &str,
        datetime: Option<Timestamp>,
    ) -> Result<()>;

    /// Remove the note keyed by `datetime`
    async fn delete_note(&self, flag_id: &FlagId, datetime: Timestamp) -> Result<()>;

    /// Append an entry to the audit log
    async fn append_history(&self, flag_id: &FlagId, uid: Uid, entry: HistoryAppend)
        -> Result<()>;
}
