//! Flag API facade - core business logic
//!
//! Each operation follows the same shape: validate input, authorize the
//! caller, delegate to the flag store, shape the response. All state lives
//! behind the ports.

use std::sync::Arc;

use flagdesk_domain::{
    Caller, FlagCreateRequest, FlagId, FlagNoteDeleteRequest, FlagNoteRequest, FlagNotesView,
    FlagRecord, FlagUpdateRequest, FlagsError, HistoryAppend, HistoryEntry, Result, Timestamp,
    Uid,
};
use tracing::{debug, info, instrument, warn};

use super::ports::FlagsPort;
use crate::clock::{Clock, SystemClock};
use crate::tasks::DetachedTasks;
use crate::user::ports::PrivilegesPort;

/// Flag API facade
pub struct FlagService {
    flags: Arc<dyn FlagsPort>,
    privileges: Arc<dyn PrivilegesPort>,
    clock: Arc<dyn Clock>,
    notifications: DetachedTasks,
}

impl FlagService {
    /// Create a new flag service
    pub fn new(flags: Arc<dyn FlagsPort>, privileges: Arc<dyn PrivilegesPort>) -> Self {
        Self {
            flags,
            privileges,
            clock: Arc::new(SystemClock),
            notifications: DetachedTasks::new("flag_notifications"),
        }
    }

    /// Replace the clock used to stamp history entries
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Report a post or user.
    ///
    /// Reviewers are notified in the background; the returned record does
    /// not wait for, or depend on, that notification.
    #[instrument(skip(self, request), fields(uid = %caller.uid))]
    pub async fn create(&self, caller: Caller, request: FlagCreateRequest) -> Result<FlagRecord> {
        let Some((flag_type, target_id, reason)) = request.required() else {
            debug!("flag create rejected: missing required field");
            return Err(FlagsError::InvalidData);
        };

        self.flags.validate(caller.uid, flag_type, target_id).await?;
        let record = self.flags.create(flag_type, target_id, caller.uid, reason).await?;
        info!(flag_id = %record.flag_id, flag_type, target_id, "flag_created");

        self.dispatch_notification(record.clone(), caller.uid);
        Ok(record)
    }

    /// Change a flag's state or assignee and return its history.
    #[instrument(skip(self, request), fields(uid = %caller.uid, flag_id = %request.flag_id))]
    pub async fn update(
        &self,
        caller: Caller,
        request: FlagUpdateRequest,
    ) -> Result<Vec<HistoryEntry>> {
        self.ensure_privileged(caller.uid).await?;

        let FlagUpdateRequest { flag_id, patch } = request;
        self.flags.update(&flag_id, caller.uid, &patch).await?;
        info!(changes = ?patch.changes(), "flag_updated");

        self.flags.get_history(&flag_id).await
    }

    /// Add a note, or replace one of the caller's own notes when the request
    /// names an existing `datetime`.
    #[instrument(skip(self, request), fields(uid = %caller.uid, flag_id = %request.flag_id))]
    pub async fn append_note(
        &self,
        caller: Caller,
        request: FlagNoteRequest,
    ) -> Result<FlagNotesView> {
        self.ensure_privileged(caller.uid).await?;

        if let Some(datetime) = request.datetime {
            self.ensure_prior_note_owner(&request.flag_id, datetime, caller.uid).await?;
        }

        self.flags
            .append_note(&request.flag_id, caller.uid, &request.note, request.datetime)
            .await?;
        info!(datetime = ?request.datetime, "flag_note_appended");

        self.notes_view(&request.flag_id).await
    }

    /// Remove one of the caller's own notes and record the removal in the
    /// flag history.
    ///
    /// Ownership is the only check here; there is no privilege gate.
    #[instrument(skip(self, request), fields(uid = %caller.uid, flag_id = %request.flag_id))]
    pub async fn delete_note(
        &self,
        caller: Caller,
        request: FlagNoteDeleteRequest,
    ) -> Result<FlagNotesView> {
        let FlagNoteDeleteRequest { flag_id, datetime } = request;

        let note = self.flags.get_note(&flag_id, datetime).await?;
        if note.uid != caller.uid {
            warn!(owner = %note.uid, datetime, "note delete rejected: caller is not the owner");
            return Err(FlagsError::NoPrivileges);
        }

        self.flags.delete_note(&flag_id, datetime).await?;
        let deleted_at = self.clock.now_millis();
        self.flags
            .append_history(&flag_id, caller.uid, HistoryAppend::note_deleted(deleted_at))
            .await?;
        info!(datetime, deleted_at, "flag_note_deleted");

        self.notes_view(&flag_id).await
    }

    /// Number of notifications still being delivered
    pub fn pending_notifications(&self) -> usize {
        self.notifications.in_flight()
    }

    /// Wait for in-flight notifications to finish
    pub async fn shutdown(&self) {
        info!(pending = self.notifications.in_flight(), "draining flag notifications");
        self.notifications.drain().await;
    }

    fn dispatch_notification(&self, record: FlagRecord, uid: Uid) {
        let flags = Arc::clone(&self.flags);
        self.notifications.spawn(async move {
            match flags.notify(&record, uid).await {
                Ok(()) => debug!(flag_id = %record.flag_id, "flag_notification_sent"),
                Err(err) => {
                    warn!(flag_id = %record.flag_id, error = %err, "flag notification failed");
                }
            }
        });
    }

    async fn ensure_privileged(&self, uid: Uid) -> Result<()> {
        if self.privileges.is_privileged(uid).await? {
            Ok(())
        } else {
            debug!(%uid, "caller lacks moderation privileges");
            Err(FlagsError::NoPrivileges)
        }
    }

    /// Best-effort ownership check before a note edit. A missing note is not
    /// an error: the append simply creates it.
    async fn ensure_prior_note_owner(
        &self,
        flag_id: &FlagId,
        datetime: Timestamp,
        uid: Uid,
    ) -> Result<()> {
        match self.flags.get_note(flag_id, datetime).await {
            Ok(note) if note.uid != uid => {
                warn!(owner = %note.uid, datetime, "note edit rejected: caller is not the owner");
                Err(FlagsError::NoPrivileges)
            }
            Ok(_) => Ok(()),
            Err(err) if err.is_invalid_data() => {
                debug!(datetime, "no prior note at datetime");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    async fn notes_view(&self, flag_id: &FlagId) -> Result<FlagNotesView> {
        let (notes, history) =
            tokio::try_join!(self.flags.get_notes(flag_id), self.flags.get_history(flag_id))?;
        Ok(FlagNotesView { notes, history })
    }
}
