//! Flag records and patches

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::{FlagId, Timestamp, Uid};
use crate::constants::{HISTORY_ASSIGNEE_FIELD, HISTORY_STATE_FIELD};
use crate::impl_status_conversions;

/// What a flag reports: a post or a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagType {
    Post,
    User,
}

impl_status_conversions!(FlagType {
    Post => "post",
    User => "user",
});

/// Review state of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagState {
    #[default]
    Open,
    Wip,
    Resolved,
    Rejected,
}

impl_status_conversions!(FlagState {
    Open => "open",
    Wip => "wip",
    Resolved => "resolved",
    Rejected => "rejected",
});

/// A moderation report as stored by the flag store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagRecord {
    pub flag_id: FlagId,
    #[serde(rename = "type")]
    pub flag_type: FlagType,
    pub target_id: String,
    /// Reporter
    pub uid: Uid,
    pub reason: String,
    pub state: FlagState,
    pub assignee: Option<Uid>,
    pub datetime: Timestamp,
}

/// Fields a privileged caller may change on a flag.
///
/// The field set is closed: unknown keys (including a stray `flagId`) are
/// rejected during deserialization instead of being forwarded to storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<FlagState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Uid>,
}

impl FlagPatch {
    pub fn is_empty(&self) -> bool {
        self.state.is_none() && self.assignee.is_none()
    }

    /// Field map as recorded in a history entry.
    pub fn changes(&self) -> BTreeMap<String, String> {
        let mut changes = BTreeMap::new();
        if let Some(state) = self.state {
            changes.insert(HISTORY_STATE_FIELD.to_string(), state.to_string());
        }
        if let Some(assignee) = self.assignee {
            changes.insert(HISTORY_ASSIGNEE_FIELD.to_string(), assignee.to_string());
        }
        changes
    }
}
