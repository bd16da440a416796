//! Application constants
//!
//! Centralized location for domain-level constants. Marker strings are
//! translation keys resolved by the forum client.

// History markers
pub const HISTORY_NOTES_FIELD: &str = "notes";
pub const NOTE_DELETED_MARKER: &str = "[[flags:note-deleted]]";
pub const NOTE_ADDED_MARKER: &str = "[[flags:note-added]]";
pub const FLAG_CREATED_MARKER: &str = "[[flags:flag-created]]";

// Patchable field names as they appear in history entries
pub const HISTORY_STATE_FIELD: &str = "state";
pub const HISTORY_ASSIGNEE_FIELD: &str = "assignee";

// HTTP defaults
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:4568";
pub const CALLER_UID_HEADER: &str = "x-uid";
pub const DEFAULT_LOG_FILTER: &str = "info,flagdesk=debug";
