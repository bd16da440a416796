//! Domain types and models
//!
//! Flags, notes and history entries are owned by the flag store; the facade
//! only passes them through. Request types are the closed input shapes the
//! facade accepts.

pub mod flag;
pub mod ids;
pub mod note;
pub mod request;

pub use flag::{FlagPatch, FlagRecord, FlagState, FlagType};
pub use ids::{Caller, FlagId, Timestamp, Uid};
pub use note::{FlagNotesView, HistoryAppend, HistoryEntry, Note};
pub use request::{FlagCreateRequest, FlagNoteDeleteRequest, FlagNoteRequest, FlagUpdateRequest};
