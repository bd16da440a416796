//! Request shapes accepted by the flag facade
//!
//! All requests deny unknown keys. Control fields such as the flag id are
//! kept apart from data fields so they can never leak into a storage patch.

use serde::{Deserialize, Serialize};

use super::flag::FlagPatch;
use super::ids::{FlagId, Timestamp};

/// Report a post or user.
///
/// Fields are optional at the wire level so that a missing field surfaces as
/// `InvalidData` from the facade rather than as a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagCreateRequest {
    #[serde(rename = "type", default)]
    pub flag_type: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl FlagCreateRequest {
    pub fn new(
        flag_type: impl Into<String>,
        id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self { flag_type: Some(flag_type.into()), id: Some(id.into()), reason: Some(reason.into()) }
    }

    /// `(type, id, reason)` when every field is present and non-empty.
    pub fn required<'a>(&'a self) -> Option<(&'a str, &'a str, &'a str)> {
        let present = |field: &'a Option<String>| field.as_deref().filter(|value| !value.is_empty());
        Some((present(&self.flag_type)?, present(&self.id)?, present(&self.reason)?))
    }
}

/// Change the state or assignee of a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FlagUpdateRequest {
    pub flag_id: FlagId,
    #[serde(default)]
    pub patch: FlagPatch,
}

/// Add a note to a flag, or replace one of the caller's own notes when
/// `datetime` names an existing note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FlagNoteRequest {
    pub flag_id: FlagId,
    #[serde(default)]
    pub datetime: Option<Timestamp>,
    pub note: String,
}

/// Remove one note from a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FlagNoteDeleteRequest {
    pub flag_id: FlagId,
    pub datetime: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_requires_all_fields() {
        assert_eq!(FlagCreateRequest::new("post", "5", "spam").required(), Some(("post", "5", "spam")));

        let missing_reason: FlagCreateRequest =
            serde_json::from_str(r#"{"type":"post","id":"5"}"#).unwrap();
        assert!(missing_reason.required().is_none());

        let empty_type = FlagCreateRequest::new("", "5", "spam");
        assert!(empty_type.required().is_none());
    }

    #[test]
    fn note_request_uses_camel_case() {
        let request: FlagNoteRequest =
            serde_json::from_str(r#"{"flagId":"2","note":"looks fine"}"#).unwrap();
        assert_eq!(request.flag_id.as_str(), "2");
        assert!(request.datetime.is_none());

        assert!(serde_json::from_str::<FlagNoteRequest>(r#"{"flagId":"2","note":"x","pid":1}"#)
            .is_err());
    }
}
