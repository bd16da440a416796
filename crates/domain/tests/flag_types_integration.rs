//! Integration tests for flag domain types
//!
//! Exercises the wire shapes exchanged between the HTTP layer and the
//! facade.

use flagdesk_domain::{
    Config, FlagCreateRequest, FlagNotesView, FlagPatch, FlagState, FlagUpdateRequest,
    HistoryAppend, HistoryEntry, Note, Uid,
};

// ============================================================================
// Request Shapes
// ============================================================================

#[test]
fn test_update_request_keeps_flag_id_out_of_patch() {
    let request: FlagUpdateRequest = serde_json::from_str(
        r#"{"flagId":"8","patch":{"state":"resolved","assignee":"3"}}"#,
    )
    .unwrap();

    assert_eq!(request.flag_id.as_str(), "8");
    assert_eq!(request.patch.state, Some(FlagState::Resolved));
    assert_eq!(request.patch.assignee, Some(Uid(3)));

    let patch_json = serde_json::to_value(&request.patch).unwrap();
    assert!(patch_json.get("flagId").is_none());
}

#[test]
fn test_create_request_rejects_extra_keys() {
    let result = serde_json::from_str::<FlagCreateRequest>(
        r#"{"type":"post","id":"1","reason":"spam","uid":99}"#,
    );
    assert!(result.is_err(), "callers must not smuggle a uid through the body");
}

#[test]
fn test_empty_patch_round_trips_as_empty_object() {
    let json = serde_json::to_string(&FlagPatch::default()).unwrap();
    assert_eq!(json, "{}");
}

// ============================================================================
// Response Shapes
// ============================================================================

#[test]
fn test_notes_view_serializes_both_lists() {
    let view = FlagNotesView {
        notes: vec![Note { uid: Uid(2), content: "checked".into(), datetime: 20 }],
        history: vec![HistoryEntry {
            uid: Uid(2),
            datetime: 21,
            changes: HistoryAppend::note_deleted(21).changes,
        }],
    };

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["notes"][0]["content"], "checked");
    assert_eq!(json["history"][0]["changes"]["notes"], "[[flags:note-deleted]]");
}

#[test]
fn test_config_defaults_parse_without_logging_section() {
    let config: Config = serde_json::from_str(
        r#"{"server":{"bind_addr":"0.0.0.0:9000"},"moderation":{"privileged_uids":[1,"2"]}}"#,
    )
    .unwrap();

    assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
    assert_eq!(config.moderation.privileged_uids, vec![Uid(1), Uid(2)]);
    assert!(!config.logging.json);
}
