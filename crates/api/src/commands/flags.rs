//! Flag commands
//!
//! Each handler resolves the caller, decodes the body, and hands off to the
//! flag facade through [`execute_command`].

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use flagdesk_domain::{
    FlagCreateRequest, FlagId, FlagNoteDeleteRequest, FlagNoteRequest, FlagNotesView, FlagPatch,
    FlagRecord, FlagUpdateRequest, HistoryEntry, Timestamp,
};
use serde::{Deserialize, Serialize};

use super::caller::AuthenticatedCaller;
use crate::error::ApiError;
use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// Body of `POST /api/v3/flags/{flag_id}/notes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoteBody {
    pub note: String,
    /// Existing note to replace
    #[serde(default)]
    pub datetime: Option<Timestamp>,
}

pub async fn create_flag(
    State(ctx): State<Arc<AppContext>>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    body: Result<Json<FlagCreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FlagRecord>), ApiError> {
    let Json(request) = body?;

    let record = execute_command("flags::create", || ctx.flags.create(caller, request)).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_flag(
    State(ctx): State<Arc<AppContext>>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    Path(flag_id): Path<String>,
    body: Result<Json<FlagPatch>, JsonRejection>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let Json(patch) = body?;
    let request = FlagUpdateRequest { flag_id: FlagId::new(flag_id), patch };

    let history = execute_command("flags::update", || ctx.flags.update(caller, request)).await?;
    Ok(Json(history))
}

pub async fn append_flag_note(
    State(ctx): State<Arc<AppContext>>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    Path(flag_id): Path<String>,
    body: Result<Json<NoteBody>, JsonRejection>,
) -> Result<Json<FlagNotesView>, ApiError> {
    let Json(NoteBody { note, datetime }) = body?;
    let request = FlagNoteRequest { flag_id: FlagId::new(flag_id), datetime, note };

    let view =
        execute_command("flags::append_note", || ctx.flags.append_note(caller, request)).await?;
    Ok(Json(view))
}

pub async fn delete_flag_note(
    State(ctx): State<Arc<AppContext>>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    path: Result<Path<(String, Timestamp)>, PathRejection>,
) -> Result<Json<FlagNotesView>, ApiError> {
    let Path((flag_id, datetime)) = path?;
    let request = FlagNoteDeleteRequest { flag_id: FlagId::new(flag_id), datetime };

    let view =
        execute_command("flags::delete_note", || ctx.flags.delete_note(caller, request)).await?;
    Ok(Json(view))
}
