use crate::api::extract::{empty_as_none, ApiJson, ApiQuery};
use crate::api::handlers::{found, PageParams};
use crate::api::AppState;
use crate::error::Result;
use crate::models::*;
use crate::state::NoteFilter;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct NoteListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub topic_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub source_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub author: Option<String>,
}

pub async fn list_notes(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PageParams>,
    ApiQuery(params): ApiQuery<NoteListParams>,
) -> Result<Json<Vec<Note>>> {
    let filter = NoteFilter {
        topic_id: params.topic_id,
        source_id: params.source_id,
        author: params.author,
        keyword: None,
    };

    let notes = state
        .store
        .list_notes(&filter, page.pagination(state.search.config())?)
        .await?;
    Ok(Json(notes))
}

pub async fn create_note(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewNote>,
) -> Result<(StatusCode, Json<Note>)> {
    payload.validate()?;

    let note = state.store.insert_note(Note::new(payload)).await?;
    tracing::info!(note_id = note.id, "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn get_note(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Note>> {
    let note = found(state.store.get_note(id).await?, "Note")?;
    Ok(Json(note))
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(update): ApiJson<NoteUpdate>,
) -> Result<Json<Note>> {
    update.validate()?;

    let mut note = found(state.store.get_note(id).await?, "Note")?;
    note.apply(update);
    state.store.update_note(&note).await?;

    Ok(Json(note))
}

pub async fn delete_note(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    state.store.delete_note(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
