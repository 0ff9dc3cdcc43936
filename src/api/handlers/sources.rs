use crate::api::extract::{empty_as_none, ApiJson, ApiQuery};
use crate::api::handlers::{found, PageParams};
use crate::api::AppState;
use crate::error::Result;
use crate::models::*;
use crate::state::SourceFilter;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct SourceListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub topic_id: Option<i64>,
    #[serde(default, rename = "type", deserialize_with = "empty_as_none")]
    pub source_type: Option<SourceType>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub credibility: Option<Level>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub added_by: Option<String>,
}

/// List sources
pub async fn list_sources(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PageParams>,
    ApiQuery(params): ApiQuery<SourceListParams>,
) -> Result<Json<Vec<Source>>> {
    let filter = SourceFilter {
        topic_id: params.topic_id,
        source_type: params.source_type,
        credibility: params.credibility,
        added_by: params.added_by,
        ..Default::default()
    };

    let sources = state
        .store
        .list_sources(&filter, page.pagination(state.search.config())?)
        .await?;
    Ok(Json(sources))
}

/// Create a source
pub async fn create_source(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewSource>,
) -> Result<(StatusCode, Json<Source>)> {
    payload.validate()?;

    let source = state.store.insert_source(Source::new(payload)).await?;
    tracing::info!(source_id = source.id, topic_id = ?source.topic_id, "Source created");

    Ok((StatusCode::CREATED, Json(source)))
}

/// Get a source by ID
pub async fn get_source(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Source>> {
    let source = found(state.store.get_source(id).await?, "Source")?;
    Ok(Json(source))
}

/// Partially update a source
pub async fn update_source(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(update): ApiJson<SourceUpdate>,
) -> Result<Json<Source>> {
    update.validate()?;

    let mut source = found(state.store.get_source(id).await?, "Source")?;
    source.apply(update);
    state.store.update_source(&source).await?;

    Ok(Json(source))
}

/// Delete a source
pub async fn delete_source(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    state.store.delete_source(id).await?;
    tracing::info!(source_id = id, "Source deleted");
    Ok(StatusCode::NO_CONTENT)
}
