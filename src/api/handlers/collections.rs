use crate::api::extract::{empty_as_none, ApiJson, ApiQuery};
use crate::api::handlers::{found, PageParams};
use crate::api::AppState;
use crate::error::Result;
use crate::models::*;
use crate::state::CollectionFilter;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct CollectionListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub shared: Option<bool>,
}

pub async fn list_collections(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PageParams>,
    ApiQuery(params): ApiQuery<CollectionListParams>,
) -> Result<Json<Vec<Collection>>> {
    let filter = CollectionFilter {
        created_by: params.created_by,
        shared: params.shared,
    };

    let collections = state
        .store
        .list_collections(&filter, page.pagination(state.search.config())?)
        .await?;
    Ok(Json(collections))
}

pub async fn create_collection(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewCollection>,
) -> Result<(StatusCode, Json<Collection>)> {
    payload.validate()?;

    let collection = state.store.insert_collection(Collection::new(payload)).await?;
    tracing::info!(collection_id = collection.id, "Collection created");

    Ok((StatusCode::CREATED, Json(collection)))
}

pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Collection>> {
    let collection = found(state.store.get_collection(id).await?, "Collection")?;
    Ok(Json(collection))
}

pub async fn update_collection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(update): ApiJson<CollectionUpdate>,
) -> Result<Json<Collection>> {
    update.validate()?;

    let mut collection = found(state.store.get_collection(id).await?, "Collection")?;
    collection.apply(update);
    state.store.update_collection(&collection).await?;

    Ok(Json(collection))
}

pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.store.delete_collection(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
