use crate::api::extract::{empty_as_none, ApiJson, ApiQuery};
use crate::api::handlers::{found, PageParams};
use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::models::*;
use crate::state::{InsightFilter, SourceFilter, TopicFilter};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct TopicListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<TopicStatus>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<TopicCategory>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub owner: Option<String>,
}

/// List topics
pub async fn list_topics(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PageParams>,
    ApiQuery(params): ApiQuery<TopicListParams>,
) -> Result<Json<Vec<Topic>>> {
    let filter = TopicFilter {
        status: params.status,
        category: params.category,
        owner: params.owner,
    };

    let topics = state
        .store
        .list_topics(&filter, page.pagination(state.search.config())?)
        .await?;
    Ok(Json(topics))
}

/// Create a topic
pub async fn create_topic(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewTopic>,
) -> Result<(StatusCode, Json<Topic>)> {
    payload.validate()?;

    let topic = state.store.insert_topic(Topic::new(payload)).await?;
    tracing::info!(topic_id = topic.id, name = %topic.name, "Topic created");

    Ok((StatusCode::CREATED, Json(topic)))
}

/// Get a topic by ID
pub async fn get_topic(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Topic>> {
    let topic = found(state.store.get_topic(id).await?, "Topic")?;
    Ok(Json(topic))
}

/// Partially update a topic
pub async fn update_topic(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(update): ApiJson<TopicUpdate>,
) -> Result<Json<Topic>> {
    update.validate()?;

    let mut topic = found(state.store.get_topic(id).await?, "Topic")?;
    topic.apply(update);
    state.store.update_topic(&topic).await?;

    Ok(Json(topic))
}

/// Delete a topic
pub async fn delete_topic(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    state.store.delete_topic(id).await?;
    tracing::info!(topic_id = id, "Topic deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct TopicSourcesParams {
    #[serde(default, rename = "type", deserialize_with = "empty_as_none")]
    pub source_type: Option<SourceType>,
}

/// Sources attached to a topic
pub async fn list_topic_sources(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiQuery(page): ApiQuery<PageParams>,
    ApiQuery(params): ApiQuery<TopicSourcesParams>,
) -> Result<Json<Vec<Source>>> {
    ensure_topic(&state, id).await?;

    let filter = SourceFilter {
        topic_id: Some(id),
        source_type: params.source_type,
        ..Default::default()
    };

    let sources = state
        .store
        .list_sources(&filter, page.pagination(state.search.config())?)
        .await?;
    Ok(Json(sources))
}

#[derive(Debug, Deserialize)]
pub struct TopicInsightsParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<InsightStatus>,
}

/// Insights recorded against a topic
pub async fn list_topic_insights(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiQuery(page): ApiQuery<PageParams>,
    ApiQuery(params): ApiQuery<TopicInsightsParams>,
) -> Result<Json<Vec<Insight>>> {
    ensure_topic(&state, id).await?;

    let filter = InsightFilter {
        topic_id: Some(id),
        status: params.status,
        ..Default::default()
    };

    let insights = state
        .store
        .list_insights(&filter, page.pagination(state.search.config())?)
        .await?;
    Ok(Json(insights))
}

pub(crate) async fn ensure_topic(state: &AppState, id: i64) -> Result<()> {
    if state.store.topic_exists(id).await? {
        Ok(())
    } else {
        Err(AppError::not_found("Topic"))
    }
}
