use crate::api::extract::{empty_as_none, ApiJson, ApiQuery};
use crate::api::handlers::topics::ensure_topic;
use crate::api::handlers::{found, PageParams};
use crate::api::AppState;
use crate::error::Result;
use crate::models::*;
use crate::state::InsightFilter;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct InsightListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub topic_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<InsightStatus>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub confidence: Option<Level>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub impact: Option<Level>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub author: Option<String>,
}

/// List insights
pub async fn list_insights(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PageParams>,
    ApiQuery(params): ApiQuery<InsightListParams>,
) -> Result<Json<Vec<Insight>>> {
    let filter = InsightFilter {
        topic_id: params.topic_id,
        status: params.status,
        confidence: params.confidence,
        impact: params.impact,
        author: params.author,
        keyword: None,
    };

    let insights = state
        .store
        .list_insights(&filter, page.pagination(state.search.config())?)
        .await?;
    Ok(Json(insights))
}

/// Create an insight under an existing topic
pub async fn create_insight(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewInsight>,
) -> Result<(StatusCode, Json<Insight>)> {
    payload.validate()?;
    ensure_topic(&state, payload.topic_id).await?;

    let insight = state.store.insert_insight(Insight::new(payload)).await?;
    tracing::info!(insight_id = insight.id, topic_id = insight.topic_id, "Insight created");

    Ok((StatusCode::CREATED, Json(insight)))
}

pub async fn get_insight(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Insight>> {
    let insight = found(state.store.get_insight(id).await?, "Insight")?;
    Ok(Json(insight))
}

/// Partially update an insight; moving it re-checks the target topic
pub async fn update_insight(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(update): ApiJson<InsightUpdate>,
) -> Result<Json<Insight>> {
    update.validate()?;

    let mut insight = found(state.store.get_insight(id).await?, "Insight")?;
    if let Some(topic_id) = update.topic_id.filter(|t| *t != insight.topic_id) {
        ensure_topic(&state, topic_id).await?;
    }

    insight.apply(update);
    state.store.update_insight(&insight).await?;

    Ok(Json(insight))
}

pub async fn delete_insight(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    state.store.delete_insight(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
