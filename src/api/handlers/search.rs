use crate::analytics::DashboardSnapshot;
use crate::api::extract::ApiQuery;
use crate::api::handlers::PageParams;
use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::search::SearchResponse;
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Keyword search across sources, notes and insights
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PageParams>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let query = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::Validation("Query parameter 'q' is required".to_string()))?;
    let pagination = page.pagination(state.search.config())?;

    let response = state
        .search
        .search(&query, pagination.offset, pagination.limit)
        .await?;
    Ok(Json(response))
}

/// Dashboard snapshot
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardSnapshot>> {
    Ok(Json(state.dashboard.snapshot().await?))
}
