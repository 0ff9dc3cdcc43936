//! Main search service implementation

use crate::config::SearchConfig;
use crate::error::{AppError, Result};
use crate::search::hit::{SearchHit, SearchResponse};
use crate::state::{InsightFilter, NoteFilter, Pagination, ResearchStore, SourceFilter};
use std::sync::Arc;

/// Scans the record store for keyword matches
#[derive(Clone)]
pub struct KeywordSearchEngine {
    store: Arc<dyn ResearchStore>,
    config: SearchConfig,
}

impl KeywordSearchEngine {
    pub fn new(store: Arc<dyn ResearchStore>, config: SearchConfig) -> Self {
        Self {
            store,
            config: config.normalized(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search sources, notes and insights for `query`.
    ///
    /// Returns every match count in `total` and the `[offset, offset + limit)`
    /// window of the ranked matches in `results`.
    pub async fn search(&self, query: &str, offset: usize, limit: usize) -> Result<SearchResponse> {
        if query.is_empty() {
            return Err(AppError::Validation("Search query must not be empty".to_string()));
        }
        if limit == 0 || limit > self.config.max_limit {
            return Err(AppError::Validation(format!(
                "limit must be between 1 and {}",
                self.config.max_limit
            )));
        }

        let sources = self
            .store
            .list_sources(&SourceFilter::keyword(query), Pagination::all())
            .await?;
        let notes = self
            .store
            .list_notes(&NoteFilter::keyword(query), Pagination::all())
            .await?;
        let insights = self
            .store
            .list_insights(&InsightFilter::keyword(query), Pagination::all())
            .await?;

        let mut hits: Vec<SearchHit> = Vec::with_capacity(sources.len() + notes.len() + insights.len());
        hits.extend(sources.into_iter().map(SearchHit::from));
        hits.extend(notes.into_iter().map(SearchHit::from));
        hits.extend(insights.into_iter().map(SearchHit::from));
        hits.sort_by(SearchHit::rank);

        let total = hits.len() as u64;
        let results = Pagination::new(offset, limit).apply(hits);

        tracing::debug!(query, total, returned = results.len(), "Search completed");

        Ok(SearchResponse {
            query: query.to_string(),
            total,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;
    use crate::search::ResultType;
    use crate::state::InMemoryStore;

    async fn engine_with_store() -> (KeywordSearchEngine, Arc<dyn ResearchStore>) {
        let store: Arc<dyn ResearchStore> = Arc::new(InMemoryStore::new());
        let engine = KeywordSearchEngine::new(store.clone(), SearchConfig::default());
        (engine, store)
    }

    fn source(title: &str, summary: Option<&str>) -> Source {
        Source::new(NewSource {
            topic_id: None,
            title: title.to_string(),
            url: None,
            source_type: None,
            author: None,
            publication: None,
            published_date: None,
            summary: summary.map(str::to_string),
            key_findings: vec![],
            credibility: Level::Medium,
            added_by: None,
        })
    }

    #[tokio::test]
    async fn test_empty_query_rejected() {
        let (engine, _) = engine_with_store().await;
        let result = engine.search("", 0, 10).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_limit_out_of_range_rejected() {
        let (engine, _) = engine_with_store().await;
        assert!(engine.search("ai", 0, 0).await.is_err());
        assert!(engine.search("ai", 0, 201).await.is_err());
        assert!(engine.search("ai", 0, 200).await.is_ok());
    }

    #[tokio::test]
    async fn test_configured_limit_cannot_exceed_cap() {
        let store: Arc<dyn ResearchStore> = Arc::new(InMemoryStore::new());
        let engine = KeywordSearchEngine::new(
            store,
            SearchConfig {
                default_limit: 50,
                max_limit: 1000,
            },
        );

        assert_eq!(engine.config().max_limit, 200);
        assert!(matches!(
            engine.search("ai", 0, 201).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_source_summary_becomes_content() {
        let (engine, store) = engine_with_store().await;
        store
            .insert_source(source("Gartner Hype Cycle", Some("Agentic AI emerging")))
            .await
            .unwrap();

        let response = engine.search("agentic", 0, 10).await.unwrap();
        assert_eq!(response.total, 1);
        let hit = &response.results[0];
        assert_eq!(hit.result_type, ResultType::Source);
        assert_eq!(hit.title.as_deref(), Some("Gartner Hype Cycle"));
        assert_eq!(hit.content.as_deref(), Some("Agentic AI emerging"));
    }

    #[tokio::test]
    async fn test_offset_past_end_returns_empty_window() {
        let (engine, store) = engine_with_store().await;
        store.insert_source(source("AI Report", None)).await.unwrap();

        let response = engine.search("ai", 5, 10).await.unwrap();
        assert_eq!(response.total, 1);
        assert!(response.results.is_empty());
        assert_eq!(response.query, "ai");
    }
}
