//! Dashboard data provider

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::models::{Insight, Source, Topic};
use crate::state::{InsightFilter, Pagination, ResearchStore, SourceFilter, TopicFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Summary view over all research data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Number of topics with status `active`
    pub active_topics_count: u64,

    /// All active topics, most recently updated first
    pub active_topics: Vec<Topic>,

    /// Count of all sources
    pub total_sources: u64,

    /// Newest insights of any status
    pub recent_insights: Vec<Insight>,

    /// Number of sources without a summary
    pub unreviewed_sources_count: u64,

    /// Newest sources without a summary
    pub unreviewed_sources: Vec<Source>,
}

/// Builds [`DashboardSnapshot`]s from the record store
#[derive(Clone)]
pub struct DashboardAggregator {
    store: Arc<dyn ResearchStore>,
    config: DashboardConfig,
}

impl DashboardAggregator {
    pub fn new(store: Arc<dyn ResearchStore>, config: DashboardConfig) -> Self {
        Self { store, config }
    }

    /// Generate a dashboard snapshot
    pub async fn snapshot(&self) -> Result<DashboardSnapshot> {
        let active_topics = self.active_topics().await?;
        let total_sources = self.store.count_sources(&SourceFilter::default()).await?;

        let recent_insights = self
            .store
            .list_insights(
                &InsightFilter::default(),
                Pagination::new(0, self.config.recent_insights_limit),
            )
            .await?;

        let unreviewed = SourceFilter::unreviewed();
        let unreviewed_sources_count = self.store.count_sources(&unreviewed).await?;
        let unreviewed_sources = self
            .store
            .list_sources(
                &unreviewed,
                Pagination::new(0, self.config.unreviewed_sources_limit),
            )
            .await?;

        tracing::debug!(
            active_topics = active_topics.len(),
            total_sources,
            unreviewed_sources_count,
            "Dashboard snapshot generated"
        );

        Ok(DashboardSnapshot {
            active_topics_count: active_topics.len() as u64,
            active_topics,
            total_sources,
            recent_insights,
            unreviewed_sources_count,
            unreviewed_sources,
        })
    }

    async fn active_topics(&self) -> Result<Vec<Topic>> {
        let mut topics = self
            .store
            .list_topics(&TopicFilter::active(), Pagination::all())
            .await?;

        topics.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(topics)
    }
}
