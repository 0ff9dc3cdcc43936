pub mod filter;
pub mod store;
pub mod sled_store;
pub mod factory;
pub mod seed;

pub use filter::*;
pub use store::*;
pub use sled_store::SledStore;
pub use factory::{create_store, create_in_memory_store};
pub use seed::seed_store;

use crate::error::Result;
use crate::models::{Collection, Insight, Note, Source, Topic};
use async_trait::async_trait;

/// Trait for research record storage operations.
///
/// Every `list_*` call returns records newest first (`created_at` desc,
/// then `id` desc) before `pagination` is applied.
#[async_trait]
pub trait ResearchStore: Send + Sync {
    // Topics
    async fn insert_topic(&self, topic: Topic) -> Result<Topic>;
    async fn get_topic(&self, id: i64) -> Result<Option<Topic>>;
    async fn update_topic(&self, topic: &Topic) -> Result<()>;
    /// Delete a topic, detaching its sources and notes and dropping its insights
    async fn delete_topic(&self, id: i64) -> Result<()>;
    async fn list_topics(&self, filter: &TopicFilter, pagination: Pagination) -> Result<Vec<Topic>>;
    async fn count_topics(&self, filter: &TopicFilter) -> Result<u64>;

    // Sources
    async fn insert_source(&self, source: Source) -> Result<Source>;
    async fn get_source(&self, id: i64) -> Result<Option<Source>>;
    async fn update_source(&self, source: &Source) -> Result<()>;
    /// Delete a source, detaching its notes
    async fn delete_source(&self, id: i64) -> Result<()>;
    async fn list_sources(&self, filter: &SourceFilter, pagination: Pagination) -> Result<Vec<Source>>;
    async fn count_sources(&self, filter: &SourceFilter) -> Result<u64>;

    // Notes
    async fn insert_note(&self, note: Note) -> Result<Note>;
    async fn get_note(&self, id: i64) -> Result<Option<Note>>;
    async fn update_note(&self, note: &Note) -> Result<()>;
    async fn delete_note(&self, id: i64) -> Result<()>;
    async fn list_notes(&self, filter: &NoteFilter, pagination: Pagination) -> Result<Vec<Note>>;
    async fn count_notes(&self, filter: &NoteFilter) -> Result<u64>;

    // Insights
    async fn insert_insight(&self, insight: Insight) -> Result<Insight>;
    async fn get_insight(&self, id: i64) -> Result<Option<Insight>>;
    async fn update_insight(&self, insight: &Insight) -> Result<()>;
    async fn delete_insight(&self, id: i64) -> Result<()>;
    async fn list_insights(&self, filter: &InsightFilter, pagination: Pagination) -> Result<Vec<Insight>>;
    async fn count_insights(&self, filter: &InsightFilter) -> Result<u64>;

    // Collections
    async fn insert_collection(&self, collection: Collection) -> Result<Collection>;
    async fn get_collection(&self, id: i64) -> Result<Option<Collection>>;
    async fn update_collection(&self, collection: &Collection) -> Result<()>;
    async fn delete_collection(&self, id: i64) -> Result<()>;
    async fn list_collections(
        &self,
        filter: &CollectionFilter,
        pagination: Pagination,
    ) -> Result<Vec<Collection>>;
    async fn count_collections(&self, filter: &CollectionFilter) -> Result<u64>;

    /// Whether a topic with this id exists
    async fn topic_exists(&self, id: i64) -> Result<bool> {
        Ok(self.get_topic(id).await?.is_some())
    }
}
