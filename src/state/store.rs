use crate::error::{AppError, Result};
use crate::models::*;
use crate::state::{
    sort_newest_first, CollectionFilter, InsightFilter, NoteFilter, Pagination, RecordFilter,
    ResearchStore, SourceFilter, TopicFilter,
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// One record kind held in memory
struct Table<T: Record> {
    rows: DashMap<i64, T>,
    next_id: AtomicI64,
}

impl<T: Record> Table<T> {
    fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    fn insert(&self, mut record: T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        record.assign_id(id);
        self.rows.insert(id, record.clone());
        tracing::debug!(kind = %T::KIND, id, "Record saved");
        record
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).map(|entry| entry.clone())
    }

    fn update(&self, record: &T) -> Result<()> {
        match self.rows.get_mut(&record.id()) {
            Some(mut entry) => {
                *entry = record.clone();
                tracing::debug!(kind = %T::KIND, id = record.id(), "Record updated");
                Ok(())
            }
            None => Err(AppError::not_found(T::KIND.label())),
        }
    }

    fn delete(&self, id: i64) -> Result<T> {
        match self.rows.remove(&id) {
            Some((_, record)) => {
                tracing::debug!(kind = %T::KIND, id, "Record deleted");
                Ok(record)
            }
            None => Err(AppError::not_found(T::KIND.label())),
        }
    }

    fn list<F: RecordFilter<T>>(&self, filter: &F, pagination: Pagination) -> Vec<T> {
        let mut records: Vec<T> = self
            .rows
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        sort_newest_first(&mut records);
        pagination.apply(records)
    }

    fn count<F: RecordFilter<T>>(&self, filter: &F) -> u64 {
        self.rows
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .count() as u64
    }

    /// Mutate every row matching `predicate` in place
    fn update_where(&self, predicate: impl Fn(&T) -> bool, mutate: impl Fn(&mut T)) {
        for mut entry in self.rows.iter_mut() {
            if predicate(entry.value()) {
                mutate(entry.value_mut());
            }
        }
    }
}

/// In-memory research store (for development and testing)
#[derive(Clone)]
pub struct InMemoryStore {
    topics: Arc<Table<Topic>>,
    sources: Arc<Table<Source>>,
    notes: Arc<Table<Note>>,
    insights: Arc<Table<Insight>>,
    collections: Arc<Table<Collection>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            topics: Arc::new(Table::new()),
            sources: Arc::new(Table::new()),
            notes: Arc::new(Table::new()),
            insights: Arc::new(Table::new()),
            collections: Arc::new(Table::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResearchStore for InMemoryStore {
    async fn insert_topic(&self, topic: Topic) -> Result<Topic> {
        Ok(self.topics.insert(topic))
    }

    async fn get_topic(&self, id: i64) -> Result<Option<Topic>> {
        Ok(self.topics.get(id))
    }

    async fn update_topic(&self, topic: &Topic) -> Result<()> {
        self.topics.update(topic)
    }

    async fn delete_topic(&self, id: i64) -> Result<()> {
        self.topics.delete(id)?;

        self.sources
            .update_where(|s| s.topic_id == Some(id), |s| s.topic_id = None);
        self.notes
            .update_where(|n| n.topic_id == Some(id), |n| n.topic_id = None);

        let orphaned: Vec<i64> = self
            .insights
            .rows
            .iter()
            .filter(|entry| entry.topic_id == id)
            .map(|entry| *entry.key())
            .collect();
        for insight_id in orphaned {
            self.insights.delete(insight_id)?;
        }

        Ok(())
    }

    async fn list_topics(&self, filter: &TopicFilter, pagination: Pagination) -> Result<Vec<Topic>> {
        Ok(self.topics.list(filter, pagination))
    }

    async fn count_topics(&self, filter: &TopicFilter) -> Result<u64> {
        Ok(self.topics.count(filter))
    }

    async fn insert_source(&self, source: Source) -> Result<Source> {
        Ok(self.sources.insert(source))
    }

    async fn get_source(&self, id: i64) -> Result<Option<Source>> {
        Ok(self.sources.get(id))
    }

    async fn update_source(&self, source: &Source) -> Result<()> {
        self.sources.update(source)
    }

    async fn delete_source(&self, id: i64) -> Result<()> {
        self.sources.delete(id)?;
        self.notes
            .update_where(|n| n.source_id == Some(id), |n| n.source_id = None);
        Ok(())
    }

    async fn list_sources(&self, filter: &SourceFilter, pagination: Pagination) -> Result<Vec<Source>> {
        Ok(self.sources.list(filter, pagination))
    }

    async fn count_sources(&self, filter: &SourceFilter) -> Result<u64> {
        Ok(self.sources.count(filter))
    }

    async fn insert_note(&self, note: Note) -> Result<Note> {
        Ok(self.notes.insert(note))
    }

    async fn get_note(&self, id: i64) -> Result<Option<Note>> {
        Ok(self.notes.get(id))
    }

    async fn update_note(&self, note: &Note) -> Result<()> {
        self.notes.update(note)
    }

    async fn delete_note(&self, id: i64) -> Result<()> {
        self.notes.delete(id).map(|_| ())
    }

    async fn list_notes(&self, filter: &NoteFilter, pagination: Pagination) -> Result<Vec<Note>> {
        Ok(self.notes.list(filter, pagination))
    }

    async fn count_notes(&self, filter: &NoteFilter) -> Result<u64> {
        Ok(self.notes.count(filter))
    }

    async fn insert_insight(&self, insight: Insight) -> Result<Insight> {
        Ok(self.insights.insert(insight))
    }

    async fn get_insight(&self, id: i64) -> Result<Option<Insight>> {
        Ok(self.insights.get(id))
    }

    async fn update_insight(&self, insight: &Insight) -> Result<()> {
        self.insights.update(insight)
    }

    async fn delete_insight(&self, id: i64) -> Result<()> {
        self.insights.delete(id).map(|_| ())
    }

    async fn list_insights(&self, filter: &InsightFilter, pagination: Pagination) -> Result<Vec<Insight>> {
        Ok(self.insights.list(filter, pagination))
    }

    async fn count_insights(&self, filter: &InsightFilter) -> Result<u64> {
        Ok(self.insights.count(filter))
    }

    async fn insert_collection(&self, collection: Collection) -> Result<Collection> {
        Ok(self.collections.insert(collection))
    }

    async fn get_collection(&self, id: i64) -> Result<Option<Collection>> {
        Ok(self.collections.get(id))
    }

    async fn update_collection(&self, collection: &Collection) -> Result<()> {
        self.collections.update(collection)
    }

    async fn delete_collection(&self, id: i64) -> Result<()> {
        self.collections.delete(id).map(|_| ())
    }

    async fn list_collections(
        &self,
        filter: &CollectionFilter,
        pagination: Pagination,
    ) -> Result<Vec<Collection>> {
        Ok(self.collections.list(filter, pagination))
    }

    async fn count_collections(&self, filter: &CollectionFilter) -> Result<u64> {
        Ok(self.collections.count(filter))
    }
}
