use crate::error::{AppError, Result};
use crate::models::*;
use crate::state::{
    sort_newest_first, CollectionFilter, InsightFilter, NoteFilter, Pagination, RecordFilter,
    ResearchStore, SourceFilter, TopicFilter,
};
use async_trait::async_trait;
use sled::Db;
use std::path::Path;
use std::sync::Arc;

/// Persistent research store using Sled embedded database
#[derive(Clone)]
pub struct SledStore {
    db: Arc<Db>,
    /// Per-kind id counters
    meta_tree: sled::Tree,
}

impl SledStore {
    /// Create a new Sled store at the specified path
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref();
        let db = sled::open(&path).map_err(|e| {
            AppError::StoreUnavailable(format!("Failed to open Sled database: {}", e))
        })?;

        let meta_tree = db.open_tree("meta").map_err(|e| {
            AppError::StoreUnavailable(format!("Failed to open meta tree: {}", e))
        })?;

        tracing::info!("Initialized Sled store at {:?}", path_str);

        Ok(Self {
            db: Arc::new(db),
            meta_tree,
        })
    }

    /// Open the tree holding one record kind
    fn tree(&self, kind: RecordKind) -> Result<sled::Tree> {
        self.db.open_tree(kind.namespace()).map_err(|e| {
            AppError::StoreUnavailable(format!("Failed to open {} tree: {}", kind.namespace(), e))
        })
    }

    /// Record key; big-endian so iteration follows id order
    fn record_key(id: i64) -> [u8; 8] {
        id.to_be_bytes()
    }

    fn serialize_record<T: Record>(record: &T) -> Result<Vec<u8>> {
        bincode::serialize(record).map_err(|e| {
            AppError::StoreUnavailable(format!("Failed to serialize {}: {}", T::KIND, e))
        })
    }

    fn deserialize_record<T: Record>(bytes: &[u8]) -> Result<T> {
        bincode::deserialize(bytes).map_err(|e| {
            AppError::StoreUnavailable(format!("Failed to deserialize {}: {}", T::KIND, e))
        })
    }

    /// Allocate the next id for a record kind
    fn next_id(&self, kind: RecordKind) -> Result<i64> {
        let updated = self
            .meta_tree
            .update_and_fetch(kind.namespace(), |old| {
                let current = old
                    .and_then(|bytes| <[u8; 8]>::try_from(bytes).ok())
                    .map(i64::from_be_bytes)
                    .unwrap_or(0);
                Some((current + 1).to_be_bytes().to_vec())
            })
            .map_err(|e| AppError::StoreUnavailable(format!("Failed to allocate id: {}", e)))?;

        updated
            .and_then(|bytes| <[u8; 8]>::try_from(bytes.as_ref()).ok())
            .map(i64::from_be_bytes)
            .ok_or_else(|| AppError::Internal(format!("Corrupt id counter for {}", kind)))
    }

    fn flush_tree(tree: &sled::Tree) -> Result<()> {
        tree.flush().map_err(|e| {
            AppError::StoreUnavailable(format!("Failed to flush tree: {}", e))
        })?;
        Ok(())
    }

    fn insert_record<T: Record>(&self, mut record: T) -> Result<T> {
        let tree = self.tree(T::KIND)?;
        let id = self.next_id(T::KIND)?;
        record.assign_id(id);

        let value = Self::serialize_record(&record)?;
        tree.insert(Self::record_key(id), value).map_err(|e| {
            AppError::StoreUnavailable(format!("Failed to save {}: {}", T::KIND, e))
        })?;
        Self::flush_tree(&tree)?;

        tracing::debug!(kind = %T::KIND, id, "Record saved to Sled");
        Ok(record)
    }

    fn get_record<T: Record>(&self, id: i64) -> Result<Option<T>> {
        let tree = self.tree(T::KIND)?;

        match tree.get(Self::record_key(id)) {
            Ok(Some(bytes)) => Ok(Some(Self::deserialize_record(&bytes)?)),
            Ok(None) => Ok(None),
            Err(e) => Err(AppError::StoreUnavailable(format!(
                "Failed to get {}: {}",
                T::KIND,
                e
            ))),
        }
    }

    fn update_record<T: Record>(&self, record: &T) -> Result<()> {
        let tree = self.tree(T::KIND)?;
        let key = Self::record_key(record.id());

        // Check if record exists
        if !tree.contains_key(key).map_err(|e| {
            AppError::StoreUnavailable(format!("Failed to check {} existence: {}", T::KIND, e))
        })? {
            return Err(AppError::not_found(T::KIND.label()));
        }

        let value = Self::serialize_record(record)?;
        tree.insert(key, value).map_err(|e| {
            AppError::StoreUnavailable(format!("Failed to update {}: {}", T::KIND, e))
        })?;
        Self::flush_tree(&tree)?;

        tracing::debug!(kind = %T::KIND, id = record.id(), "Record updated in Sled");
        Ok(())
    }

    fn delete_record<T: Record>(&self, id: i64) -> Result<()> {
        let tree = self.tree(T::KIND)?;

        let removed = tree.remove(Self::record_key(id)).map_err(|e| {
            AppError::StoreUnavailable(format!("Failed to delete {}: {}", T::KIND, e))
        })?;
        if removed.is_none() {
            return Err(AppError::not_found(T::KIND.label()));
        }
        Self::flush_tree(&tree)?;

        tracing::debug!(kind = %T::KIND, id, "Record deleted from Sled");
        Ok(())
    }

    /// Decode every record of a kind that passes `predicate`
    fn scan<T: Record>(&self, predicate: impl Fn(&T) -> bool) -> Result<Vec<T>> {
        let tree = self.tree(T::KIND)?;
        let mut records = Vec::new();

        for item in tree.iter() {
            let (_, value) = item.map_err(|e| {
                AppError::StoreUnavailable(format!("Failed to iterate {}: {}", T::KIND, e))
            })?;

            let record: T = Self::deserialize_record(&value)?;
            if predicate(&record) {
                records.push(record);
            }
        }

        Ok(records)
    }

    fn list_records<T: Record, F: RecordFilter<T>>(
        &self,
        filter: &F,
        pagination: Pagination,
    ) -> Result<Vec<T>> {
        let mut records = self.scan(|record: &T| filter.matches(record))?;
        sort_newest_first(&mut records);
        Ok(pagination.apply(records))
    }

    fn count_records<T: Record, F: RecordFilter<T>>(&self, filter: &F) -> Result<u64> {
        Ok(self.scan(|record: &T| filter.matches(record))?.len() as u64)
    }

    /// Rewrite every record matching `predicate`
    fn update_where<T: Record>(
        &self,
        predicate: impl Fn(&T) -> bool,
        mutate: impl Fn(&mut T),
    ) -> Result<()> {
        for mut record in self.scan(predicate)? {
            mutate(&mut record);
            self.update_record(&record)?;
        }
        Ok(())
    }

    /// Flush pending writes to disk
    pub async fn flush(&self) -> Result<()> {
        self.db.flush_async().await.map_err(|e| {
            AppError::StoreUnavailable(format!("Failed to flush database: {}", e))
        })?;
        Ok(())
    }
}

#[async_trait]
impl ResearchStore for SledStore {
    async fn insert_topic(&self, topic: Topic) -> Result<Topic> {
        self.insert_record(topic)
    }

    async fn get_topic(&self, id: i64) -> Result<Option<Topic>> {
        self.get_record(id)
    }

    async fn update_topic(&self, topic: &Topic) -> Result<()> {
        self.update_record(topic)
    }

    async fn delete_topic(&self, id: i64) -> Result<()> {
        self.delete_record::<Topic>(id)?;

        self.update_where(|s: &Source| s.topic_id == Some(id), |s| s.topic_id = None)?;
        self.update_where(|n: &Note| n.topic_id == Some(id), |n| n.topic_id = None)?;
        for insight in self.scan(|i: &Insight| i.topic_id == id)? {
            self.delete_record::<Insight>(insight.id)?;
        }

        Ok(())
    }

    async fn list_topics(&self, filter: &TopicFilter, pagination: Pagination) -> Result<Vec<Topic>> {
        self.list_records(filter, pagination)
    }

    async fn count_topics(&self, filter: &TopicFilter) -> Result<u64> {
        self.count_records::<Topic, _>(filter)
    }

    async fn insert_source(&self, source: Source) -> Result<Source> {
        self.insert_record(source)
    }

    async fn get_source(&self, id: i64) -> Result<Option<Source>> {
        self.get_record(id)
    }

    async fn update_source(&self, source: &Source) -> Result<()> {
        self.update_record(source)
    }

    async fn delete_source(&self, id: i64) -> Result<()> {
        self.delete_record::<Source>(id)?;
        self.update_where(|n: &Note| n.source_id == Some(id), |n| n.source_id = None)
    }

    async fn list_sources(&self, filter: &SourceFilter, pagination: Pagination) -> Result<Vec<Source>> {
        self.list_records(filter, pagination)
    }

    async fn count_sources(&self, filter: &SourceFilter) -> Result<u64> {
        self.count_records::<Source, _>(filter)
    }

    async fn insert_note(&self, note: Note) -> Result<Note> {
        self.insert_record(note)
    }

    async fn get_note(&self, id: i64) -> Result<Option<Note>> {
        self.get_record(id)
    }

    async fn update_note(&self, note: &Note) -> Result<()> {
        self.update_record(note)
    }

    async fn delete_note(&self, id: i64) -> Result<()> {
        self.delete_record::<Note>(id)
    }

    async fn list_notes(&self, filter: &NoteFilter, pagination: Pagination) -> Result<Vec<Note>> {
        self.list_records(filter, pagination)
    }

    async fn count_notes(&self, filter: &NoteFilter) -> Result<u64> {
        self.count_records::<Note, _>(filter)
    }

    async fn insert_insight(&self, insight: Insight) -> Result<Insight> {
        self.insert_record(insight)
    }

    async fn get_insight(&self, id: i64) -> Result<Option<Insight>> {
        self.get_record(id)
    }

    async fn update_insight(&self, insight: &Insight) -> Result<()> {
        self.update_record(insight)
    }

    async fn delete_insight(&self, id: i64) -> Result<()> {
        self.delete_record::<Insight>(id)
    }

    async fn list_insights(&self, filter: &InsightFilter, pagination: Pagination) -> Result<Vec<Insight>> {
        self.list_records(filter, pagination)
    }

    async fn count_insights(&self, filter: &InsightFilter) -> Result<u64> {
        self.count_records::<Insight, _>(filter)
    }

    async fn insert_collection(&self, collection: Collection) -> Result<Collection> {
        self.insert_record(collection)
    }

    async fn get_collection(&self, id: i64) -> Result<Option<Collection>> {
        self.get_record(id)
    }

    async fn update_collection(&self, collection: &Collection) -> Result<()> {
        self.update_record(collection)
    }

    async fn delete_collection(&self, id: i64) -> Result<()> {
        self.delete_record::<Collection>(id)
    }

    async fn list_collections(
        &self,
        filter: &CollectionFilter,
        pagination: Pagination,
    ) -> Result<Vec<Collection>> {
        self.list_records(filter, pagination)
    }

    async fn count_collections(&self, filter: &CollectionFilter) -> Result<u64> {
        self.count_records::<Collection, _>(filter)
    }
}
