use crate::models::common::{nullable, patch, Record, RecordKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A named grouping of topics and sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub topic_ids: Vec<i64>,
    pub source_ids: Vec<i64>,
    pub created_by: Option<String>,
    pub shared: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Collection {
    pub fn new(new: NewCollection) -> Self {
        let now = Utc::now();

        Self {
            id: 0,
            name: new.name,
            description: new.description,
            topic_ids: new.topic_ids,
            source_ids: new.source_ids,
            created_by: new.created_by,
            shared: new.shared,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: CollectionUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        patch(&mut self.description, update.description);
        if let Some(topic_ids) = update.topic_ids {
            self.topic_ids = topic_ids;
        }
        if let Some(source_ids) = update.source_ids {
            self.source_ids = source_ids;
        }
        patch(&mut self.created_by, update.created_by);
        if let Some(shared) = update.shared {
            self.shared = shared;
        }
        self.updated_at = Utc::now();
    }
}

impl Record for Collection {
    const KIND: RecordKind = RecordKind::Collection;

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCollection {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub topic_ids: Vec<i64>,
    #[serde(default)]
    pub source_ids: Vec<i64>,
    pub created_by: Option<String>,
    #[serde(default)]
    pub shared: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CollectionUpdate {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub topic_ids: Option<Vec<i64>>,
    pub source_ids: Option<Vec<i64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub created_by: Option<Option<String>>,
    pub shared: Option<bool>,
}
