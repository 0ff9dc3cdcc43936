use crate::models::common::{nullable, patch, Record, RecordKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Free-text annotation tied to a topic and/or a source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub topic_id: Option<i64>,
    pub source_id: Option<i64>,
    pub content: String,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(new: NewNote) -> Self {
        let now = Utc::now();

        Self {
            id: 0,
            topic_id: new.topic_id,
            source_id: new.source_id,
            content: new.content,
            author: new.author,
            tags: new.tags,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: NoteUpdate) {
        patch(&mut self.topic_id, update.topic_id);
        patch(&mut self.source_id, update.source_id);
        if let Some(content) = update.content {
            self.content = content;
        }
        patch(&mut self.author, update.author);
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.updated_at = Utc::now();
    }
}

impl Record for Note {
    const KIND: RecordKind = RecordKind::Note;

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
pub struct NewNote {
    pub topic_id: Option<i64>,
    pub source_id: Option<i64>,
    #[validate(length(min = 1))]
    pub content: String,
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NoteUpdate {
    #[serde(default, deserialize_with = "nullable")]
    pub topic_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub source_id: Option<Option<i64>>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub author: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
}
