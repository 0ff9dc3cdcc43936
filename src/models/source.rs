use crate::models::common::{nullable, patch, Level, Record, RecordKind};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

/// An external reference document, optionally attached to a topic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub id: i64,
    pub topic_id: Option<i64>,
    pub title: String,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub source_type: Option<SourceType>,
    pub author: Option<String>,
    pub publication: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub summary: Option<String>,
    pub key_findings: Vec<String>,
    pub credibility: Level,
    pub added_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Source {
    /// Build an unsaved source from a create payload
    pub fn new(new: NewSource) -> Self {
        let now = Utc::now();

        Self {
            id: 0,
            topic_id: new.topic_id,
            title: new.title,
            url: new.url,
            source_type: new.source_type,
            author: new.author,
            publication: new.publication,
            published_date: new.published_date,
            summary: new.summary,
            key_findings: new.key_findings,
            credibility: new.credibility,
            added_by: new.added_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update
    pub fn apply(&mut self, update: SourceUpdate) {
        patch(&mut self.topic_id, update.topic_id);
        if let Some(title) = update.title {
            self.title = title;
        }
        patch(&mut self.url, update.url);
        patch(&mut self.source_type, update.source_type);
        patch(&mut self.author, update.author);
        patch(&mut self.publication, update.publication);
        patch(&mut self.published_date, update.published_date);
        patch(&mut self.summary, update.summary);
        if let Some(key_findings) = update.key_findings {
            self.key_findings = key_findings;
        }
        if let Some(credibility) = update.credibility {
            self.credibility = credibility;
        }
        patch(&mut self.added_by, update.added_by);
        self.updated_at = Utc::now();
    }

    /// A source nobody has summarised yet
    pub fn is_unreviewed(&self) -> bool {
        self.summary.as_deref().map_or(true, str::is_empty)
    }
}

impl Record for Source {
    const KIND: RecordKind = RecordKind::Source;

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

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SourceType {
    Article,
    Paper,
    Report,
    Video,
    Podcast,
    Book,
    Other,
}

/// Create payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewSource {
    pub topic_id: Option<i64>,
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub source_type: Option<SourceType>,
    pub author: Option<String>,
    pub publication: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub summary: Option<String>,
    #[serde(default)]
    pub key_findings: Vec<String>,
    #[serde(default)]
    pub credibility: Level,
    pub added_by: Option<String>,
}

/// Partial update payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SourceUpdate {
    #[serde(default, deserialize_with = "nullable")]
    pub topic_id: Option<Option<i64>>,
    #[validate(length(min = 1, max = 500))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub url: Option<Option<String>>,
    #[serde(default, rename = "type", deserialize_with = "nullable")]
    pub source_type: Option<Option<SourceType>>,
    #[serde(default, deserialize_with = "nullable")]
    pub author: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub publication: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub published_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "nullable")]
    pub summary: Option<Option<String>>,
    pub key_findings: Option<Vec<String>>,
    pub credibility: Option<Level>,
    #[serde(default, deserialize_with = "nullable")]
    pub added_by: Option<Option<String>>,
}
