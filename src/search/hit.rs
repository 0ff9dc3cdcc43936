use crate::models::{Insight, Note, Source};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{Display, EnumString};

/// Kind tag of a unified search result.
///
/// Variant order is the tie-break order for results sharing a timestamp.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResultType {
    Source,
    Note,
    Insight,
}

/// A single search result hit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    pub result_type: ResultType,

    pub id: i64,

    /// Present for sources and insights
    pub title: Option<String>,

    /// Note content, insight content or source summary
    pub content: Option<String>,

    pub topic_id: Option<i64>,

    pub created_at: DateTime<Utc>,
}

impl SearchHit {
    /// Result ordering: newest first, then `(result_type, id)` ascending
    pub fn rank(a: &SearchHit, b: &SearchHit) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.result_type.cmp(&b.result_type))
            .then_with(|| a.id.cmp(&b.id))
    }
}

impl From<Source> for SearchHit {
    fn from(source: Source) -> Self {
        Self {
            result_type: ResultType::Source,
            id: source.id,
            title: Some(source.title),
            content: source.summary,
            topic_id: source.topic_id,
            created_at: source.created_at,
        }
    }
}

impl From<Note> for SearchHit {
    fn from(note: Note) -> Self {
        Self {
            result_type: ResultType::Note,
            id: note.id,
            title: None,
            content: Some(note.content),
            topic_id: note.topic_id,
            created_at: note.created_at,
        }
    }
}

impl From<Insight> for SearchHit {
    fn from(insight: Insight) -> Self {
        Self {
            result_type: ResultType::Insight,
            id: insight.id,
            title: Some(insight.title),
            content: insight.content,
            topic_id: Some(insight.topic_id),
            created_at: insight.created_at,
        }
    }
}

/// Search response with results and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query as submitted
    pub query: String,

    /// Number of matches before windowing
    pub total: u64,

    /// Requested window of matches
    pub results: Vec<SearchHit>,
}
