//! Record builders shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use research_pro::error::{AppError, Result};
use research_pro::models::*;
use research_pro::state::{
    CollectionFilter, InsightFilter, NoteFilter, Pagination, ResearchStore, SourceFilter,
    TopicFilter,
};

pub fn topic(name: &str, status: TopicStatus) -> Topic {
    Topic::new(NewTopic {
        name: name.to_string(),
        description: None,
        status,
        owner: None,
        category: None,
        tags: vec![],
    })
}

pub fn source(topic_id: Option<i64>, title: &str, summary: Option<&str>) -> Source {
    Source::new(NewSource {
        topic_id,
        title: title.to_string(),
        url: None,
        source_type: Some(SourceType::Report),
        author: None,
        publication: None,
        published_date: None,
        summary: summary.map(str::to_string),
        key_findings: vec![],
        credibility: Level::Medium,
        added_by: None,
    })
}

pub fn note(topic_id: Option<i64>, source_id: Option<i64>, content: &str) -> Note {
    Note::new(NewNote {
        topic_id,
        source_id,
        content: content.to_string(),
        author: None,
        tags: vec![],
    })
}

pub fn insight(topic_id: i64, title: &str, content: Option<&str>) -> Insight {
    Insight::new(NewInsight {
        topic_id,
        title: title.to_string(),
        content: content.map(str::to_string),
        evidence: vec![],
        confidence: Level::Medium,
        impact: Level::Medium,
        status: InsightStatus::Hypothesis,
        author: None,
    })
}

/// Pin both timestamps of a record
pub fn at<T: Stamped>(mut record: T, when: DateTime<Utc>) -> T {
    record.stamp(when);
    record
}

pub trait Stamped {
    fn stamp(&mut self, when: DateTime<Utc>);
}

macro_rules! stamped {
    ($($ty:ty),*) => {
        $(impl Stamped for $ty {
            fn stamp(&mut self, when: DateTime<Utc>) {
                self.created_at = when;
                self.updated_at = when;
            }
        })*
    };
}

stamped!(Topic, Source, Note, Insight, Collection);

/// Store whose every call fails as if the backend were down
pub struct UnavailableStore;

fn unavailable<T>() -> Result<T> {
    Err(AppError::StoreUnavailable("backend offline".to_string()))
}

#[async_trait]
impl ResearchStore for UnavailableStore {
    async fn insert_topic(&self, _: Topic) -> Result<Topic> {
        unavailable()
    }

    async fn get_topic(&self, _: i64) -> Result<Option<Topic>> {
        unavailable()
    }

    async fn update_topic(&self, _: &Topic) -> Result<()> {
        unavailable()
    }

    async fn delete_topic(&self, _: i64) -> Result<()> {
        unavailable()
    }

    async fn list_topics(&self, _: &TopicFilter, _: Pagination) -> Result<Vec<Topic>> {
        unavailable()
    }

    async fn count_topics(&self, _: &TopicFilter) -> Result<u64> {
        unavailable()
    }

    async fn insert_source(&self, _: Source) -> Result<Source> {
        unavailable()
    }

    async fn get_source(&self, _: i64) -> Result<Option<Source>> {
        unavailable()
    }

    async fn update_source(&self, _: &Source) -> Result<()> {
        unavailable()
    }

    async fn delete_source(&self, _: i64) -> Result<()> {
        unavailable()
    }

    async fn list_sources(&self, _: &SourceFilter, _: Pagination) -> Result<Vec<Source>> {
        unavailable()
    }

    async fn count_sources(&self, _: &SourceFilter) -> Result<u64> {
        unavailable()
    }

    async fn insert_note(&self, _: Note) -> Result<Note> {
        unavailable()
    }

    async fn get_note(&self, _: i64) -> Result<Option<Note>> {
        unavailable()
    }

    async fn update_note(&self, _: &Note) -> Result<()> {
        unavailable()
    }

    async fn delete_note(&self, _: i64) -> Result<()> {
        unavailable()
    }

    async fn list_notes(&self, _: &NoteFilter, _: Pagination) -> Result<Vec<Note>> {
        unavailable()
    }

    async fn count_notes(&self, _: &NoteFilter) -> Result<u64> {
        unavailable()
    }

    async fn insert_insight(&self, _: Insight) -> Result<Insight> {
        unavailable()
    }

    async fn get_insight(&self, _: i64) -> Result<Option<Insight>> {
        unavailable()
    }

    async fn update_insight(&self, _: &Insight) -> Result<()> {
        unavailable()
    }

    async fn delete_insight(&self, _: i64) -> Result<()> {
        unavailable()
    }

    async fn list_insights(&self, _: &InsightFilter, _: Pagination) -> Result<Vec<Insight>> {
        unavailable()
    }

    async fn count_insights(&self, _: &InsightFilter) -> Result<u64> {
        unavailable()
    }

    async fn insert_collection(&self, _: Collection) -> Result<Collection> {
        unavailable()
    }

    async fn get_collection(&self, _: i64) -> Result<Option<Collection>> {
        unavailable()
    }

    async fn update_collection(&self, _: &Collection) -> Result<()> {
        unavailable()
    }

    async fn delete_collection(&self, _: i64) -> Result<()> {
        unavailable()
    }

    async fn list_collections(&self, _: &CollectionFilter, _: Pagination) -> Result<Vec<Collection>> {
        unavailable()
    }

    async fn count_collections(&self, _: &CollectionFilter) -> Result<u64> {
        unavailable()
    }
}
