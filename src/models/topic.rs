use crate::models::common::{nullable, patch, Record, RecordKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

/// A research subject under investigation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: TopicStatus,
    pub owner: Option<String>,
    pub category: Option<TopicCategory>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Topic {
    /// Build an unsaved topic from a create payload
    pub fn new(new: NewTopic) -> Self {
        let now = Utc::now();

        Self {
            id: 0,
            name: new.name,
            description: new.description,
            status: new.status,
            owner: new.owner,
            category: new.category,
            tags: new.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update
    pub fn apply(&mut self, update: TopicUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        patch(&mut self.description, update.description);
        if let Some(status) = update.status {
            self.status = status;
        }
        patch(&mut self.owner, update.owner);
        patch(&mut self.category, update.category);
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.updated_at = Utc::now();
    }

    pub fn is_active(&self) -> bool {
        self.status == TopicStatus::Active
    }
}

impl Record for Topic {
    const KIND: RecordKind = RecordKind::Topic;

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

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TopicStatus {
    #[default]
    Active,
    Paused,
    Completed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TopicCategory {
    Market,
    Technical,
    Competitive,
    Academic,
    Industry,
}

/// Create payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTopic {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: TopicStatus,
    pub owner: Option<String>,
    pub category: Option<TopicCategory>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TopicUpdate {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub status: Option<TopicStatus>,
    #[serde(default, deserialize_with = "nullable")]
    pub owner: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub category: Option<Option<TopicCategory>>,
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_topic(name: &str) -> NewTopic {
        NewTopic {
            name: name.to_string(),
            description: Some("desc".to_string()),
            status: TopicStatus::Active,
            owner: None,
            category: Some(TopicCategory::Market),
            tags: vec!["AI".to_string()],
        }
    }

    #[test]
    fn test_topic_creation() {
        let topic = Topic::new(new_topic("AI Adoption"));
        assert_eq!(topic.id, 0);
        assert!(topic.is_active());
        assert_eq!(topic.created_at, topic.updated_at);
    }

    #[test]
    fn test_topic_apply_partial_update() {
        let mut topic = Topic::new(new_topic("AI Adoption"));
        let before = topic.updated_at;

        let update: TopicUpdate =
            serde_json::from_str(r#"{"status": "paused", "description": null}"#).unwrap();
        topic.apply(update);

        assert_eq!(topic.status, TopicStatus::Paused);
        assert_eq!(topic.description, None);
        assert_eq!(topic.name, "AI Adoption");
        assert_eq!(topic.category, Some(TopicCategory::Market));
        assert!(topic.updated_at >= before);
    }

    #[test]
    fn test_new_topic_validation() {
        let mut payload = new_topic("");
        assert!(payload.validate().is_err());
        payload.name = "x".repeat(256);
        assert!(payload.validate().is_err());
        payload.name = "ok".to_string();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_status_defaults_to_active() {
        let payload: NewTopic = serde_json::from_str(r#"{"name": "Quantum"}"#).unwrap();
        assert_eq!(payload.status, TopicStatus::Active);
        assert!(payload.tags.is_empty());
    }
}
