use crate::models::common::{nullable, patch, Level, Record, RecordKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

/// A synthesized finding about a topic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub id: i64,
    pub topic_id: i64,
    pub title: String,
    pub content: Option<String>,
    pub evidence: Vec<String>,
    pub confidence: Level,
    pub impact: Level,
    pub status: InsightStatus,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Insight {
    pub fn new(new: NewInsight) -> Self {
        let now = Utc::now();

        Self {
            id: 0,
            topic_id: new.topic_id,
            title: new.title,
            content: new.content,
            evidence: new.evidence,
            confidence: new.confidence,
            impact: new.impact,
            status: new.status,
            author: new.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. The caller checks that a changed `topic_id` exists.
    pub fn apply(&mut self, update: InsightUpdate) {
        if let Some(topic_id) = update.topic_id {
            self.topic_id = topic_id;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        patch(&mut self.content, update.content);
        if let Some(evidence) = update.evidence {
            self.evidence = evidence;
        }
        if let Some(confidence) = update.confidence {
            self.confidence = confidence;
        }
        if let Some(impact) = update.impact {
            self.impact = impact;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        patch(&mut self.author, update.author);
        self.updated_at = Utc::now();
    }
}

impl Record for Insight {
    const KIND: RecordKind = RecordKind::Insight;

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
pub enum InsightStatus {
    #[default]
    Hypothesis,
    Validated,
    Actionable,
    Archived,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewInsight {
    pub topic_id: i64,
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    pub content: Option<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub confidence: Level,
    #[serde(default)]
    pub impact: Level,
    #[serde(default)]
    pub status: InsightStatus,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct InsightUpdate {
    pub topic_id: Option<i64>,
    #[validate(length(min = 1, max = 500))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub content: Option<Option<String>>,
    pub evidence: Option<Vec<String>>,
    pub confidence: Option<Level>,
    pub impact: Option<Level>,
    pub status: Option<InsightStatus>,
    #[serde(default, deserialize_with = "nullable")]
    pub author: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_defaults() {
        let payload: NewInsight =
            serde_json::from_str(r#"{"topic_id": 2, "title": "Quantum leap"}"#).unwrap();
        let insight = Insight::new(payload);

        assert_eq!(insight.status, InsightStatus::Hypothesis);
        assert_eq!(insight.confidence, Level::Medium);
        assert_eq!(insight.impact, Level::Medium);
        assert!(insight.evidence.is_empty());
    }

    #[test]
    fn test_insight_status_transition() {
        let payload: NewInsight =
            serde_json::from_str(r#"{"topic_id": 1, "title": "Data quality"}"#).unwrap();
        let mut insight = Insight::new(payload);

        insight.apply(InsightUpdate {
            status: Some(InsightStatus::Actionable),
            impact: Some(Level::High),
            ..Default::default()
        });

        assert_eq!(insight.status, InsightStatus::Actionable);
        assert_eq!(insight.impact, Level::High);
        assert_eq!(insight.topic_id, 1);
    }
}
