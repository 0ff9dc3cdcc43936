use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};

/// The record kinds persisted by the store
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecordKind {
    Topic,
    Source,
    Note,
    Insight,
    Collection,
}

impl RecordKind {
    /// Human-readable label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Topic => "Topic",
            RecordKind::Source => "Source",
            RecordKind::Note => "Note",
            RecordKind::Insight => "Insight",
            RecordKind::Collection => "Collection",
        }
    }

    /// Storage namespace (sled tree name)
    pub fn namespace(&self) -> &'static str {
        match self {
            RecordKind::Topic => "topics",
            RecordKind::Source => "sources",
            RecordKind::Note => "notes",
            RecordKind::Insight => "insights",
            RecordKind::Collection => "collections",
        }
    }
}

/// Common behaviour of every stored record
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: RecordKind;

    fn id(&self) -> i64;

    /// Set the store-assigned identifier
    fn assign_id(&mut self, id: i64);

    fn created_at(&self) -> DateTime<Utc>;
}

/// Shared low/medium/high scale (credibility, confidence, impact)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    Low,
    #[default]
    Medium,
    High,
}

/// Deserialize a PATCH field that distinguishes "absent" from explicit `null`.
///
/// Use with `#[serde(default, deserialize_with = "nullable")]` on an
/// `Option<Option<T>>`: absent => `None`, `null` => `Some(None)`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Apply a nullable patch value onto a field
pub(crate) fn patch<T>(field: &mut Option<T>, value: Option<Option<T>>) {
    if let Some(value) = value {
        *field = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable")]
        summary: Option<Option<String>>,
    }

    #[test]
    fn test_nullable_distinguishes_absent_and_null() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.summary, None);

        let null: Patch = serde_json::from_str(r#"{"summary": null}"#).unwrap();
        assert_eq!(null.summary, Some(None));

        let value: Patch = serde_json::from_str(r#"{"summary": "x"}"#).unwrap();
        assert_eq!(value.summary, Some(Some("x".to_string())));
    }

    #[test]
    fn test_patch_helper() {
        let mut field = Some("old".to_string());
        patch(&mut field, None);
        assert_eq!(field.as_deref(), Some("old"));
        patch(&mut field, Some(None));
        assert_eq!(field, None);
        patch(&mut field, Some(Some("new".to_string())));
        assert_eq!(field.as_deref(), Some("new"));
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("high".parse::<Level>().unwrap(), Level::High);
        assert_eq!(Level::default(), Level::Medium);
        assert_eq!(Level::Low.to_string(), "low");
    }

    #[test]
    fn test_record_kind_namespace() {
        assert_eq!(RecordKind::Insight.namespace(), "insights");
        assert_eq!(RecordKind::Note.to_string(), "note");
    }
}
