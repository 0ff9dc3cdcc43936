//! Record predicates and paging shared by every store backend

use crate::models::*;

/// Case-insensitive substring predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    needle: String,
}

impl Keyword {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Whether `text` contains the keyword, ignoring case
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }

    /// Absent text never matches
    pub fn matches_opt(&self, text: Option<&str>) -> bool {
        text.is_some_and(|t| self.matches(t))
    }
}

/// Offset/limit window over an ordered result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
}

impl Pagination {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// No windowing
    pub fn all() -> Self {
        Self {
            offset: 0,
            limit: usize::MAX,
        }
    }

    /// Slice `[offset, offset + limit)` out of `items`
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::all()
    }
}

/// A predicate over one record kind
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Store ordering: newest first, ties by id descending
pub fn sort_newest_first<T: Record>(records: &mut [T]) {
    records.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().cmp(&a.id()))
    });
}

fn eq_opt<T: PartialEq>(wanted: &Option<T>, actual: &T) -> bool {
    wanted.as_ref().map_or(true, |w| w == actual)
}

fn eq_opt_str(wanted: &Option<String>, actual: Option<&str>) -> bool {
    wanted.as_deref().map_or(true, |w| actual == Some(w))
}

#[derive(Debug, Clone, Default)]
pub struct TopicFilter {
    pub status: Option<TopicStatus>,
    pub category: Option<TopicCategory>,
    pub owner: Option<String>,
}

impl TopicFilter {
    pub fn active() -> Self {
        Self {
            status: Some(TopicStatus::Active),
            ..Default::default()
        }
    }
}

impl RecordFilter<Topic> for TopicFilter {
    fn matches(&self, topic: &Topic) -> bool {
        eq_opt(&self.status, &topic.status)
            && self.category.map_or(true, |c| topic.category == Some(c))
            && eq_opt_str(&self.owner, topic.owner.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceFilter {
    pub topic_id: Option<i64>,
    pub source_type: Option<SourceType>,
    pub credibility: Option<Level>,
    pub added_by: Option<String>,
    /// Substring over title or summary
    pub keyword: Option<Keyword>,
    /// Only sources without a summary
    pub unreviewed: bool,
}

impl SourceFilter {
    pub fn keyword(query: &str) -> Self {
        Self {
            keyword: Some(Keyword::new(query)),
            ..Default::default()
        }
    }

    pub fn unreviewed() -> Self {
        Self {
            unreviewed: true,
            ..Default::default()
        }
    }
}

impl RecordFilter<Source> for SourceFilter {
    fn matches(&self, source: &Source) -> bool {
        self.topic_id.map_or(true, |t| source.topic_id == Some(t))
            && self.source_type.map_or(true, |t| source.source_type == Some(t))
            && eq_opt(&self.credibility, &source.credibility)
            && eq_opt_str(&self.added_by, source.added_by.as_deref())
            && self.keyword.as_ref().map_or(true, |k| {
                k.matches(&source.title) || k.matches_opt(source.summary.as_deref())
            })
            && (!self.unreviewed || source.is_unreviewed())
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    pub topic_id: Option<i64>,
    pub source_id: Option<i64>,
    pub author: Option<String>,
    /// Substring over content
    pub keyword: Option<Keyword>,
}

impl NoteFilter {
    pub fn keyword(query: &str) -> Self {
        Self {
            keyword: Some(Keyword::new(query)),
            ..Default::default()
        }
    }
}

impl RecordFilter<Note> for NoteFilter {
    fn matches(&self, note: &Note) -> bool {
        self.topic_id.map_or(true, |t| note.topic_id == Some(t))
            && self.source_id.map_or(true, |s| note.source_id == Some(s))
            && eq_opt_str(&self.author, note.author.as_deref())
            && self.keyword.as_ref().map_or(true, |k| k.matches(&note.content))
    }
}

#[derive(Debug, Clone, Default)]
pub struct InsightFilter {
    pub topic_id: Option<i64>,
    pub status: Option<InsightStatus>,
    pub confidence: Option<Level>,
    pub impact: Option<Level>,
    pub author: Option<String>,
    /// Substring over title or content
    pub keyword: Option<Keyword>,
}

impl InsightFilter {
    pub fn keyword(query: &str) -> Self {
        Self {
            keyword: Some(Keyword::new(query)),
            ..Default::default()
        }
    }
}

impl RecordFilter<Insight> for InsightFilter {
    fn matches(&self, insight: &Insight) -> bool {
        eq_opt(&self.topic_id, &insight.topic_id)
            && eq_opt(&self.status, &insight.status)
            && eq_opt(&self.confidence, &insight.confidence)
            && eq_opt(&self.impact, &insight.impact)
            && eq_opt_str(&self.author, insight.author.as_deref())
            && self.keyword.as_ref().map_or(true, |k| {
                k.matches(&insight.title) || k.matches_opt(insight.content.as_deref())
            })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollectionFilter {
    pub created_by: Option<String>,
    pub shared: Option<bool>,
}

impl RecordFilter<Collection> for CollectionFilter {
    fn matches(&self, collection: &Collection) -> bool {
        eq_opt_str(&self.created_by, collection.created_by.as_deref())
            && eq_opt(&self.shared, &collection.shared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_is_case_insensitive() {
        let keyword = Keyword::new("QuAnTuM");
        assert!(keyword.matches("IBM Quantum System Two"));
        assert!(keyword.matches("quantum"));
        assert!(!keyword.matches("qubit"));
        assert!(!keyword.matches_opt(None));
    }

    #[test]
    fn test_keyword_is_literal() {
        let keyword = Keyword::new("50%");
        assert!(keyword.matches("grew 50% year over year"));
        assert!(!keyword.matches("grew 500 units"));
    }

    #[test]
    fn test_pagination_window() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(Pagination::new(8, 5).apply(items.clone()), vec![8, 9]);
        assert_eq!(Pagination::new(20, 5).apply(items.clone()), Vec::<u32>::new());
        assert_eq!(Pagination::all().apply(items).len(), 10);
    }

    #[test]
    fn test_source_keyword_covers_title_and_summary() {
        let mut source = Source::new(NewSource {
            topic_id: None,
            title: "Quantum Report".to_string(),
            url: None,
            source_type: None,
            author: None,
            publication: None,
            published_date: None,
            summary: Some("AI adoption trends".to_string()),
            key_findings: vec![],
            credibility: Level::High,
            added_by: None,
        });

        assert!(SourceFilter::keyword("quantum").matches(&source));
        assert!(SourceFilter::keyword("adoption").matches(&source));
        assert!(!SourceFilter::keyword("climate").matches(&source));
        assert!(!SourceFilter::unreviewed().matches(&source));

        source.summary = Some(String::new());
        assert!(SourceFilter::unreviewed().matches(&source));
    }
}
