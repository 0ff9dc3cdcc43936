//! Keyword search across sources, notes and insights
//!
//! Every search is a fresh scan through the [`ResearchStore`](crate::state::ResearchStore)
//! keyword filters. Matching is a literal, case-insensitive substring test;
//! there is no index, tokenization or relevance scoring.
//!
//! ```text
//!   query ──► SourceFilter (title | summary)  ─┐
//!         ──► NoteFilter   (content)          ─┼─► merge ─► sort ─► window
//!         ──► InsightFilter(title | content)  ─┘
//! ```

mod hit;
mod service;

pub use hit::{ResultType, SearchHit, SearchResponse};
pub use service::KeywordSearchEngine;
