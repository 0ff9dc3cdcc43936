pub mod auth;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use routes::*;

use crate::analytics::DashboardAggregator;
use crate::config::Config;
use crate::search::KeywordSearchEngine;
use crate::state::ResearchStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResearchStore>,
    pub search: KeywordSearchEngine,
    pub dashboard: DashboardAggregator,
    /// Expected `X-API-Token` value
    pub api_token: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn ResearchStore>, config: &Config) -> Self {
        Self {
            search: KeywordSearchEngine::new(store.clone(), config.search.clone()),
            dashboard: DashboardAggregator::new(store.clone(), config.dashboard.clone()),
            api_token: config.auth.resolve_token().into(),
            store,
        }
    }

    /// Override the expected API token
    pub fn with_token(mut self, token: impl Into<Arc<str>>) -> Self {
        self.api_token = token.into();
        self
    }
}
