mod collections;
mod insights;
mod notes;
mod search;
mod sources;
mod topics;

pub use collections::*;
pub use insights::*;
pub use notes::*;
pub use search::*;
pub use sources::*;
pub use topics::*;

use crate::api::extract::empty_as_none;
use crate::config::SearchConfig;
use crate::error::{AppError, Result};
use crate::state::Pagination;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// `skip`/`limit` window shared by every list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default, alias = "offset", deserialize_with = "empty_as_none")]
    pub skip: Option<usize>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<usize>,
}

impl PageParams {
    pub fn pagination(&self, config: &SearchConfig) -> Result<Pagination> {
        let limit = self.limit.unwrap_or(config.default_limit);
        if limit == 0 || limit > config.max_limit {
            return Err(AppError::Validation(format!(
                "limit must be between 1 and {}",
                config.max_limit
            )));
        }
        Ok(Pagination::new(self.skip.unwrap_or(0), limit))
    }
}

/// Turn a missing record into a 404
pub(crate) fn found<T>(record: Option<T>, kind: &str) -> Result<T> {
    record.ok_or_else(|| AppError::not_found(kind))
}
