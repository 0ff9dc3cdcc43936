use crate::api::AppState;
use crate::error::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const API_TOKEN_HEADER: &str = "x-api-token";

/// Shared-secret check for every `/api/v1` route.
///
/// Rejects with 401 when `X-API-Token` is missing or differs from the
/// configured token.
pub async fn require_api_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(API_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    let rejection = match provided {
        None => Some("Missing API token"),
        Some(token) if token != &*state.api_token => Some("Invalid API token"),
        Some(_) => None,
    };

    match rejection {
        Some(message) => {
            tracing::warn!(path = %request.uri().path(), reason = message, "Rejected request");
            AppError::Authentication(message.to_string()).into_response()
        }
        None => next.run(request).await,
    }
}
