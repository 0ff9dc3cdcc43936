use crate::api::{auth, handlers, AppState};
use axum::{middleware, routing::get, Router};
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

/// Build the main API router
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let api = Router::new()
        // Topics
        .route("/topics", get(handlers::list_topics).post(handlers::create_topic))
        .route(
            "/topics/:id",
            get(handlers::get_topic)
                .patch(handlers::update_topic)
                .delete(handlers::delete_topic),
        )
        .route("/topics/:id/sources", get(handlers::list_topic_sources))
        .route("/topics/:id/insights", get(handlers::list_topic_insights))
        // Sources
        .route("/sources", get(handlers::list_sources).post(handlers::create_source))
        .route(
            "/sources/:id",
            get(handlers::get_source)
                .patch(handlers::update_source)
                .delete(handlers::delete_source),
        )
        // Notes
        .route("/notes", get(handlers::list_notes).post(handlers::create_note))
        .route(
            "/notes/:id",
            get(handlers::get_note)
                .patch(handlers::update_note)
                .delete(handlers::delete_note),
        )
        // Insights
        .route("/insights", get(handlers::list_insights).post(handlers::create_insight))
        .route(
            "/insights/:id",
            get(handlers::get_insight)
                .patch(handlers::update_insight)
                .delete(handlers::delete_insight),
        )
        // Collections
        .route(
            "/collections",
            get(handlers::list_collections).post(handlers::create_collection),
        )
        .route(
            "/collections/:id",
            get(handlers::get_collection)
                .patch(handlers::update_collection)
                .delete(handlers::delete_collection),
        )
        // Cross-cutting views
        .route("/search", get(handlers::search))
        .route("/dashboard", get(handlers::dashboard))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_token,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api)
        // Add state
        .with_state(state)
        // Add middleware
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
}
