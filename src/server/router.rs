use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    controller::{
        api::get_api,
        article::{get_article_by_id, get_articles, patch_article_votes},
        comment::{delete_comment, get_article_comments, post_article_comment},
        route_not_found,
        topic::get_topics,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", get(get_api))
        .route("/api/topics", get(get_topics))
        .route("/api/articles", get(get_articles))
        .route(
            "/api/articles/{article_id}",
            get(get_article_by_id).patch(patch_article_votes),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(get_article_comments).post(post_article_comment),
        )
        .route("/api/comments/{comment_id}", delete(delete_comment))
        .fallback(route_not_found)
}

/// Builds the complete application: routes, state, request tracing and CORS.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
