use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        article::{ArticleResponseDto, ArticlesDto, UpdateArticleVotesDto},
    },
    server::{
        error::{domain::DomainError, AppError},
        service::article::{ArticleService, ListingQuery},
        state::AppState,
        util::validate::{validate_article_id, validate_vote_delta},
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

/// Raw listing query string; validated by the article service.
#[derive(Deserialize, Debug, Default)]
pub struct ArticleListingQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
}

/// List articles.
///
/// Returns every article without its body, with the number of comments on it. The
/// listing can be sorted by any returned column and filtered by topic.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `sort_by` (default `created_at`), `order` (default `desc`) and
///   `topic`
///
/// # Returns
/// - `200 OK` - Matching articles in the requested order
/// - `400 Bad Request` - Unknown sort column, order or topic
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(
        ("sort_by" = Option<String>, Query, description = "Column to sort by (default: created_at)"),
        ("order" = Option<String>, Query, description = "asc or desc (default: desc)"),
        ("topic" = Option<String>, Query, description = "Slug of the topic to filter by")
    ),
    responses(
        (status = 200, description = "Successfully retrieved articles", body = ArticlesDto),
        (status = 400, description = "Invalid sort_by, order or topic query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleListingQuery>,
) -> Result<impl IntoResponse, AppError> {
    let articles = ArticleService::new(&state.db)
        .get_listing(ListingQuery {
            sort_by: query.sort_by.as_deref(),
            order: query.order.as_deref(),
            topic: query.topic.as_deref(),
        })
        .await?;

    Ok(Json(ArticlesDto {
        articles: articles.into_iter().map(|a| a.into_dto()).collect(),
    }))
}

/// Get a single article.
///
/// # Returns
/// - `200 OK` - The article with its body and comment count
/// - `400 Bad Request` - Article ID is not an integer
/// - `404 Not Found` - No article has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved article", body = ArticleResponseDto),
        (status = 400, description = "Malformed article ID", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_by_id(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = validate_article_id(&article_id)?;

    let article = ArticleService::new(&state.db).get_by_id(article_id).await?;

    Ok(Json(ArticleResponseDto {
        article: article.into_dto(),
    }))
}

/// Add to or subtract from an article's votes.
///
/// The body's `inc_votes` must be a JSON integer; it is added to the current vote count
/// in a single atomic update.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `article_id` - Article ID path segment
/// - `payload` - `{ "inc_votes": <integer> }`
///
/// # Returns
/// - `200 OK` - The updated article
/// - `400 Bad Request` - Malformed article ID or body
/// - `404 Not Found` - No article has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    request_body = UpdateArticleVotesDto,
    responses(
        (status = 200, description = "Successfully updated votes", body = ArticleResponseDto),
        (status = 400, description = "Malformed article ID or body", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_article_votes(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = validate_article_id(&article_id)?;
    let Json(payload) = payload.map_err(|_| DomainError::MalformedBody)?;
    let inc_votes = validate_vote_delta(&payload)?;

    let article = ArticleService::new(&state.db)
        .update_votes(article_id, inc_votes)
        .await?;

    Ok(Json(ArticleResponseDto {
        article: article.into_dto(),
    }))
}
