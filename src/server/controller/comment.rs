use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentResponseDto, CommentsDto, CreateCommentDto},
    },
    server::{
        error::{domain::DomainError, AppError},
        service::comment::CommentService,
        state::AppState,
        util::validate::{validate_article_id, validate_comment_id, validate_comment_payload},
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List the comments on an article, newest first.
///
/// # Returns
/// - `200 OK` - Comments on the article; empty when it has none
/// - `400 Bad Request` - Article ID is not an integer
/// - `404 Not Found` - No article has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = CommentsDto),
        (status = 400, description = "Malformed article ID", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_comments(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = validate_article_id(&article_id)?;

    let comments = CommentService::new(&state.db)
        .get_by_article(article_id)
        .await?;

    Ok(Json(CommentsDto {
        comments: comments.into_iter().map(|c| c.into_dto()).collect(),
    }))
}

/// Post a comment on an article.
///
/// The author must be an existing user. Neither the article nor the user is looked up
/// before the insert; a missing one is reported from the rejected insert.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `article_id` - Article ID path segment
/// - `payload` - `{ "username": <string>, "body": <string> }`
///
/// # Returns
/// - `201 Created` - The new comment
/// - `400 Bad Request` - Malformed article ID or body
/// - `404 Not Found` - Article or user not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentResponseDto),
        (status = 400, description = "Malformed article ID or body", body = ErrorDto),
        (status = 404, description = "Article or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_article_comment(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = validate_article_id(&article_id)?;
    let Json(payload) = payload.map_err(|_| DomainError::MalformedBody)?;
    let params = validate_comment_payload(article_id, &payload)?;

    let comment = CommentService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentResponseDto {
            comment: comment.into_dto(),
        }),
    ))
}

/// Delete a comment.
///
/// # Returns
/// - `204 No Content` - The comment was deleted
/// - `400 Bad Request` - Comment ID is not an integer
/// - `404 Not Found` - No comment has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 400, description = "Malformed comment ID", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let comment_id = validate_comment_id(&comment_id)?;

    CommentService::new(&state.db).delete(comment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
