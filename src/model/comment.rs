use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentDto {
    pub comment_id: i32,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub body: String,
    pub article_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentResponseDto {
    pub comment: CommentDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentsDto {
    pub comments: Vec<CommentDto>,
}

/// Request body for `POST /api/articles/{article_id}/comments`.
///
/// Documentation only; see `UpdateArticleVotesDto`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub username: String,
    pub body: String,
}
