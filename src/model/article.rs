use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single article with its body and comment count.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleDto {
    pub author: String,
    pub title: String,
    pub article_id: i32,
    pub body: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: u64,
}

/// An article as it appears in a listing; the body is omitted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleListItemDto {
    pub author: String,
    pub title: String,
    pub article_id: i32,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleResponseDto {
    pub article: ArticleDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticlesDto {
    pub articles: Vec<ArticleListItemDto>,
}

/// Request body for `PATCH /api/articles/{article_id}`.
///
/// Documentation only: the controller reads the raw JSON so that numeric strings and
/// floats can be rejected instead of coerced.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateArticleVotesDto {
    pub inc_votes: i32,
}
