use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{EndpointsDto, ErrorDto},
        article::{
            ArticleDto, ArticleListItemDto, ArticleResponseDto, ArticlesDto, UpdateArticleVotesDto,
        },
        comment::{CommentDto, CommentResponseDto, CommentsDto, CreateCommentDto},
        topic::{TopicDto, TopicsDto},
    },
};

/// OpenAPI description of every route, served by `GET /api`.
#[derive(OpenApi)]
#[openapi(
    info(title = "newsdesk", description = "Topics, articles and comments"),
    paths(
        get_api,
        crate::server::controller::topic::get_topics,
        crate::server::controller::article::get_articles,
        crate::server::controller::article::get_article_by_id,
        crate::server::controller::article::patch_article_votes,
        crate::server::controller::comment::get_article_comments,
        crate::server::controller::comment::post_article_comment,
        crate::server::controller::comment::delete_comment,
    ),
    components(schemas(
        ErrorDto,
        TopicDto,
        TopicsDto,
        ArticleDto,
        ArticleListItemDto,
        ArticleResponseDto,
        ArticlesDto,
        UpdateArticleVotesDto,
        CommentDto,
        CommentResponseDto,
        CommentsDto,
        CreateCommentDto,
    )),
    tags(
        (name = "topic", description = "Article topics"),
        (name = "article", description = "Articles and votes"),
        (name = "comment", description = "Comments on articles"),
    )
)]
pub struct ApiDoc;

/// Describe every available endpoint.
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "OpenAPI document of every endpoint")
    ),
)]
pub async fn get_api() -> impl IntoResponse {
    Json(EndpointsDto {
        endpoints: ApiDoc::openapi(),
    })
}
