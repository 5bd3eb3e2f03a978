//! Comment service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, comment::CommentRepository},
    error::{domain::DomainError, AppError},
    model::comment::{Comment, CreateCommentParams},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the comments on an article, newest first.
    ///
    /// The article must exist; an existing article without comments yields an empty list.
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments on the article, possibly empty
    /// - `Err(AppError::Domain(ArticleNotFound))` - No article has this ID
    /// - `Err(AppError)` - Database error during query
    pub async fn get_by_article(&self, article_id: i32) -> Result<Vec<Comment>, AppError> {
        if !ArticleRepository::new(self.db).exists(article_id).await? {
            return Err(DomainError::ArticleNotFound.into());
        }

        let comments = CommentRepository::new(self.db)
            .get_by_article(article_id)
            .await?;

        Ok(comments)
    }

    /// Posts a new comment on an article.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The inserted comment
    /// - `Err(AppError::Storage)` - Foreign key failure, translated to `ArticleNotFound` or
    ///   `UserNotFound` when rendered
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        let comment = CommentRepository::new(self.db).create(params).await?;

        tracing::debug!(
            comment_id = comment.comment_id,
            article_id = comment.article_id,
            "comment created"
        );

        Ok(comment)
    }

    /// Deletes a comment.
    ///
    /// # Returns
    /// - `Ok(())` - The comment was deleted
    /// - `Err(AppError::Domain(CommentNotFound))` - No comment has this ID
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, comment_id: i32) -> Result<(), AppError> {
        CommentRepository::new(self.db).delete(comment_id).await?;

        tracing::debug!(comment_id, "comment deleted");

        Ok(())
    }
}
