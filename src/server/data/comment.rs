//! Comment data repository.
//!
//! Comments are created only through [`CommentRepository::create`] and destroyed only
//! through [`CommentRepository::delete`]. Neither checks the referenced rows up front:
//! the foreign keys on `comments` are the authority that rejects an unknown article or
//! author.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::{article::ArticleRepository, user::UserRepository},
    error::{
        domain::DomainError,
        storage::{StorageFailure, ARTICLES_TABLE, USERS_TABLE},
        AppError,
    },
    model::comment::{Comment, CreateCommentParams},
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the comments on an article, newest first.
    ///
    /// Comments created at the same instant are ordered by descending `comment_id`.
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments on the article, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_article(&self, article_id: i32) -> Result<Vec<Comment>, DbErr> {
        let comments = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::CommentId)
            .all(self.db)
            .await?;

        Ok(comments.into_iter().map(Comment::from_entity).collect())
    }

    /// Inserts a comment with zero votes, timestamped now.
    ///
    /// A foreign key failure is returned as a `StorageFailure` naming the table whose row
    /// was missing. PostgreSQL reports that table itself; SQLite does not, so after the
    /// insert has already been rejected the parent rows are looked up to fill it in.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The inserted comment with its generated ID
    /// - `Err(AppError::Storage)` - The insert violated a constraint
    /// - `Err(AppError)` - Any other database error
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        let article_id = params.article_id;
        let username = params.username.clone();

        let result = entity::comment::ActiveModel {
            article_id: ActiveValue::Set(params.article_id),
            author: ActiveValue::Set(params.username),
            body: ActiveValue::Set(params.body),
            votes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => Ok(Comment::from_entity(entity)),
            Err(err) => match StorageFailure::from_db_err(&err) {
                Some(failure)
                    if failure.is_foreign_key_violation() && failure.referenced_table.is_none() =>
                {
                    Err(self
                        .resolve_referenced_table(failure, article_id, &username)
                        .await?
                        .into())
                }
                Some(failure) => Err(failure.into()),
                None => Err(err.into()),
            },
        }
    }

    /// Names the parent table whose row is missing after a foreign key failure.
    ///
    /// The article is checked first, matching the column order of the insert.
    async fn resolve_referenced_table(
        &self,
        failure: StorageFailure,
        article_id: i32,
        username: &str,
    ) -> Result<StorageFailure, DbErr> {
        if !ArticleRepository::new(self.db).exists(article_id).await? {
            return Ok(failure.with_referenced_table(ARTICLES_TABLE));
        }

        if !UserRepository::new(self.db).exists(username).await? {
            return Ok(failure.with_referenced_table(USERS_TABLE));
        }

        Ok(failure)
    }

    /// Deletes a comment by ID.
    ///
    /// # Returns
    /// - `Ok(())` - The comment was deleted
    /// - `Err(AppError::Domain(CommentNotFound))` - No row was deleted
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, comment_id: i32) -> Result<(), AppError> {
        let result = entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::CommentNotFound.into());
        }

        Ok(())
    }
}
