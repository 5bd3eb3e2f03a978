//! Domain models for comment operations.

use chrono::{DateTime, Utc};

use crate::model::comment::CommentDto;

/// A reply to an article, authored by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Converts an entity model to a comment domain model at the repository boundary.
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            comment_id: entity.comment_id,
            article_id: entity.article_id,
            author: entity.author,
            body: entity.body,
            votes: entity.votes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            comment_id: self.comment_id,
            votes: self.votes,
            created_at: self.created_at,
            author: self.author,
            body: self.body,
            article_id: self.article_id,
        }
    }
}

/// Validated parameters for inserting a comment.
///
/// The author's existence is not checked before the insert; the foreign key on
/// `comments.author` rejects unknown users.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCommentParams {
    pub article_id: i32,
    pub username: String,
    pub body: String,
}
