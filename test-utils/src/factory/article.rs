//! Article factory for creating test article entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// The topic and author are required because both are foreign keys; the referenced rows
/// must already exist.
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
    article_img_url: String,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {id}"`
    /// - body: `"Body of article {id}"`
    /// - created_at: now
    /// - votes: `0`
    /// - article_img_url: `"https://images.example.com/{id}.jpg"`
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `topic` - Slug of an existing topic
    /// - `author` - Username of an existing user
    pub fn new(db: &'a DatabaseConnection, topic: &str, author: &str) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Article {}", id),
            topic: topic.to_string(),
            author: author.to_string(),
            body: format!("Body of article {}", id),
            created_at: Utc::now(),
            votes: 0,
            article_img_url: format!("https://images.example.com/{}.jpg", id),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    pub fn article_img_url(mut self, article_img_url: impl Into<String>) -> Self {
        self.article_img_url = article_img_url.into();
        self
    }

    /// Builds and inserts the article entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article with generated ID
    /// - `Err(DbErr)` - Database error during insert (including foreign key violations)
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            title: ActiveValue::Set(self.title),
            topic: ActiveValue::Set(self.topic),
            author: ActiveValue::Set(self.author),
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(self.created_at),
            votes: ActiveValue::Set(self.votes),
            article_img_url: ActiveValue::Set(self.article_img_url),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values.
///
/// Shorthand for `ArticleFactory::new(db, topic, author).build().await`.
pub async fn create_article(
    db: &DatabaseConnection,
    topic: &str,
    author: &str,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, topic, author).build().await
}
