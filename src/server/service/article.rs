//! Article service for business logic.
//!
//! This module provides the `ArticleService`, which validates listing parameters against
//! the stored topic set and turns missing articles into `ArticleNotFound`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, topic::TopicRepository},
    error::{domain::DomainError, AppError},
    model::article::{Article, ArticleListItem},
    util::validate::validate_listing_params,
};

/// Raw listing query parameters as received from the client.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingQuery<'q> {
    pub sort_by: Option<&'q str>,
    pub order: Option<&'q str>,
    pub topic: Option<&'q str>,
}

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a single article with its body and comment count.
    ///
    /// # Arguments
    /// - `article_id` - Validated article ID
    ///
    /// # Returns
    /// - `Ok(Article)` - The article
    /// - `Err(AppError::Domain(ArticleNotFound))` - No article has this ID
    /// - `Err(AppError)` - Database error during query
    pub async fn get_by_id(&self, article_id: i32) -> Result<Article, AppError> {
        ArticleRepository::new(self.db)
            .get_by_id(article_id)
            .await?
            .ok_or_else(|| DomainError::ArticleNotFound.into())
    }

    /// Lists articles after validating the raw query parameters.
    ///
    /// Topic slugs are only read from the database when a topic filter is supplied, and
    /// only after `sort_by` and `order` have passed.
    ///
    /// # Returns
    /// - `Ok(Vec<ArticleListItem>)` - Matching articles in the requested order
    /// - `Err(AppError::Domain(InvalidSortColumn | InvalidOrderValue | InvalidTopicFilter))` -
    ///   A parameter is outside its whitelist
    /// - `Err(AppError)` - Database error during query
    pub async fn get_listing(&self, query: ListingQuery<'_>) -> Result<Vec<ArticleListItem>, AppError> {
        // Reject bad sort_by/order before touching the topics table.
        validate_listing_params(query.sort_by, query.order, None, &[])?;

        let known_topics = match query.topic {
            Some(_) => TopicRepository::new(self.db).get_slugs().await?,
            None => Vec::new(),
        };

        let params =
            validate_listing_params(query.sort_by, query.order, query.topic, &known_topics)?;

        ArticleRepository::new(self.db).get_listing(&params).await
    }

    /// Applies a vote delta to an article.
    ///
    /// # Arguments
    /// - `article_id` - Validated article ID
    /// - `inc_votes` - Validated delta, may be negative
    ///
    /// # Returns
    /// - `Ok(Article)` - The article after the update
    /// - `Err(AppError::Domain(ArticleNotFound))` - No article has this ID
    /// - `Err(AppError)` - Database error during update
    pub async fn update_votes(&self, article_id: i32, inc_votes: i32) -> Result<Article, AppError> {
        ArticleRepository::new(self.db)
            .update_votes(article_id, inc_votes)
            .await
    }
}
