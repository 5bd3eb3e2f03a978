//! Topic service.

use sea_orm::DatabaseConnection;

use crate::server::{data::topic::TopicRepository, error::AppError, model::topic::Topic};

pub struct TopicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every topic.
    ///
    /// # Returns
    /// - `Ok(Vec<Topic>)` - All topics ordered by slug
    /// - `Err(AppError)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Topic>, AppError> {
        let topics = TopicRepository::new(self.db).get_all().await?;
        Ok(topics)
    }
}
