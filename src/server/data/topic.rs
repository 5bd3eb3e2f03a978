//! Topic data repository.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};

use crate::server::model::topic::Topic;

pub struct TopicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every topic ordered by slug.
    ///
    /// # Returns
    /// - `Ok(Vec<Topic>)` - All topics, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Topic>, DbErr> {
        let topics = entity::prelude::Topic::find()
            .order_by_asc(entity::topic::Column::Slug)
            .all(self.db)
            .await?;

        Ok(topics.into_iter().map(Topic::from_entity).collect())
    }

    /// Gets the slug of every topic.
    ///
    /// This is the whitelist a listing's `topic` filter is checked against.
    pub async fn get_slugs(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Topic::find()
            .select_only()
            .column(entity::topic::Column::Slug)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
