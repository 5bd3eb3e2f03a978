//! User data repository.
//!
//! Users are seeded externally; the service only ever needs to know whether one exists.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a user with the given username exists.
    ///
    /// # Returns
    /// - `Ok(true)` - The user exists
    /// - `Ok(false)` - No such user
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
