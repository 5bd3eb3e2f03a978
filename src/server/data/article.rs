//! Article data repository.
//!
//! Builds the single-article and listing queries, both of which compute `comment_count`
//! on read by left-joining `comments` and counting per article, and applies vote deltas
//! with a single atomic `UPDATE`.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait, Func},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, RelationTrait, Select,
};

use crate::server::{
    error::{domain::DomainError, internal::InternalError, AppError},
    model::article::{Article, ArticleListItem, ArticleListingParams, SortColumn},
};

/// Alias of the aggregated comment count in every article query.
const COMMENT_COUNT: &str = "comment_count";

/// Raw row of the single-article query.
#[derive(Debug, FromQueryResult)]
struct ArticleRow {
    article_id: i32,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
    article_img_url: String,
    comment_count: i64,
}

impl ArticleRow {
    fn into_article(self) -> Result<Article, InternalError> {
        let comment_count = comment_count(self.article_id, self.comment_count)?;

        Ok(Article {
            article_id: self.article_id,
            title: self.title,
            topic: self.topic,
            author: self.author,
            body: self.body,
            created_at: self.created_at,
            votes: self.votes,
            article_img_url: self.article_img_url,
            comment_count,
        })
    }
}

/// Raw row of the listing query; same as [`ArticleRow`] without the body.
#[derive(Debug, FromQueryResult)]
struct ArticleListRow {
    article_id: i32,
    title: String,
    topic: String,
    author: String,
    created_at: DateTime<Utc>,
    votes: i32,
    article_img_url: String,
    comment_count: i64,
}

impl ArticleListRow {
    fn into_list_item(self) -> Result<ArticleListItem, InternalError> {
        let comment_count = comment_count(self.article_id, self.comment_count)?;

        Ok(ArticleListItem {
            article_id: self.article_id,
            title: self.title,
            topic: self.topic,
            author: self.author,
            created_at: self.created_at,
            votes: self.votes,
            article_img_url: self.article_img_url,
            comment_count,
        })
    }
}

/// Coerces the 64-bit COUNT aggregate into the unsigned count sent to clients.
fn comment_count(article_id: i32, count: i64) -> Result<u64, InternalError> {
    u64::try_from(count).map_err(|_| InternalError::CommentCountOutOfRange { article_id, count })
}

pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Selects the listing projection plus `comment_count`, grouped by article.
    ///
    /// Grouping by the primary key alone is enough for the other article columns to be
    /// selectable on both PostgreSQL and SQLite.
    fn select_with_comment_count() -> Select<entity::article::Entity> {
        use entity::article::Column;

        entity::prelude::Article::find()
            .select_only()
            .columns([
                Column::Author,
                Column::Title,
                Column::ArticleId,
                Column::Topic,
                Column::CreatedAt,
                Column::Votes,
                Column::ArticleImgUrl,
            ])
            .column_as(
                Expr::expr(Func::count(Expr::col((
                    entity::prelude::Comment,
                    entity::comment::Column::CommentId,
                )))),
                COMMENT_COUNT,
            )
            .join(JoinType::LeftJoin, entity::article::Relation::Comment.def())
            .group_by(Column::ArticleId)
    }

    /// Builds the article listing query from validated parameters.
    ///
    /// The sort column and direction come from the `SortColumn` and `SortOrder` enums, so
    /// no client string reaches ORDER BY. The topic filter is a bound parameter. When the
    /// listing is not sorted by `article_id`, rows with equal sort keys are ordered by
    /// ascending `article_id` so the result is deterministic. Ties go ascending even
    /// when `order` is `desc`.
    pub fn listing_query(params: &ArticleListingParams) -> Select<entity::article::Entity> {
        use entity::article::Column;

        let order = Order::from(params.order);

        let query = Self::select_with_comment_count().apply_if(params.topic.clone(), |query, topic| {
            query.filter(Column::Topic.eq(topic))
        });

        let query = match params.sort_by.article_column() {
            Some(column) => query.order_by(column, order),
            None => query.order_by(Expr::col(Alias::new(COMMENT_COUNT)), order),
        };

        if params.sort_by == SortColumn::ArticleId {
            query
        } else {
            query.order_by(Column::ArticleId, Order::Asc)
        }
    }

    /// Gets a single article with its body and comment count.
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - The article exists
    /// - `Ok(None)` - No article has this ID
    /// - `Err(AppError)` - Database error, or a comment count that cannot be represented
    pub async fn get_by_id(&self, article_id: i32) -> Result<Option<Article>, AppError> {
        let row = Self::select_with_comment_count()
            .column(entity::article::Column::Body)
            .filter(entity::article::Column::ArticleId.eq(article_id))
            .into_model::<ArticleRow>()
            .one(self.db)
            .await?;

        match row {
            Some(row) => Ok(Some(row.into_article()?)),
            None => Ok(None),
        }
    }

    /// Lists articles sorted and filtered by validated parameters.
    ///
    /// # Returns
    /// - `Ok(Vec<ArticleListItem>)` - Matching articles in the requested order, possibly empty
    /// - `Err(AppError)` - Database error, or a comment count that cannot be represented
    pub async fn get_listing(
        &self,
        params: &ArticleListingParams,
    ) -> Result<Vec<ArticleListItem>, AppError> {
        let rows = Self::listing_query(params)
            .into_model::<ArticleListRow>()
            .all(self.db)
            .await?;

        let articles = rows
            .into_iter()
            .map(ArticleListRow::into_list_item)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(articles)
    }

    /// Checks whether an article with the given ID exists.
    pub async fn exists(&self, article_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Article::find_by_id(article_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds `inc_votes` to an article's votes and returns the updated article.
    ///
    /// The increment is one `UPDATE articles SET votes = votes + $1 WHERE article_id = $2`
    /// statement; concurrent increments never lose updates. The same statement only
    /// matches while the new total fits in an `i32`, computed in 64 bits so PostgreSQL
    /// does not overflow evaluating the filter. A delta that would overflow leaves the
    /// row untouched.
    ///
    /// # Returns
    /// - `Ok(Article)` - The article after the update
    /// - `Err(AppError::Domain(ArticleNotFound))` - No article has this ID
    /// - `Err(AppError::Domain(MalformedBody))` - The new total would not fit in `i32`
    /// - `Err(AppError)` - Database error
    pub async fn update_votes(&self, article_id: i32, inc_votes: i32) -> Result<Article, AppError> {
        use entity::article::Column;

        let new_total = Expr::col(Column::Votes)
            .cast_as(Alias::new("BIGINT"))
            .add(i64::from(inc_votes));

        let result = entity::prelude::Article::update_many()
            .col_expr(Column::Votes, Expr::col(Column::Votes).add(inc_votes))
            .filter(Column::ArticleId.eq(article_id))
            .filter(new_total.between(i64::from(i32::MIN), i64::from(i32::MAX)))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            if self.exists(article_id).await? {
                return Err(DomainError::MalformedBody.into());
            }
            return Err(DomainError::ArticleNotFound.into());
        }

        self.get_by_id(article_id)
            .await?
            .ok_or_else(|| DomainError::ArticleNotFound.into())
    }
}
