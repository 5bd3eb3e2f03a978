//! Domain models for article data operations.
//!
//! Defines the article models returned by the data layer and the whitelisted sort and
//! filter parameters used to build the listing query.

use chrono::{DateTime, Utc};
use sea_orm::Order;

use crate::model::article::{ArticleDto, ArticleListItemDto};

/// A single article with its body and the number of comments on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    /// Computed on read from the comments relation, never stored.
    pub comment_count: u64,
}

impl Article {
    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            author: self.author,
            title: self.title,
            article_id: self.article_id,
            body: self.body,
            topic: self.topic,
            created_at: self.created_at,
            votes: self.votes,
            article_img_url: self.article_img_url,
            comment_count: self.comment_count,
        }
    }
}

/// An article in a listing, without its body.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleListItem {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: u64,
}

impl ArticleListItem {
    pub fn into_dto(self) -> ArticleListItemDto {
        ArticleListItemDto {
            author: self.author,
            title: self.title,
            article_id: self.article_id,
            topic: self.topic,
            created_at: self.created_at,
            votes: self.votes,
            article_img_url: self.article_img_url,
            comment_count: self.comment_count,
        }
    }
}

/// Columns an article listing may be sorted by.
///
/// Parsing a client string into this enum is the only way a column name reaches the
/// ORDER BY clause of the listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    Author,
    Title,
    ArticleId,
    Topic,
    #[default]
    CreatedAt,
    Votes,
    ArticleImgUrl,
    CommentCount,
}

impl SortColumn {
    /// Every sortable column in the order they appear in responses.
    pub const ALL: [SortColumn; 8] = [
        SortColumn::Author,
        SortColumn::Title,
        SortColumn::ArticleId,
        SortColumn::Topic,
        SortColumn::CreatedAt,
        SortColumn::Votes,
        SortColumn::ArticleImgUrl,
        SortColumn::CommentCount,
    ];

    /// Parses the exact query-string name of a column.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            SortColumn::Author => "author",
            SortColumn::Title => "title",
            SortColumn::ArticleId => "article_id",
            SortColumn::Topic => "topic",
            SortColumn::CreatedAt => "created_at",
            SortColumn::Votes => "votes",
            SortColumn::ArticleImgUrl => "article_img_url",
            SortColumn::CommentCount => "comment_count",
        }
    }

    /// The stored article column, or `None` for the computed `comment_count`.
    pub fn article_column(self) -> Option<entity::article::Column> {
        use entity::article::Column;

        match self {
            SortColumn::Author => Some(Column::Author),
            SortColumn::Title => Some(Column::Title),
            SortColumn::ArticleId => Some(Column::ArticleId),
            SortColumn::Topic => Some(Column::Topic),
            SortColumn::CreatedAt => Some(Column::CreatedAt),
            SortColumn::Votes => Some(Column::Votes),
            SortColumn::ArticleImgUrl => Some(Column::ArticleImgUrl),
            SortColumn::CommentCount => None,
        }
    }
}

/// Sort direction for an article listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parses `asc` or `desc`, case-sensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// Validated parameters for the article listing query.
///
/// The default sorts newest first with no topic filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleListingParams {
    pub sort_by: SortColumn,
    pub order: SortOrder,
    /// Slug of an existing topic; bound as a parameter, never interpolated.
    pub topic: Option<String>,
}
