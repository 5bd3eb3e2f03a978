//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation, convenience methods for creating entities with their
//! dependencies, and the standard seeded data set used by endpoint tests.

use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{article::ArticleFactory, comment::CommentFactory, topic::TopicFactory, user::UserFactory};

/// Counter for generating unique identifiers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a topic, a user and an article written by that user under that topic.
///
/// # Returns
/// - `Ok((topic, user, article))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::topic::Model,
        entity::user::Model,
        entity::article::Model,
    ),
    DbErr,
> {
    let topic = crate::factory::topic::create_topic(db).await?;
    let user = crate::factory::user::create_user(db).await?;
    let article = crate::factory::article::create_article(db, &topic.slug, &user.username).await?;

    Ok((topic, user, article))
}

/// Rows inserted by [`seed_news`], kept so tests can refer to them by name.
pub struct SeededNews {
    pub topics: Vec<entity::topic::Model>,
    pub users: Vec<entity::user::Model>,
    /// Articles in insertion order; `articles[0]` starts with 100 votes and has comments,
    /// `articles[1]` has no comments.
    pub articles: Vec<entity::article::Model>,
    pub comments: Vec<entity::comment::Model>,
}

/// Seeds a small but complete data set.
///
/// - Topics: `mitch`, `cats`, `paper` (`paper` has no articles)
/// - Users: `butter_bridge`, `icellusedkars`, `rogersop`, `lurker` (`lurker` writes nothing)
/// - Five articles with distinct titles, authors, vote counts and creation times
/// - Four comments on the first article and one on the third
///
/// # Returns
/// - `Ok(SeededNews)` - Every inserted row
/// - `Err(DbErr)` - Database error during insert
pub async fn seed_news(db: &DatabaseConnection) -> Result<SeededNews, DbErr> {
    let mut topics = Vec::new();
    for (slug, description) in [
        ("mitch", "The man, the Mitch, the legend"),
        ("cats", "Not dogs"),
        ("paper", "what books are made of"),
    ] {
        topics.push(
            TopicFactory::new(db)
                .slug(slug)
                .description(description)
                .build()
                .await?,
        );
    }

    let mut users = Vec::new();
    for (username, name) in [
        ("butter_bridge", "jonny"),
        ("icellusedkars", "sam"),
        ("rogersop", "paul"),
        ("lurker", "do_nothing"),
    ] {
        users.push(UserFactory::new(db).username(username).name(name).build().await?);
    }

    let base = Utc.with_ymd_and_hms(2020, 7, 9, 20, 11, 0).unwrap();

    let mut articles = Vec::new();
    for (title, topic, author, votes, age_days) in [
        ("Living in the shadow of a great man", "mitch", "butter_bridge", 100, 0),
        ("Sony Vaio; or, The Laptop", "mitch", "icellusedkars", 0, 10),
        ("Eight pug gifs that remind me of mitch", "mitch", "icellusedkars", 7, 20),
        ("UNCOVERED: catspiracy to bring down democracy", "cats", "rogersop", 3, 30),
        ("A", "mitch", "butter_bridge", 42, 40),
    ] {
        articles.push(
            ArticleFactory::new(db, topic, author)
                .title(title)
                .votes(votes)
                .created_at(base - Duration::days(age_days))
                .build()
                .await?,
        );
    }

    let mut comments = Vec::new();
    for (article, author, body, age_hours) in [
        (0, "butter_bridge", "Oh, I've got compassion running out of my nose, pal!", 1),
        (0, "icellusedkars", "The beautiful thing about treasure is that it exists.", 2),
        (0, "rogersop", "I hate streaming noses", 3),
        (0, "icellusedkars", "Lobster pot", 4),
        (2, "butter_bridge", "git push origin master", 5),
    ] {
        comments.push(
            CommentFactory::new(db, articles[article].article_id, author)
                .body(body)
                .created_at(base + Duration::hours(age_hours))
                .build()
                .await?,
        );
    }

    Ok(SeededNews {
        topics,
        users,
        articles,
        comments,
    })
}
