//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows into the database; use
//! `crate::fixture` when an in-memory model is enough.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let topic = factory::create_topic(&db).await?;
//! let user = factory::create_user(&db).await?;
//! let article = factory::create_article(&db, &topic.slug, &user.username).await?;
//!
//! // Or everything at once
//! let (topic, user, article) = factory::helpers::create_article_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let article = factory::article::ArticleFactory::new(&db, "cats", "rogersop")
//!     .title("Seven inspirational thought leaders from Manchester UK")
//!     .votes(100)
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod comment;
pub mod helpers;
pub mod topic;
pub mod user;

pub use article::create_article;
pub use comment::create_comment;
pub use topic::create_topic;
pub use user::create_user;
