//! Newsdesk Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the newsdesk
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories that insert rows with sensible defaults, and in-memory fixtures.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts topics, users, articles and comments
//! - **fixture**: Entity models built in memory without touching the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_articles() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_news_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
