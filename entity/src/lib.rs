//! SeaORM entities for the newsdesk schema.
//!
//! One module per relation: `topics`, `users`, `articles` and `comments`. Relations
//! mirror the foreign keys created by the `migration` crate so that
//! `Schema::create_table_from_entity` produces an equivalent schema in tests.

pub mod prelude;

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
