//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for unit tests of conversions and
//! DTO mapping. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let comment = fixture::comment_entity();
//! let topic = fixture::topic_entity();
//! ```

pub mod comment;
pub mod topic;

pub use comment::entity as comment_entity;
pub use topic::entity as topic_entity;
