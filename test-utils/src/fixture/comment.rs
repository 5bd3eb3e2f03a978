//! Comment fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::comment;

/// Default test comment body.
pub const DEFAULT_BODY: &str = "I hate streaming noses";

/// Default test comment author.
pub const DEFAULT_AUTHOR: &str = "icellusedkars";

/// Creates a comment entity model with default values.
///
/// # Default Values
/// - comment_id: `1`
/// - article_id: `1`
/// - author: `"icellusedkars"`
/// - body: `"I hate streaming noses"`
/// - votes: `0`
/// - created_at: `2020-11-03T21:00:00Z`
pub fn entity() -> comment::Model {
    comment::Model {
        comment_id: 1,
        article_id: 1,
        author: DEFAULT_AUTHOR.to_string(),
        body: DEFAULT_BODY.to_string(),
        votes: 0,
        created_at: Utc.with_ymd_and_hms(2020, 11, 3, 21, 0, 0).unwrap(),
    }
}
