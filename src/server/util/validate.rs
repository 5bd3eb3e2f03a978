//! Request parameter validation.
//!
//! Every client-supplied identifier, query parameter and body field passes through one of
//! these functions before a statement is built. Failures are `DomainError`s and never
//! reach the store.

use serde_json::Value;

use crate::server::{
    error::domain::DomainError,
    model::{
        article::{ArticleListingParams, SortColumn, SortOrder},
        comment::CreateCommentParams,
    },
};

/// Parses an article ID path segment.
///
/// A well-formed ID is accepted even if no such article exists; that is decided later by
/// the query. A base-10 integer too large for any stored row can never match one, so it
/// is reported as missing rather than malformed.
///
/// # Returns
/// - `Ok(i32)` - The segment is a base-10 integer
/// - `Err(DomainError::ArticleNotFound)` - The integer is outside the ID range
/// - `Err(DomainError::MalformedIdentifier)` - Anything else
pub fn validate_article_id(raw: &str) -> Result<i32, DomainError> {
    parse_id(raw, DomainError::ArticleNotFound)
}

/// Parses a comment ID path segment. Same rules as [`validate_article_id`], with
/// out-of-range integers reported as `CommentNotFound`.
pub fn validate_comment_id(raw: &str) -> Result<i32, DomainError> {
    parse_id(raw, DomainError::CommentNotFound)
}

fn parse_id(raw: &str, not_found: DomainError) -> Result<i32, DomainError> {
    match raw.parse::<i32>() {
        Ok(id) => Ok(id),
        Err(_) if is_integer_literal(raw) => Err(not_found),
        Err(_) => Err(DomainError::MalformedIdentifier),
    }
}

/// An optional sign followed by one or more ASCII digits.
fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Validates listing query parameters against their whitelists.
///
/// Checked in order: `sort_by`, `order`, `topic`.
///
/// # Arguments
/// - `sort_by` - Column name; defaults to `created_at`
/// - `order` - `asc` or `desc`; defaults to `desc`
/// - `topic` - Optional topic slug to filter by
/// - `known_topics` - Slugs of every existing topic; only consulted when `topic` is given
///
/// # Returns
/// - `Ok(ArticleListingParams)` - All parameters are valid
/// - `Err(DomainError::InvalidSortColumn)` - Unknown `sort_by`
/// - `Err(DomainError::InvalidOrderValue)` - `order` is not exactly `asc` or `desc`
/// - `Err(DomainError::InvalidTopicFilter)` - `topic` is not a known slug
pub fn validate_listing_params(
    sort_by: Option<&str>,
    order: Option<&str>,
    topic: Option<&str>,
    known_topics: &[String],
) -> Result<ArticleListingParams, DomainError> {
    let sort_by = match sort_by {
        Some(name) => SortColumn::from_name(name).ok_or(DomainError::InvalidSortColumn)?,
        None => SortColumn::default(),
    };

    let order = match order {
        Some(name) => SortOrder::from_name(name).ok_or(DomainError::InvalidOrderValue)?,
        None => SortOrder::default(),
    };

    let topic = match topic {
        Some(slug) if known_topics.iter().any(|known| known == slug) => Some(slug.to_string()),
        Some(_) => return Err(DomainError::InvalidTopicFilter),
        None => None,
    };

    Ok(ArticleListingParams {
        sort_by,
        order,
        topic,
    })
}

/// Extracts `inc_votes` from a vote-update body.
///
/// Only JSON integers are accepted: `"1"` and `1.5` are rejected rather than coerced.
///
/// # Returns
/// - `Ok(i32)` - The vote delta
/// - `Err(DomainError::MalformedBody)` - Missing, not an integer, or outside `i32`
pub fn validate_vote_delta(body: &Value) -> Result<i32, DomainError> {
    body.get("inc_votes")
        .and_then(Value::as_i64)
        .and_then(|delta| i32::try_from(delta).ok())
        .ok_or(DomainError::MalformedBody)
}

/// Extracts `username` and `body` from a new-comment body.
///
/// Whether the user exists is left to the `comments.author` foreign key.
///
/// # Returns
/// - `Ok(CreateCommentParams)` - Both fields are non-blank strings
/// - `Err(DomainError::MalformedBody)` - Either field is missing, not a string, or blank
pub fn validate_comment_payload(
    article_id: i32,
    payload: &Value,
) -> Result<CreateCommentParams, DomainError> {
    let username = non_blank_str(payload, "username")?;
    let body = non_blank_str(payload, "body")?;

    Ok(CreateCommentParams {
        article_id,
        username: username.to_string(),
        body: body.to_string(),
    })
}

fn non_blank_str<'a>(payload: &'a Value, field: &str) -> Result<&'a str, DomainError> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
        .ok_or(DomainError::MalformedBody)
}
