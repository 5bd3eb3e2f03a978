use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections with an explicit status and a stable client-facing message.
///
/// Raised by request validation, by repositories when a row is missing, and by the
/// storage-failure translation in `StorageFailure::classify`. The `Display` output is the
/// exact message sent to the client.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// Path identifier is not a base-10 integer.
    #[error("400: Bad request")]
    MalformedIdentifier,

    /// Request body is missing fields, has fields of the wrong type, or is not JSON.
    #[error("400: Bad request")]
    MalformedBody,

    /// `sort_by` is not one of the sortable article columns.
    #[error("Invalid sort_by query")]
    InvalidSortColumn,

    /// `order` is neither `asc` nor `desc`.
    #[error("Invalid order query")]
    InvalidOrderValue,

    /// `topic` does not name an existing topic.
    #[error("Invalid topic query")]
    InvalidTopicFilter,

    #[error("Article not found")]
    ArticleNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    /// No route matched the request path.
    #[error("404: Route not found")]
    RouteNotFound,
}

impl DomainError {
    /// HTTP status for this rejection.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedIdentifier
            | Self::MalformedBody
            | Self::InvalidSortColumn
            | Self::InvalidOrderValue
            | Self::InvalidTopicFilter => StatusCode::BAD_REQUEST,
            Self::ArticleNotFound
            | Self::UserNotFound
            | Self::CommentNotFound
            | Self::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders the rejection as `{status}` with body `{"msg": "<message>"}`.
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorDto {
                msg: self.to_string(),
            }),
        )
            .into_response()
    }
}
