use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Aggregated comment count does not fit the response type
    ///
    /// COUNT yields a signed 64-bit value; a negative count can only come from a
    /// broken query. Results in a 500 Internal Server Error with a generic message
    /// returned to client.
    #[error("Comment count {count} for article {article_id} is out of range")]
    CommentCountOutOfRange {
        /// The article whose count failed to convert
        article_id: i32,
        /// The raw aggregate value
        count: i64,
    },
}
