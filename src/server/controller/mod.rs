//! HTTP request handlers.
//!
//! Controllers validate path, query and body parameters, call the matching service and
//! convert domain models into DTOs. Every failure is returned as an `AppError` and rendered
//! by the error translator.

pub mod api;
pub mod article;
pub mod comment;
pub mod topic;

#[cfg(test)]
mod test;

use crate::server::error::domain::DomainError;

/// Fallback for requests that match no route.
pub async fn route_not_found() -> DomainError {
    DomainError::RouteNotFound
}
