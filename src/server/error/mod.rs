//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the error translator that
//! turns any failure into an HTTP response. `AppError` is the top-level error type and
//! keeps domain rejections (`DomainError`) apart from raw engine failures
//! (`StorageFailure`) so translation is a pattern match:
//!
//! 1. **Storage tier** - `StorageFailure::classify` maps known engine codes to a
//!    `DomainError`.
//! 2. **Domain tier** - `DomainError`s render as-is.
//! 3. **Fallback** - everything else is logged and answered with a generic 500.

pub mod config;
pub mod domain;
pub mod internal;
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, domain::DomainError, internal::InternalError,
        storage::StorageFailure,
    },
};

/// Message sent to clients for every 500 response.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "500: Internal server error";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. `sea_orm::DbErr` is converted manually so that
/// engine failures land in `Storage` and everything else in `DbErr`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Rejection with an explicit status and message.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Failure reported by the storage engine with an engine code.
    ///
    /// Translated by `StorageFailure::classify`; unrecognised codes fall back to 500.
    #[error(transparent)]
    Storage(#[from] StorageFailure),

    /// Database error from SeaORM without an engine code (connection, decoding, ...).
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(sea_orm::DbErr),

    /// Unexpected state inside the service.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Socket errors while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        match StorageFailure::from_db_err(&err) {
            Some(failure) => AppError::Storage(failure),
            None => AppError::DbErr(err),
        }
    }
}

impl AppError {
    /// Runs the storage and domain tiers of the error translator.
    ///
    /// # Returns
    /// - `Some(DomainError)` - The error has a client-facing status and message
    /// - `None` - The error must be answered with the generic 500 response
    pub fn translate(&self) -> Option<DomainError> {
        match self {
            Self::Storage(failure) => failure.classify(),
            Self::Domain(err) => Some(*err),
            _ => None,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 / 404 - For domain rejections and recognised storage failures, with their message
/// - 500 Internal Server Error - For everything else, with the error logged server-side
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.translate() {
            Some(err) => err.into_response(),
            None => InternalServerError(self).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message to the client so engine details never
/// leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                msg: INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}
