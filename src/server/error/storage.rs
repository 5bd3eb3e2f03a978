//! Storage-engine failures and their translation into domain rejections.
//!
//! Repositories surface `sea_orm::DbErr`. When the error carries a database-level
//! failure with an engine code it is lifted into a [`StorageFailure`] so the error
//! translator can match on the code instead of probing driver-specific types.

use sea_orm::{DbErr, RuntimeErr};
use sqlx::postgres::PgDatabaseError;
use thiserror::Error;

use super::domain::DomainError;

/// PostgreSQL: invalid text representation for the target type.
pub const PG_INVALID_TEXT_REPRESENTATION: &str = "22P02";
/// PostgreSQL: NOT NULL constraint violated.
pub const PG_NOT_NULL_VIOLATION: &str = "23502";
/// PostgreSQL: foreign key constraint violated.
pub const PG_FOREIGN_KEY_VIOLATION: &str = "23503";
/// SQLite extended result code `SQLITE_CONSTRAINT_NOTNULL`.
pub const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";
/// SQLite extended result code `SQLITE_CONSTRAINT_FOREIGNKEY`.
pub const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";

/// Table referenced by `comments.article_id`.
pub const ARTICLES_TABLE: &str = "articles";
/// Table referenced by `articles.author` and `comments.author`.
pub const USERS_TABLE: &str = "users";

/// Coarse classification of an engine code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFailureKind {
    /// A value could not be stored as given: bad text representation or a missing
    /// required column.
    MalformedValue,
    /// A foreign key points at a row that does not exist.
    ForeignKeyViolation,
    /// Anything the translator does not recognise.
    Other,
}

/// A failure reported by the storage engine for a single statement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("storage failure {code}: {message}")]
pub struct StorageFailure {
    /// Engine-specific code (SQLSTATE on PostgreSQL, extended result code on SQLite).
    pub code: String,
    /// Primary message from the engine. Logged, never sent to clients.
    pub message: String,
    /// Optional detail text, e.g. `Key (author)=(x) is not present in table "users".`
    pub detail: Option<String>,
    /// Table whose row was missing when `code` is a foreign key violation.
    pub referenced_table: Option<String>,
}

impl StorageFailure {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            detail: None,
            referenced_table: None,
        }
    }

    /// Attaches the engine detail text, extracting the referenced table when the detail
    /// has the PostgreSQL foreign key shape.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        if self.referenced_table.is_none() {
            self.referenced_table = parse_referenced_table(&detail);
        }
        self.detail = Some(detail);
        self
    }

    /// Records which referenced table was missing a row.
    ///
    /// Used when the engine does not say so itself (SQLite).
    pub fn with_referenced_table(mut self, table: impl Into<String>) -> Self {
        self.referenced_table = Some(table.into());
        self
    }

    /// Lifts a `DbErr` into a `StorageFailure` when it wraps a database error with a code.
    ///
    /// # Returns
    /// - `Some(StorageFailure)` - The driver reported an engine-level failure
    /// - `None` - Connection, decoding and ORM-level errors, which carry no engine code
    pub fn from_db_err(err: &DbErr) -> Option<Self> {
        let sqlx_err = match err {
            DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => e,
            _ => return None,
        };

        let db_err = sqlx_err.as_database_error()?;
        let code = db_err.code()?.into_owned();
        let failure = Self::new(code, db_err.message());

        let detail = db_err
            .try_downcast_ref::<PgDatabaseError>()
            .and_then(PgDatabaseError::detail);

        Some(match detail {
            Some(detail) => failure.with_detail(detail),
            None => failure,
        })
    }

    pub fn kind(&self) -> StorageFailureKind {
        match self.code.as_str() {
            PG_INVALID_TEXT_REPRESENTATION | PG_NOT_NULL_VIOLATION | SQLITE_CONSTRAINT_NOTNULL => {
                StorageFailureKind::MalformedValue
            }
            PG_FOREIGN_KEY_VIOLATION | SQLITE_CONSTRAINT_FOREIGNKEY => {
                StorageFailureKind::ForeignKeyViolation
            }
            _ => StorageFailureKind::Other,
        }
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        self.kind() == StorageFailureKind::ForeignKeyViolation
    }

    /// Storage-failure tier of the error translator.
    ///
    /// # Returns
    /// - `Some(DomainError::MalformedBody)` - Bad text representation or NOT NULL violation
    /// - `Some(DomainError::ArticleNotFound)` - Foreign key into `articles` violated
    /// - `Some(DomainError::UserNotFound)` - Foreign key into `users` violated
    /// - `None` - Unrecognised code, or a foreign key violation against another table
    pub fn classify(&self) -> Option<DomainError> {
        match self.kind() {
            StorageFailureKind::MalformedValue => Some(DomainError::MalformedBody),
            StorageFailureKind::ForeignKeyViolation => {
                match self.referenced_table.as_deref() {
                    Some(ARTICLES_TABLE) => Some(DomainError::ArticleNotFound),
                    Some(USERS_TABLE) => Some(DomainError::UserNotFound),
                    _ => None,
                }
            }
            StorageFailureKind::Other => None,
        }
    }
}

/// Extracts `t` from `... is not present in table "t".`
fn parse_referenced_table(detail: &str) -> Option<String> {
    let (_, rest) = detail.split_once("is not present in table \"")?;
    let (table, _) = rest.split_once('"')?;
    Some(table.to_string())
}
