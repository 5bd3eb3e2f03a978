//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation against stored state**: checks that need the database, such as the topic
//!   whitelist of a listing
//! - **Orchestration**: coordinating repository calls, e.g. confirming an article exists
//!   before listing its comments
//! - **Not-found conditions**: turning absent rows into `DomainError`s
//! - **Domain Models**: working with domain models rather than DTOs or entity models

pub mod article;
pub mod comment;
pub mod topic;
