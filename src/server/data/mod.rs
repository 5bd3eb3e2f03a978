//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that build and execute the queries and
//! single-statement mutations for each domain in the application. Repositories use SeaORM
//! entity models and query rows internally and return domain models, so the data layer is
//! the only place that knows about the relational schema.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

#[cfg(test)]
mod test;
