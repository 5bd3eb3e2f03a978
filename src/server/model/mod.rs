//! Domain models and validated parameter types.
//!
//! Repositories convert entity models and query rows into these types at the data layer
//! boundary, so SeaORM models never leak into services or controllers.

pub mod article;
pub mod comment;
pub mod topic;
