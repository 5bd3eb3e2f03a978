//! Wire-level DTOs shared by the HTTP controllers and their tests.
//!
//! Every DTO derives `ToSchema` so the `GET /api` documentation payload can describe
//! request and response bodies.

pub mod api;
pub mod article;
pub mod comment;
pub mod topic;
