use crate::server::{
    data::comment::CommentRepository,
    error::{domain::DomainError, AppError},
    model::comment::CreateCommentParams,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
