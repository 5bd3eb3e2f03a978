use crate::server::{
    data::article::ArticleRepository,
    error::{domain::DomainError, AppError},
    model::article::{ArticleListingParams, SortColumn, SortOrder},
};
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod get_listing;
mod listing_query;
