use crate::server::data::topic::TopicRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
