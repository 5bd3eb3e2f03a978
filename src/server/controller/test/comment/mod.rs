use super::*;

mod delete_comment;
mod post_article_comment;
