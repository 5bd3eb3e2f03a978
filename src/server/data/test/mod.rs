mod article;
mod comment;
mod topic;
