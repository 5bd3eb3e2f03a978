pub use super::article::Entity as Article;
pub use super::comment::Entity as Comment;
pub use super::topic::Entity as Topic;
pub use super::user::Entity as User;
