mod add_comment;
mod create_post;
mod delete_post;
mod get_post;
mod get_posts;
mod like_post;
mod remove_comment;
mod unlike_post;

pub use add_comment::*;
pub use create_post::*;
pub use delete_post::*;
pub use get_post::*;
pub use get_posts::*;
pub use like_post::*;
pub use remove_comment::*;
pub use unlike_post::*;
