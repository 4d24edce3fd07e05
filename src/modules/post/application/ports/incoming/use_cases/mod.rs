mod add_comment;
mod create_post;
mod delete_post;
mod get_post;
mod get_posts;
mod like_post;
mod remove_comment;
mod unlike_post;

pub use add_comment::{AddCommentCommand, AddCommentError, AddCommentUseCase};
pub use create_post::{CreatePostCommand, CreatePostError, CreatePostUseCase};
pub use delete_post::{DeletePostError, DeletePostUseCase};
pub use get_post::{GetPostError, GetPostUseCase};
pub use get_posts::{GetPostsError, GetPostsUseCase};
pub use like_post::{LikePostError, LikePostUseCase};
pub use remove_comment::{RemoveCommentError, RemoveCommentUseCase};
pub use unlike_post::{UnlikePostError, UnlikePostUseCase};
