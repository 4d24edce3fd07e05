mod add_comment_service;
mod create_post_service;
mod delete_post_service;
mod get_post_service;
mod get_posts_service;
mod like_post_service;
mod remove_comment_service;
mod unlike_post_service;

pub use add_comment_service::AddCommentService;
pub use create_post_service::CreatePostService;
pub use delete_post_service::DeletePostService;
pub use get_post_service::GetPostService;
pub use get_posts_service::GetPostsService;
pub use like_post_service::LikePostService;
pub use remove_comment_service::RemoveCommentService;
pub use unlike_post_service::UnlikePostService;
