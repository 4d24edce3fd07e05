mod post_repository;

pub use post_repository::{CreatePostData, PostRepository, PostRepositoryError};
