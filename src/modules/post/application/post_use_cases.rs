use std::sync::Arc;

use crate::modules::post::application::ports::incoming::use_cases::{
    AddCommentUseCase, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, GetPostsUseCase,
    LikePostUseCase, RemoveCommentUseCase, UnlikePostUseCase,
};

#[derive(Clone)]
pub struct PostUseCases {
    pub create: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetPostsUseCase + Send + Sync>,
    pub get_by_id: Arc<dyn GetPostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePostUseCase + Send + Sync>,
    pub like: Arc<dyn LikePostUseCase + Send + Sync>,
    pub unlike: Arc<dyn UnlikePostUseCase + Send + Sync>,
    pub add_comment: Arc<dyn AddCommentUseCase + Send + Sync>,
    pub remove_comment: Arc<dyn RemoveCommentUseCase + Send + Sync>,
}
