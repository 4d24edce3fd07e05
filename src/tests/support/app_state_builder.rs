use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{RegisterUserUseCase, LoginUserUseCase, GetCurrentUserUseCase};
use crate::modules::post::application::ports::incoming::use_cases::{CreatePostUseCase, GetPostsUseCase, GetPostUseCase, DeletePostUseCase, LikePostUseCase, UnlikePostUseCase, AddCommentUseCase, RemoveCommentUseCase};
use crate::modules::post::application::post_use_cases::PostUseCases;
use crate::modules::profile::application::ports::incoming::use_cases::{GetCurrentProfileUseCase, UpsertProfileUseCase, GetProfilesUseCase, GetProfileByUserUseCase, DeleteAccountUseCase, AddExperienceUseCase, RemoveExperienceUseCase, AddEducationUseCase, RemoveEducationUseCase};
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Starts from stubs for every use case; tests swap in the ones they exercise.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    profile: ProfileUseCases,
    post: PostUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
                current_user: Arc::new(StubGetCurrentUserUseCase),
            },
            profile: ProfileUseCases {
                get_current: Arc::new(StubGetCurrentProfileUseCase),
                upsert: Arc::new(StubUpsertProfileUseCase),
                get_list: Arc::new(StubGetProfilesUseCase),
                get_by_user: Arc::new(StubGetProfileByUserUseCase),
                delete_account: Arc::new(StubDeleteAccountUseCase),
                add_experience: Arc::new(StubAddExperienceUseCase),
                remove_experience: Arc::new(StubRemoveExperienceUseCase),
                add_education: Arc::new(StubAddEducationUseCase),
                remove_education: Arc::new(StubRemoveEducationUseCase),
            },
            post: PostUseCases {
                create: Arc::new(StubCreatePostUseCase),
                get_list: Arc::new(StubGetPostsUseCase),
                get_by_id: Arc::new(StubGetPostUseCase),
                delete: Arc::new(StubDeletePostUseCase),
                like: Arc::new(StubLikePostUseCase),
                unlike: Arc::new(StubUnlikePostUseCase),
                add_comment: Arc::new(StubAddCommentUseCase),
                remove_comment: Arc::new(StubRemoveCommentUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: impl RegisterUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_current_user(mut self, uc: impl GetCurrentUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.current_user = Arc::new(uc);
        self
    }

    pub fn with_get_current_profile(mut self, uc: impl GetCurrentProfileUseCase + Send + Sync + 'static) -> Self {
        self.profile.get_current = Arc::new(uc);
        self
    }

    pub fn with_upsert_profile(mut self, uc: impl UpsertProfileUseCase + Send + Sync + 'static) -> Self {
        self.profile.upsert = Arc::new(uc);
        self
    }

    pub fn with_get_profiles(mut self, uc: impl GetProfilesUseCase + Send + Sync + 'static) -> Self {
        self.profile.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_profile_by_user(mut self, uc: impl GetProfileByUserUseCase + Send + Sync + 'static) -> Self {
        self.profile.get_by_user = Arc::new(uc);
        self
    }

    pub fn with_delete_account(mut self, uc: impl DeleteAccountUseCase + Send + Sync + 'static) -> Self {
        self.profile.delete_account = Arc::new(uc);
        self
    }

    pub fn with_add_experience(mut self, uc: impl AddExperienceUseCase + Send + Sync + 'static) -> Self {
        self.profile.add_experience = Arc::new(uc);
        self
    }

    pub fn with_remove_experience(mut self, uc: impl RemoveExperienceUseCase + Send + Sync + 'static) -> Self {
        self.profile.remove_experience = Arc::new(uc);
        self
    }

    pub fn with_add_education(mut self, uc: impl AddEducationUseCase + Send + Sync + 'static) -> Self {
        self.profile.add_education = Arc::new(uc);
        self
    }

    pub fn with_remove_education(mut self, uc: impl RemoveEducationUseCase + Send + Sync + 'static) -> Self {
        self.profile.remove_education = Arc::new(uc);
        self
    }

    pub fn with_create_post(mut self, uc: impl CreatePostUseCase + Send + Sync + 'static) -> Self {
        self.post.create = Arc::new(uc);
        self
    }

    pub fn with_get_posts(mut self, uc: impl GetPostsUseCase + Send + Sync + 'static) -> Self {
        self.post.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_post(mut self, uc: impl GetPostUseCase + Send + Sync + 'static) -> Self {
        self.post.get_by_id = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl DeletePostUseCase + Send + Sync + 'static) -> Self {
        self.post.delete = Arc::new(uc);
        self
    }

    pub fn with_like_post(mut self, uc: impl LikePostUseCase + Send + Sync + 'static) -> Self {
        self.post.like = Arc::new(uc);
        self
    }

    pub fn with_unlike_post(mut self, uc: impl UnlikePostUseCase + Send + Sync + 'static) -> Self {
        self.post.unlike = Arc::new(uc);
        self
    }

    pub fn with_add_comment(mut self, uc: impl AddCommentUseCase + Send + Sync + 'static) -> Self {
        self.post.add_comment = Arc::new(uc);
        self
    }

    pub fn with_remove_comment(mut self, uc: impl RemoveCommentUseCase + Send + Sync + 'static) -> Self {
        self.post.remove_comment = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            profile: self.profile,
            post: self.post,
        })
    }
}
