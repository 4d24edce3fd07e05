use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    AuthToken, CurrentUser, GetCurrentUserError, GetCurrentUserUseCase, LoginUserCommand,
    LoginUserError, LoginUserUseCase, RegisterUserCommand, RegisterUserError,
    RegisterUserUseCase,
};
use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};
use crate::modules::post::application::domain::entities::{Comment, Like, Post};
use crate::modules::post::application::ports::incoming::use_cases::{
    AddCommentCommand, AddCommentError, AddCommentUseCase, CreatePostCommand, CreatePostError,
    CreatePostUseCase, DeletePostError, DeletePostUseCase, GetPostError, GetPostUseCase,
    GetPostsError, GetPostsUseCase, LikePostError, LikePostUseCase, RemoveCommentError,
    RemoveCommentUseCase, UnlikePostError, UnlikePostUseCase,
};
use crate::modules::profile::application::domain::entities::{
    NewEducation, NewExperience, Profile, ProfileView,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    AddEducationError, AddEducationUseCase, AddExperienceError, AddExperienceUseCase,
    DeleteAccountError, DeleteAccountUseCase, GetCurrentProfileError, GetCurrentProfileUseCase,
    GetProfileByUserError, GetProfileByUserUseCase, GetProfilesError, GetProfilesUseCase,
    RemoveEducationError, RemoveEducationUseCase, RemoveExperienceError,
    RemoveExperienceUseCase, UpsertProfileCommand, UpsertProfileError, UpsertProfileUseCase,
};

/// Stores passwords as `plain$<password>` so tests can read them back.
pub struct PlainTextHasher;

#[async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("plain${}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("plain${}", password))
    }
}

// auth

pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _command: RegisterUserCommand) -> Result<AuthToken, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginUserCommand) -> Result<AuthToken, LoginUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubGetCurrentUserUseCase;

#[async_trait]
impl GetCurrentUserUseCase for StubGetCurrentUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<CurrentUser, GetCurrentUserError> {
        unimplemented!("Not used in this test")
    }
}

// profile

pub struct StubGetCurrentProfileUseCase;

#[async_trait]
impl GetCurrentProfileUseCase for StubGetCurrentProfileUseCase {
    async fn execute(&self, _owner: UserId) -> Result<ProfileView, GetCurrentProfileError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpsertProfileUseCase;

#[async_trait]
impl UpsertProfileUseCase for StubUpsertProfileUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _command: UpsertProfileCommand,
    ) -> Result<Profile, UpsertProfileError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubGetProfilesUseCase;

#[async_trait]
impl GetProfilesUseCase for StubGetProfilesUseCase {
    async fn execute(&self) -> Result<Vec<ProfileView>, GetProfilesError> {
        Ok(vec![])
    }
}

pub struct StubGetProfileByUserUseCase;

#[async_trait]
impl GetProfileByUserUseCase for StubGetProfileByUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<ProfileView, GetProfileByUserError> {
        Err(GetProfileByUserError::ProfileNotFound)
    }
}

pub struct StubDeleteAccountUseCase;

#[async_trait]
impl DeleteAccountUseCase for StubDeleteAccountUseCase {
    async fn execute(&self, _owner: UserId) -> Result<(), DeleteAccountError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubAddExperienceUseCase;

#[async_trait]
impl AddExperienceUseCase for StubAddExperienceUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _entry: NewExperience,
    ) -> Result<Profile, AddExperienceError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubRemoveExperienceUseCase;

#[async_trait]
impl RemoveExperienceUseCase for StubRemoveExperienceUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _experience_id: Uuid,
    ) -> Result<Profile, RemoveExperienceError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubAddEducationUseCase;

#[async_trait]
impl AddEducationUseCase for StubAddEducationUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _entry: NewEducation,
    ) -> Result<Profile, AddEducationError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubRemoveEducationUseCase;

#[async_trait]
impl RemoveEducationUseCase for StubRemoveEducationUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _education_id: Uuid,
    ) -> Result<Profile, RemoveEducationError> {
        unimplemented!("Not used in this test")
    }
}

// posts

pub struct StubCreatePostUseCase;

#[async_trait]
impl CreatePostUseCase for StubCreatePostUseCase {
    async fn execute(
        &self,
        _author: UserId,
        _command: CreatePostCommand,
    ) -> Result<Post, CreatePostError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubGetPostsUseCase;

#[async_trait]
impl GetPostsUseCase for StubGetPostsUseCase {
    async fn execute(&self) -> Result<Vec<Post>, GetPostsError> {
        Ok(vec![])
    }
}

pub struct StubGetPostUseCase;

#[async_trait]
impl GetPostUseCase for StubGetPostUseCase {
    async fn execute(&self, _post_id: Uuid) -> Result<Post, GetPostError> {
        Err(GetPostError::PostNotFound)
    }
}

pub struct StubDeletePostUseCase;

#[async_trait]
impl DeletePostUseCase for StubDeletePostUseCase {
    async fn execute(&self, _requester: UserId, _post_id: Uuid) -> Result<(), DeletePostError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubLikePostUseCase;

#[async_trait]
impl LikePostUseCase for StubLikePostUseCase {
    async fn execute(&self, _user: UserId, _post_id: Uuid) -> Result<Vec<Like>, LikePostError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUnlikePostUseCase;

#[async_trait]
impl UnlikePostUseCase for StubUnlikePostUseCase {
    async fn execute(&self, _user: UserId, _post_id: Uuid) -> Result<Vec<Like>, UnlikePostError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubAddCommentUseCase;

#[async_trait]
impl AddCommentUseCase for StubAddCommentUseCase {
    async fn execute(
        &self,
        _author: UserId,
        _post_id: Uuid,
        _command: AddCommentCommand,
    ) -> Result<Vec<Comment>, AddCommentError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubRemoveCommentUseCase;

#[async_trait]
impl RemoveCommentUseCase for StubRemoveCommentUseCase {
    async fn execute(
        &self,
        _requester: UserId,
        _post_id: Uuid,
        _comment_id: Uuid,
    ) -> Result<Vec<Comment>, RemoveCommentError> {
        unimplemented!("Not used in this test")
    }
}
