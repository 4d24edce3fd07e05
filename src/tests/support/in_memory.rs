//! One in-memory store behind every outgoing port, so service tests can
//! observe side effects across users, profiles and posts.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::auth::application::domain::entities::{gravatar_url, User, UserId};
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserQuery, UserQueryError, UserQueryResult, UserRepository,
    UserRepositoryError,
};
use crate::modules::post::application::domain::entities::{Comment, Like, Post};
use crate::modules::post::application::ports::outgoing::{
    CreatePostData, PostRepository, PostRepositoryError,
};
use crate::modules::profile::application::domain::entities::{
    Education, Experience, Profile, ProfileFields, ProfileView, SocialLinks, UserSummary,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileQuery, ProfileQueryError, ProfileRepository, ProfileRepositoryError,
};

#[derive(Default)]
struct State {
    users: Vec<User>,
    profiles: Vec<Profile>,
    posts: Vec<Post>,
    failure: Option<String>,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Makes every port call fail with `msg` from now on.
    pub fn fail_with(&self, msg: &str) {
        self.lock().failure = Some(msg.to_string());
    }

    fn failure(&self) -> Option<String> {
        self.lock().failure.clone()
    }

    /// Adds a user whose password is `"password"` under `PlainTextHasher`.
    pub fn seed_user(&self, name: &str, email: &str) -> UserId {
        let id = UserId::from(Uuid::new_v4());
        self.lock().users.push(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            avatar: gravatar_url(email),
            password_hash: "plain$password".to_string(),
            date: Utc::now(),
        });
        id
    }

    pub fn seed_profile(&self, owner: UserId, status: &str) -> Profile {
        let profile = Profile {
            id: Uuid::new_v4(),
            user: owner.value(),
            company: None,
            website: None,
            location: None,
            status: status.to_string(),
            skills: vec!["rust".to_string()],
            bio: None,
            githubusername: None,
            social: SocialLinks::default(),
            experience: vec![],
            education: vec![],
            date: Utc::now(),
        };
        self.lock().profiles.push(profile.clone());
        profile
    }

    /// Each seeded post is dated one second after the previous one.
    pub fn seed_post(&self, owner: UserId, text: &str) -> Post {
        let mut state = self.lock();
        let author = state.users.iter().find(|u| u.id == owner).cloned();
        let post = Post {
            id: Uuid::new_v4(),
            user: owner.value(),
            text: text.to_string(),
            name: author.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
            avatar: author.map(|u| u.avatar).unwrap_or_default(),
            likes: vec![],
            comments: vec![],
            date: Utc::now() + Duration::seconds(state.posts.len() as i64),
        };
        state.posts.push(post.clone());
        post
    }

    pub fn users(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    pub fn profiles(&self) -> Vec<Profile> {
        self.lock().profiles.clone()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.lock().posts.clone()
    }

    fn to_query_result(user: &User) -> UserQueryResult {
        UserQueryResult {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
            password_hash: user.password_hash.clone(),
            date: user.date,
        }
    }

    fn view(state: &State, profile: &Profile) -> ProfileView {
        let user = state
            .users
            .iter()
            .find(|u| u.id.value() == profile.user)
            .map(|u| UserSummary {
                id: u.id.value(),
                name: u.name.clone(),
                avatar: u.avatar.clone(),
            });
        ProfileView::new(profile.clone(), user)
    }

    fn with_profile(
        &self,
        owner: UserId,
        f: impl FnOnce(&mut Profile),
    ) -> Result<Profile, ProfileRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(ProfileRepositoryError::DatabaseError(msg));
        }
        let mut state = self.lock();
        let profile = state
            .profiles
            .iter_mut()
            .find(|p| p.user == owner.value())
            .ok_or(ProfileRepositoryError::NotFound)?;
        f(profile);
        Ok(profile.clone())
    }

    fn with_post(
        &self,
        post_id: Uuid,
        f: impl FnOnce(&mut Post),
    ) -> Result<Post, PostRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(PostRepositoryError::DatabaseError(msg));
        }
        let mut state = self.lock();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(PostRepositoryError::NotFound)?;
        f(post);
        Ok(post.clone())
    }
}

#[async_trait]
impl UserQuery for InMemoryStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        if let Some(msg) = self.failure() {
            return Err(UserQueryError::DatabaseError(msg));
        }
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(Self::to_query_result))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        if let Some(msg) = self.failure() {
            return Err(UserQueryError::DatabaseError(msg));
        }
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .map(Self::to_query_result))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(UserRepositoryError::DatabaseError(msg));
        }
        let mut state = self.lock();
        if state
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        let user = User {
            id: UserId::from(Uuid::new_v4()),
            name: data.name,
            email: data.email,
            avatar: data.avatar,
            password_hash: data.password_hash,
            date: Utc::now(),
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(UserRepositoryError::DatabaseError(msg));
        }
        self.lock().users.retain(|u| u.id != user_id);
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn find_by_user(&self, owner: UserId) -> Result<Option<Profile>, ProfileRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(ProfileRepositoryError::DatabaseError(msg));
        }
        Ok(self
            .lock()
            .profiles
            .iter()
            .find(|p| p.user == owner.value())
            .cloned())
    }

    async fn create_profile(
        &self,
        owner: UserId,
        fields: ProfileFields,
    ) -> Result<Profile, ProfileRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(ProfileRepositoryError::DatabaseError(msg));
        }
        let mut state = self.lock();
        if state.profiles.iter().any(|p| p.user == owner.value()) {
            return Err(ProfileRepositoryError::AlreadyExists);
        }
        let profile = Profile {
            id: Uuid::new_v4(),
            user: owner.value(),
            company: fields.company,
            website: fields.website,
            location: fields.location,
            status: fields.status,
            skills: fields.skills,
            bio: fields.bio,
            githubusername: fields.githubusername,
            social: fields.social,
            experience: vec![],
            education: vec![],
            date: Utc::now(),
        };
        state.profiles.push(profile.clone());
        Ok(profile)
    }

    async fn update_profile(
        &self,
        owner: UserId,
        fields: ProfileFields,
    ) -> Result<Profile, ProfileRepositoryError> {
        self.with_profile(owner, |p| fields.apply_to(p))
    }

    async fn save_experience(
        &self,
        owner: UserId,
        experience: Vec<Experience>,
    ) -> Result<Profile, ProfileRepositoryError> {
        self.with_profile(owner, |p| p.experience = experience)
    }

    async fn save_education(
        &self,
        owner: UserId,
        education: Vec<Education>,
    ) -> Result<Profile, ProfileRepositoryError> {
        self.with_profile(owner, |p| p.education = education)
    }

    async fn delete_by_user(&self, owner: UserId) -> Result<(), ProfileRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(ProfileRepositoryError::DatabaseError(msg));
        }
        self.lock().profiles.retain(|p| p.user != owner.value());
        Ok(())
    }
}

#[async_trait]
impl ProfileQuery for InMemoryStore {
    async fn find_view_by_user(
        &self,
        owner: UserId,
    ) -> Result<Option<ProfileView>, ProfileQueryError> {
        if let Some(msg) = self.failure() {
            return Err(ProfileQueryError::DatabaseError(msg));
        }
        let state = self.lock();
        Ok(state
            .profiles
            .iter()
            .find(|p| p.user == owner.value())
            .map(|p| Self::view(&state, p)))
    }

    async fn list_views(&self) -> Result<Vec<ProfileView>, ProfileQueryError> {
        if let Some(msg) = self.failure() {
            return Err(ProfileQueryError::DatabaseError(msg));
        }
        let state = self.lock();
        Ok(state.profiles.iter().map(|p| Self::view(&state, p)).collect())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn create_post(&self, data: CreatePostData) -> Result<Post, PostRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(PostRepositoryError::DatabaseError(msg));
        }
        let post = Post {
            id: Uuid::new_v4(),
            user: data.owner.value(),
            text: data.text,
            name: data.name,
            avatar: data.avatar,
            likes: vec![],
            comments: vec![],
            date: Utc::now(),
        };
        self.lock().posts.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(PostRepositoryError::DatabaseError(msg));
        }
        Ok(self.lock().posts.iter().find(|p| p.id == post_id).cloned())
    }

    async fn list_newest_first(&self) -> Result<Vec<Post>, PostRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(PostRepositoryError::DatabaseError(msg));
        }
        let mut posts: Vec<Post> = self.lock().posts.iter().rev().cloned().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(PostRepositoryError::DatabaseError(msg));
        }
        let mut state = self.lock();
        let before = state.posts.len();
        state.posts.retain(|p| p.id != post_id);
        if state.posts.len() == before {
            return Err(PostRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn save_likes(&self, post_id: Uuid, likes: Vec<Like>) -> Result<Post, PostRepositoryError> {
        self.with_post(post_id, |p| p.likes = likes)
    }

    async fn save_comments(
        &self,
        post_id: Uuid,
        comments: Vec<Comment>,
    ) -> Result<Post, PostRepositoryError> {
        self.with_post(post_id, |p| p.comments = comments)
    }

    async fn delete_by_owner(&self, owner: UserId) -> Result<u64, PostRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(PostRepositoryError::DatabaseError(msg));
        }
        let mut state = self.lock();
        let before = state.posts.len();
        state.posts.retain(|p| p.user != owner.value());
        Ok((before - state.posts.len()) as u64)
    }
}
