use chrono::Utc;
use uuid::Uuid;

use crate::modules::post::application::domain::entities::Post;
use crate::modules::profile::application::domain::entities::{
    Profile, ProfileView, SocialLinks, UserSummary,
};

pub fn profile_for(owner: Uuid) -> Profile {
    Profile {
        id: Uuid::new_v4(),
        user: owner,
        company: Some("Acme".to_string()),
        website: None,
        location: Some("Berlin".to_string()),
        status: "Developer".to_string(),
        skills: vec!["rust".to_string(), "sql".to_string()],
        bio: None,
        githubusername: None,
        social: SocialLinks::default(),
        experience: vec![],
        education: vec![],
        date: Utc::now(),
    }
}

pub fn view_for(owner: Uuid) -> ProfileView {
    ProfileView::new(
        profile_for(owner),
        Some(UserSummary {
            id: owner,
            name: "Jane".to_string(),
            avatar: "https://www.gravatar.com/avatar/abc?s=200&r=pg&d=mm".to_string(),
        }),
    )
}

pub fn post_by(author: Uuid, text: &str) -> Post {
    Post {
        id: Uuid::new_v4(),
        user: author,
        text: text.to_string(),
        name: "Jane".to_string(),
        avatar: "https://www.gravatar.com/avatar/abc?s=200&r=pg&d=mm".to_string(),
        likes: vec![],
        comments: vec![],
        date: Utc::now(),
    }
}
