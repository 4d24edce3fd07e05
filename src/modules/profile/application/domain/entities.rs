use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.youtube.is_none()
            && self.twitter.is_none()
            && self.facebook.is_none()
            && self.linkedin.is_none()
            && self.instagram.is_none()
    }

    /// Links present in `update` replace stored ones; the rest are kept.
    pub fn merged_with(&self, update: &SocialLinks) -> SocialLinks {
        SocialLinks {
            youtube: update.youtube.clone().or_else(|| self.youtube.clone()),
            twitter: update.twitter.clone().or_else(|| self.twitter.clone()),
            facebook: update.facebook.clone().or_else(|| self.facebook.clone()),
            linkedin: update.linkedin.clone().or_else(|| self.linkedin.clone()),
            instagram: update.instagram.clone().or_else(|| self.instagram.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Experience {
    pub fn new(data: NewExperience) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: data.title,
            company: data.company,
            location: data.location,
            from: data.from,
            to: data.to,
            current: data.current,
            description: data.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewEducation {
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Education {
    pub fn new(data: NewEducation) -> Self {
        Self {
            id: Uuid::new_v4(),
            school: data.school,
            degree: data.degree,
            fieldofstudy: data.fieldofstudy,
            from: data.from,
            to: data.to,
            current: data.current,
            description: data.description,
        }
    }
}

/// A user's developer profile. `user` is the owning user's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub user: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

impl Profile {
    /// Newest entry first.
    pub fn add_experience(&mut self, entry: Experience) {
        self.experience.insert(0, entry);
    }

    pub fn remove_experience(&mut self, id: Uuid) -> Option<Experience> {
        let index = self.experience.iter().position(|e| e.id == id)?;
        Some(self.experience.remove(index))
    }

    /// Newest entry first.
    pub fn add_education(&mut self, entry: Education) {
        self.education.insert(0, entry);
    }

    pub fn remove_education(&mut self, id: Uuid) -> Option<Education> {
        let index = self.education.iter().position(|e| e.id == id)?;
        Some(self.education.remove(index))
    }
}

/// Fields written by one create-or-update request.
///
/// `None` means "not supplied": on update the stored value is kept.
/// `status` and `skills` are always supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFields {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub social: SocialLinks,
}

impl ProfileFields {
    /// Applies these fields over `profile`, the way an update persists them.
    pub fn apply_to(&self, profile: &mut Profile) {
        fn keep(target: &mut Option<String>, value: &Option<String>) {
            if value.is_some() {
                *target = value.clone();
            }
        }

        keep(&mut profile.company, &self.company);
        keep(&mut profile.website, &self.website);
        keep(&mut profile.location, &self.location);
        keep(&mut profile.bio, &self.bio);
        keep(&mut profile.githubusername, &self.githubusername);
        profile.status = self.status.clone();
        profile.skills = self.skills.clone();
        profile.social = profile.social.merged_with(&self.social);
    }
}

/// `"a, b ,c"` becomes `["a", "b", "c"]`; empty tokens are dropped.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

/// Profile with its owner resolved to name and avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileView {
    pub id: Uuid,
    /// `null` when the owning user no longer exists.
    pub user: Option<UserSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

impl ProfileView {
    pub fn new(profile: Profile, user: Option<UserSummary>) -> Self {
        Self {
            id: profile.id,
            user,
            company: profile.company,
            website: profile.website,
            location: profile.location,
            status: profile.status,
            skills: profile.skills,
            bio: profile.bio,
            githubusername: profile.githubusername,
            social: profile.social,
            experience: profile.experience,
            education: profile.education,
            date: profile.date,
        }
    }
}
