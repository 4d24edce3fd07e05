mod add_education;
mod add_experience;
mod delete_account;
mod get_current_profile;
mod get_profile_by_user;
mod get_profiles;
mod remove_education;
mod remove_experience;
mod upsert_profile;

pub use add_education::*;
pub use add_experience::*;
pub use delete_account::*;
pub use get_current_profile::*;
pub use get_profile_by_user::*;
pub use get_profiles::*;
pub use remove_education::*;
pub use remove_experience::*;
pub use upsert_profile::*;
