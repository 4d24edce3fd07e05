mod add_education_service;
mod add_experience_service;
mod delete_account_service;
mod get_current_profile_service;
mod get_profile_by_user_service;
mod get_profiles_service;
mod remove_education_service;
mod remove_experience_service;
mod upsert_profile_service;

pub use add_education_service::AddEducationService;
pub use add_experience_service::AddExperienceService;
pub use delete_account_service::DeleteAccountService;
pub use get_current_profile_service::GetCurrentProfileService;
pub use get_profile_by_user_service::GetProfileByUserService;
pub use get_profiles_service::GetProfilesService;
pub use remove_education_service::RemoveEducationService;
pub use remove_experience_service::RemoveExperienceService;
pub use upsert_profile_service::UpsertProfileService;
