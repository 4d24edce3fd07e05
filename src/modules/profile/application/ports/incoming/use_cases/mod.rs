mod add_education;
mod add_experience;
mod delete_account;
mod get_current_profile;
mod get_profile_by_user;
mod get_profiles;
mod remove_education;
mod remove_experience;
mod upsert_profile;

pub use add_education::{AddEducationError, AddEducationUseCase};
pub use add_experience::{AddExperienceError, AddExperienceUseCase};
pub use delete_account::{DeleteAccountError, DeleteAccountUseCase};
pub use get_current_profile::{GetCurrentProfileError, GetCurrentProfileUseCase};
pub use get_profile_by_user::{GetProfileByUserError, GetProfileByUserUseCase};
pub use get_profiles::{GetProfilesError, GetProfilesUseCase};
pub use remove_education::{RemoveEducationError, RemoveEducationUseCase};
pub use remove_experience::{RemoveExperienceError, RemoveExperienceUseCase};
pub use upsert_profile::{UpsertProfileCommand, UpsertProfileError, UpsertProfileUseCase};
