use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    AddEducationUseCase, AddExperienceUseCase, DeleteAccountUseCase, GetCurrentProfileUseCase,
    GetProfileByUserUseCase, GetProfilesUseCase, RemoveEducationUseCase, RemoveExperienceUseCase,
    UpsertProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get_current: Arc<dyn GetCurrentProfileUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertProfileUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetProfilesUseCase + Send + Sync>,
    pub get_by_user: Arc<dyn GetProfileByUserUseCase + Send + Sync>,
    pub delete_account: Arc<dyn DeleteAccountUseCase + Send + Sync>,
    pub add_experience: Arc<dyn AddExperienceUseCase + Send + Sync>,
    pub remove_experience: Arc<dyn RemoveExperienceUseCase + Send + Sync>,
    pub add_education: Arc<dyn AddEducationUseCase + Send + Sync>,
    pub remove_education: Arc<dyn RemoveEducationUseCase + Send + Sync>,
}
