mod get_current_user_service;
mod login_user_service;
mod register_user_service;

pub use get_current_user_service::GetCurrentUserService;
pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
