mod get_current_user;
mod login_user;
mod register_user;

pub use get_current_user::{CurrentUser, GetCurrentUserError, GetCurrentUserUseCase};
pub use login_user::{LoginUserCommand, LoginUserError, LoginUserUseCase};
pub use register_user::{AuthToken, RegisterUserCommand, RegisterUserError, RegisterUserUseCase};
