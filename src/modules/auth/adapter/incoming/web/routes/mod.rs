mod get_current_user;
mod login_user;
mod register_user;

pub use get_current_user::*;
pub use login_user::*;
pub use register_user::*;
