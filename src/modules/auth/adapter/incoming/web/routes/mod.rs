mod login_user;
mod register_user;

pub use login_user::{login_user_handler, __path_login_user_handler};
pub use register_user::{register_user_handler, __path_register_user_handler};
