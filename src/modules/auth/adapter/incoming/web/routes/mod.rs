pub mod delete_user;
pub mod fetch_user;
pub mod list_users;
pub mod login_user;
pub mod me;
pub mod refresh_token;
pub mod register_user;
pub mod update_user;

pub use delete_user::delete_user_handler;
pub use fetch_user::{fetch_user_by_id_handler, fetch_user_by_username_handler};
pub use list_users::list_users_handler;
pub use login_user::login_user_handler;
pub use me::current_user_handler;
pub use refresh_token::refresh_token_handler;
pub use register_user::register_user_handler;
pub use update_user::update_user_handler;
