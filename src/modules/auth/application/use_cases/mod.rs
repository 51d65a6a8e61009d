pub mod delete_user;
pub mod fetch_user;
pub mod list_users;
pub mod login_user;
pub mod refresh_token;
pub mod register_user;
pub mod update_profile;
