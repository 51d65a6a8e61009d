pub mod auth;

pub use auth::{resolve_current_user_or_response, AuthenticatedUser};
