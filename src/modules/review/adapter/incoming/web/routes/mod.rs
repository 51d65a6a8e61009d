pub mod create_review;
pub mod delete_review;
pub mod fetch_review;
pub mod nested_reviews;
pub mod update_review;

pub use create_review::create_review_handler;
pub use delete_review::delete_review_handler;
pub use fetch_review::{fetch_review_handler, list_reviews_handler};
pub use nested_reviews::{movie_reviews_handler, user_reviews_handler};
pub use update_review::update_review_handler;
