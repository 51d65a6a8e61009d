pub mod create_movie;
pub mod delete_movie;
pub mod fetch_movie;
pub mod update_movie;

pub use create_movie::create_movie_handler;
pub use delete_movie::delete_movie_handler;
pub use fetch_movie::{fetch_movie_handler, list_movies_handler};
pub use update_movie::update_movie_handler;
