pub mod auth;
pub mod movie;
pub mod review;
pub mod watchlist;
