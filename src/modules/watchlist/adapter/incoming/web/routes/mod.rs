pub mod add_entry;
pub mod check_entry;
pub mod list_watchlist;
pub mod remove_entry;

pub use add_entry::add_watchlist_entry_handler;
pub use check_entry::check_watchlist_entry_handler;
pub use list_watchlist::user_watchlist_handler;
pub use remove_entry::remove_watchlist_entry_handler;
