pub mod outgoing;

pub use outgoing::{ReviewData, ReviewPatch, ReviewRepository, ReviewRepositoryError};
