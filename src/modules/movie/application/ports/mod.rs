pub mod outgoing;

pub use outgoing::{MovieData, MoviePatch, MovieRepository, MovieRepositoryError};
