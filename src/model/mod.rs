pub mod draft;
pub mod movie;

pub use draft::{Draft, DraftField, NewMovie};
pub use movie::{Movie, MovieId, PosterSize, WatchStatus};
