pub mod client;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Movie, MovieId, NewMovie};

pub use client::{ApiConfig, HttpMovieApi};

/// The backend's movie resource.
#[async_trait]
pub trait MovieApi: Send + Sync {
    async fn list_movies(&self) -> Result<Vec<Movie>>;
    /// `Ok(None)` when the backend says the movie does not exist.
    async fn get_movie(&self, id: &MovieId) -> Result<Option<Movie>>;
    async fn create_movie(&self, movie: &NewMovie) -> Result<Movie>;
    async fn delete_movie(&self, id: &MovieId) -> Result<()>;
}

/// Work the views ask the event loop to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    ListMovies { generation: u64 },
    GetMovie { generation: u64, id: MovieId },
    CreateMovie { movie: NewMovie },
    DeleteMovie { id: MovieId },
}

#[derive(Debug)]
pub enum Response {
    Movies {
        generation: u64,
        result: Result<Vec<Movie>>,
    },
    Movie {
        generation: u64,
        result: Result<Option<Movie>>,
    },
    Created(Result<Movie>),
    Deleted {
        id: MovieId,
        result: Result<()>,
    },
}

pub async fn execute(api: &dyn MovieApi, request: Request) -> Response {
    match request {
        Request::ListMovies { generation } => Response::Movies {
            generation,
            result: api.list_movies().await,
        },
        Request::GetMovie { generation, id } => Response::Movie {
            generation,
            result: api.get_movie(&id).await,
        },
        Request::CreateMovie { movie } => Response::Created(api.create_movie(&movie).await),
        Request::DeleteMovie { id } => {
            let result = api.delete_movie(&id).await;
            Response::Deleted { id, result }
        }
    }
}
