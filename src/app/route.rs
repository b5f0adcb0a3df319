use crate::error::{Result, WatchlistError};
use crate::model::MovieId;

/// Navigation location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    List,
    /// `/movies/{id}`
    Detail(MovieId),
}

impl Route {
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::List);
        }
        match trimmed.strip_prefix("/movies/") {
            Some(id) if !id.is_empty() && !id.contains('/') => {
                Ok(Route::Detail(MovieId::parse(id)))
            }
            _ => Err(WatchlistError::InvalidRoute(path.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(id) => format!("/movies/{}", id),
        }
    }
}
