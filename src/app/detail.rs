use tracing::{debug, error};

use crate::api::Request;
use crate::error::Result;
use crate::model::{Movie, MovieId};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Movie),
    NotFound,
    Failed(String),
}

/// One mounted detail screen. A new one is created for every navigation.
pub struct DetailView {
    pub id: MovieId,
    pub state: DetailState,
    generation: u64,
}

impl DetailView {
    /// Mount the view and return the request that loads it.
    pub fn mount(id: MovieId, generation: u64) -> (Self, Request) {
        let request = Request::GetMovie {
            generation,
            id: id.clone(),
        };
        let view = Self {
            id,
            state: DetailState::Loading,
            generation,
        };
        (view, request)
    }

    /// Apply a detail response. Returns false if it belongs to another mount.
    pub fn apply(&mut self, generation: u64, result: Result<Option<Movie>>) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale movie detail");
            return false;
        }
        self.state = match result {
            Ok(Some(movie)) => DetailState::Loaded(movie),
            Ok(None) => DetailState::NotFound,
            Err(e) => {
                error!("Error fetching movie {}: {}", self.id, e);
                DetailState::Failed(e.to_string())
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WatchlistError;
    use crate::model::WatchStatus;

    fn heat() -> Movie {
        Movie {
            id: MovieId::Int(3),
            title: "Heat".into(),
            director: Some("Mann".into()),
            year: Some(1995),
            status: WatchStatus::Watched,
            poster_path: None,
        }
    }

    #[test]
    fn test_mount_starts_loading() {
        let (view, request) = DetailView::mount(MovieId::Int(3), 5);
        assert_eq!(view.state, DetailState::Loading);
        assert_eq!(
            request,
            Request::GetMovie {
                generation: 5,
                id: MovieId::Int(3)
            }
        );
    }

    #[test]
    fn test_transitions() {
        let (mut view, _) = DetailView::mount(MovieId::Int(3), 1);
        assert!(view.apply(1, Ok(Some(heat()))));
        assert_eq!(view.state, DetailState::Loaded(heat()));

        let (mut view, _) = DetailView::mount(MovieId::Int(99), 2);
        view.apply(2, Ok(None));
        assert_eq!(view.state, DetailState::NotFound);

        let (mut view, _) = DetailView::mount(MovieId::Int(4), 3);
        view.apply(3, Err(WatchlistError::Status(500)));
        assert!(matches!(view.state, DetailState::Failed(_)));
    }

    #[test]
    fn test_response_from_previous_mount_is_ignored() {
        let (mut view, _) = DetailView::mount(MovieId::Int(4), 2);
        assert!(!view.apply(1, Ok(Some(heat()))));
        assert_eq!(view.state, DetailState::Loading);
    }
}
