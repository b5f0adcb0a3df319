use ratatui::widgets::ListState;
use tracing::{debug, error, info, warn};

use crate::api::Request;
use crate::error::Result;
use crate::model::{Draft, DraftField, Movie, MovieId};

/// Outcome of a fetch that has to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Pending,
    Ready(T),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Rows,
    Form(DraftField),
}

pub struct ListView {
    pub movies: Fetch<Vec<Movie>>,
    pub list_state: ListState,
    pub draft: Draft,
    pub focus: Focus,
    pub dark_mode: bool,
    /// Last create/delete/validation message, shown in the status line.
    pub notice: Option<String>,
    generation: u64,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            movies: Fetch::Pending,
            list_state: ListState::default(),
            draft: Draft::default(),
            focus: Focus::Rows,
            dark_mode: false,
            notice: None,
            generation: 0,
        }
    }

    /// Start (or restart) loading the collection.
    pub fn load(&mut self) -> Request {
        self.generation += 1;
        self.movies = Fetch::Pending;
        self.list_state.select(None);
        Request::ListMovies {
            generation: self.generation,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.movies, Fetch::Pending)
    }

    /// Apply a collection response. Returns false if it was stale.
    pub fn apply_movies(&mut self, generation: u64, result: Result<Vec<Movie>>) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale movie list");
            return false;
        }
        match result {
            Ok(movies) => {
                info!(count = movies.len(), "loaded movies");
                self.list_state
                    .select(if movies.is_empty() { None } else { Some(0) });
                self.movies = Fetch::Ready(movies);
            }
            Err(e) => {
                error!("Error fetching movies: {}", e);
                self.movies = Fetch::Failed(e.to_string());
            }
        }
        true
    }

    /// Rows currently held, empty unless the load succeeded.
    pub fn rows(&self) -> &[Movie] {
        match &self.movies {
            Fetch::Ready(movies) => movies,
            _ => &[],
        }
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.list_state.selected().and_then(|i| self.rows().get(i))
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.rows().len() as i32;
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as i32;
        let next = ((current + delta) % len + len) % len;
        self.list_state.select(Some(next as usize));
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn focus_form(&mut self) {
        if let Focus::Rows = self.focus {
            self.focus = Focus::Form(DraftField::Title);
        }
    }

    pub fn leave_form(&mut self) {
        self.focus = Focus::Rows;
    }

    pub fn next_field(&mut self) {
        if let Focus::Form(field) = self.focus {
            self.focus = Focus::Form(field.next());
        }
    }

    pub fn prev_field(&mut self) {
        if let Focus::Form(field) = self.focus {
            self.focus = Focus::Form(field.prev());
        }
    }

    pub fn edit_input(&mut self, c: char) {
        if let Focus::Form(field) = self.focus {
            self.draft.input(field, c);
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Focus::Form(field) = self.focus {
            self.draft.backspace(field);
        }
    }

    pub fn toggle_draft_status(&mut self) {
        if let Focus::Form(DraftField::Status) = self.focus {
            self.draft.toggle_status();
        }
    }

    /// Turn the draft into a creation request, or note why it can't be sent.
    pub fn submit(&mut self) -> Option<Request> {
        match self.draft.to_payload() {
            Ok(movie) => {
                self.notice = None;
                Some(Request::CreateMovie { movie })
            }
            Err(e) => {
                self.notice = Some(e.to_string());
                None
            }
        }
    }

    pub fn apply_created(&mut self, result: Result<Movie>) {
        match result {
            Ok(movie) => {
                info!(id = %movie.id, title = %movie.title, "movie created");
                // The backend now holds at least this movie, so a failed
                // first load gives way to a list containing it.
                if let Fetch::Failed(_) = self.movies {
                    self.movies = Fetch::Ready(Vec::new());
                }
                if let Fetch::Ready(movies) = &mut self.movies {
                    if !movies.iter().any(|m| m.id == movie.id) {
                        movies.push(movie);
                    }
                    if self.list_state.selected().is_none() {
                        self.list_state.select(Some(0));
                    }
                }
                self.draft.reset();
                self.notice = None;
            }
            Err(e) => {
                error!("Error adding movie: {}", e);
                self.notice = Some(format!("Could not add movie: {}", e));
            }
        }
    }

    pub fn delete_selected(&self) -> Option<Request> {
        let id = self.selected_movie()?.id.clone();
        Some(Request::DeleteMovie { id })
    }

    pub fn apply_deleted(&mut self, id: &MovieId, result: Result<()>) {
        match result {
            Ok(()) => {
                info!(id = %id, "movie deleted");
                if let Fetch::Ready(movies) = &mut self.movies {
                    movies.retain(|m| &m.id != id);
                    let len = movies.len();
                    let selected = match self.list_state.selected() {
                        _ if len == 0 => None,
                        Some(i) => Some(i.min(len - 1)),
                        None => Some(0),
                    };
                    self.list_state.select(selected);
                }
                self.notice = None;
            }
            Err(e) => {
                warn!("Error deleting movie {}: {}", id, e);
                self.notice = Some(format!("Could not delete movie {}: {}", id, e));
            }
        }
    }
}
