use tracing::debug;

use crate::api::{Request, Response};
use crate::app::action::KeyMode;
use crate::app::Action;
use crate::app::detail::DetailView;
use crate::app::list::{Focus, ListView};
use crate::app::route::Route;

pub struct AppState {
    pub route: Route,
    pub list: ListView,
    /// Present only while a detail route is active.
    pub detail: Option<DetailView>,
    pub should_quit: bool,
    mounts: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            route: Route::List,
            list: ListView::new(),
            detail: None,
            should_quit: false,
            mounts: 0,
        }
    }

    /// Requests to issue when the application comes up on `route`.
    pub fn start(&mut self, route: Route) -> Vec<Request> {
        let mut requests = vec![self.list.load()];
        requests.extend(self.navigate(route));
        requests
    }

    /// Switch screens. Entering a detail route mounts a fresh view.
    pub fn navigate(&mut self, route: Route) -> Option<Request> {
        debug!(path = %route.path(), "navigate");
        self.route = route.clone();
        match route {
            Route::List => {
                self.detail = None;
                None
            }
            Route::Detail(id) => {
                self.mounts += 1;
                let (view, request) = DetailView::mount(id, self.mounts);
                self.detail = Some(view);
                Some(request)
            }
        }
    }

    pub fn key_mode(&self) -> KeyMode {
        match self.route {
            Route::List => KeyMode::for_list(self.list.focus),
            Route::Detail(_) => KeyMode::Detail,
        }
    }

    pub fn handle_action(&mut self, action: Action) -> Option<Request> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::ToggleTheme => {
                self.list.toggle_theme();
                None
            }
            Action::Back => self.navigate(Route::List),
            _ if self.list.is_loading() => None,
            Action::MoveUp => {
                self.list.move_selection(-1);
                None
            }
            Action::MoveDown => {
                self.list.move_selection(1);
                None
            }
            Action::PageUp => {
                self.list.move_selection(-10);
                None
            }
            Action::PageDown => {
                self.list.move_selection(10);
                None
            }
            Action::Open => {
                let id = self.list.selected_movie()?.id.clone();
                self.navigate(Route::Detail(id))
            }
            Action::Reload => Some(self.list.load()),
            Action::Delete => self.list.delete_selected(),
            Action::FocusForm => {
                self.list.focus_form();
                None
            }
            Action::LeaveForm => {
                self.list.leave_form();
                None
            }
            Action::NextField => {
                self.list.next_field();
                None
            }
            Action::PrevField => {
                self.list.prev_field();
                None
            }
            Action::FieldInput(c) => {
                self.list.edit_input(c);
                None
            }
            Action::FieldBackspace => {
                self.list.edit_backspace();
                None
            }
            Action::ToggleStatus => {
                self.list.toggle_draft_status();
                None
            }
            Action::Submit => {
                if let Focus::Form(_) = self.list.focus {
                    self.list.submit()
                } else {
                    None
                }
            }
        }
    }

    pub fn handle_response(&mut self, response: Response) {
        match response {
            Response::Movies { generation, result } => {
                self.list.apply_movies(generation, result);
            }
            Response::Movie { generation, result } => match self.detail.as_mut() {
                Some(view) => {
                    view.apply(generation, result);
                }
                None => debug!(generation, "movie detail arrived after unmount"),
            },
            Response::Created(result) => self.list.apply_created(result),
            Response::Deleted { id, result } => self.list.apply_deleted(&id, result),
        }
    }
}
