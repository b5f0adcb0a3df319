pub mod action;
pub mod detail;
pub mod list;
pub mod route;
pub mod state;

pub use action::Action;
pub use route::Route;
pub use state::AppState;
