pub mod detail_view;
pub mod list_view;
pub mod theme;
pub mod widgets;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::app::{AppState, Route};
use theme::Palette;

pub const HEADING: &str = "Movie Watchlist";

pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let palette = Palette::new(state.list.dark_mode);
    frame.render_widget(Block::default().style(palette.background()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading + theme toggle
            Constraint::Min(3),    // Active screen
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let show_toggle = !(state.route == Route::List && state.list.is_loading());
    render_header(frame, palette, show_toggle, chunks[0]);

    match state.route {
        Route::List => list_view::render(frame, &mut state.list, palette, chunks[1]),
        Route::Detail(_) => {
            if let Some(view) = &state.detail {
                detail_view::render(frame, view, palette, chunks[1]);
            }
        }
    }

    let mode = state.key_mode();
    let notice = match state.route {
        Route::List => state.list.notice.as_deref(),
        Route::Detail(_) => None,
    };
    widgets::status_line::render(frame, mode, notice, palette, chunks[2]);
}

/// Label of the theme toggle: the mode it switches to.
pub fn theme_toggle_label(palette: Palette) -> &'static str {
    if palette.is_dark() {
        "Light Mode"
    } else {
        "Dark Mode"
    }
}

fn render_header(frame: &mut Frame, palette: Palette, show_toggle: bool, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(20)])
        .split(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        format!(" {}", HEADING),
        palette.heading_style(),
    )));
    frame.render_widget(heading, chunks[0]);

    if show_toggle {
        let toggle = Paragraph::new(Line::from(Span::styled(
            format!(" [t] {} ", theme_toggle_label(palette)),
            palette.button_style(),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(toggle, chunks[1]);
    }
}
