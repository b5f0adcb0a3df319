use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};

use crate::app::list::{Fetch, ListView};
use crate::model::{Movie, PosterSize};
use super::theme::Palette;
use super::widgets;

pub const NO_MOVIES: &str = "No movies found";
pub const LOAD_FAILED: &str = "Failed to load movies";

pub fn render(frame: &mut Frame, view: &mut ListView, palette: Palette, area: Rect) {
    if view.is_loading() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("Loading...", palette.normal_style()))),
            area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(widgets::form::HEIGHT), // Add-movie form
            Constraint::Min(1),                        // Movie rows
        ])
        .split(area);

    widgets::form::render(frame, &view.draft, view.focus, palette, chunks[0]);
    render_rows(frame, view, palette, chunks[1]);
}

fn render_rows(frame: &mut Frame, view: &mut ListView, palette: Palette, area: Rect) {
    match &view.movies {
        Fetch::Ready(movies) if !movies.is_empty() => {
            let items: Vec<ListItem> = movies
                .iter()
                .map(|m| ListItem::new(row_lines(m, palette)))
                .collect();
            let list = List::new(items)
                .highlight_style(palette.selected_style())
                .highlight_symbol("> ");
            frame.render_stateful_widget(list, area, &mut view.list_state);
        }
        other => {
            frame.render_widget(Paragraph::new(placeholder_lines(other, palette)), area);
        }
    }
}

/// Lines shown in place of rows when there is nothing to list.
pub fn placeholder_lines(movies: &Fetch<Vec<Movie>>, palette: Palette) -> Vec<Line<'static>> {
    match movies {
        Fetch::Pending => vec![Line::from(Span::styled("Loading...", palette.normal_style()))],
        Fetch::Failed(reason) => vec![
            Line::from(Span::styled(format!("  {}", LOAD_FAILED), palette.error_style())),
            Line::from(Span::styled(format!("  {}", reason), palette.muted_style())),
        ],
        Fetch::Ready(_) => vec![Line::from(Span::styled(
            format!("  {}", NO_MOVIES),
            palette.normal_style(),
        ))],
    }
}

/// Two lines per movie: the link with its facts, then the thumbnail URL.
pub fn row_lines(movie: &Movie, palette: Palette) -> Vec<Line<'static>> {
    let mut first = vec![Span::styled(movie.title.clone(), palette.link_style())];
    if let Some(year) = movie.year {
        first.push(Span::styled(format!(" ({})", year), palette.muted_style()));
    }
    first.push(Span::raw("  "));
    first.push(Span::styled(
        movie.status.to_string(),
        palette.status_style(movie.status),
    ));
    first.push(Span::styled("  [d] delete", palette.muted_style()));

    vec![
        Line::from(first),
        Line::from(Span::styled(
            format!("    {}", movie.poster_url(PosterSize::Thumbnail)),
            palette.muted_style(),
        )),
    ]
}
