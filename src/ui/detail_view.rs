use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::detail::{DetailState, DetailView};
use crate::model::PosterSize;
use super::theme::Palette;

pub const NOT_FOUND: &str = "Movie not found";

pub fn render(frame: &mut Frame, view: &DetailView, palette: Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.muted_style());
    let paragraph = Paragraph::new(detail_lines(&view.state, palette))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn detail_lines(state: &DetailState, palette: Palette) -> Vec<Line<'static>> {
    match state {
        DetailState::Loading => {
            vec![Line::from(Span::styled("Loading...", palette.normal_style()))]
        }
        DetailState::NotFound => vec![Line::from(Span::styled(NOT_FOUND, palette.error_style()))],
        DetailState::Failed(reason) => vec![
            Line::from(Span::styled(NOT_FOUND, palette.error_style())),
            Line::from(Span::styled(format!("({})", reason), palette.muted_style())),
        ],
        DetailState::Loaded(movie) => {
            let field = |label: &'static str, value: String| {
                Line::from(vec![
                    Span::styled(label, palette.label_style()),
                    Span::styled(value, palette.normal_style()),
                ])
            };
            vec![
                Line::from(Span::styled(movie.title.clone(), palette.heading_style())),
                Line::from(""),
                field("Director: ", movie.director.clone().unwrap_or_default()),
                field("Year: ", movie.year.map(|y| y.to_string()).unwrap_or_default()),
                Line::from(vec![
                    Span::styled("Status: ", palette.label_style()),
                    Span::styled(movie.status.to_string(), palette.status_style(movie.status)),
                ]),
                field("Poster: ", movie.poster_url(PosterSize::Full)),
                Line::from(""),
                Line::from(Span::styled(" [Esc] Back to List ", palette.button_style())),
            ]
        }
    }
}
