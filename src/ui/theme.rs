use ratatui::style::{Color, Modifier, Style};

use crate::model::WatchStatus;

/// Styles for the active theme. Derived from the dark-mode flag on every draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    dark: bool,
}

impl Palette {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark: dark_mode }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Root container style, the terminal counterpart of the document class.
    pub fn background(&self) -> Style {
        if self.dark {
            Style::default().bg(Color::Black).fg(Color::White)
        } else {
            Style::default().bg(Color::White).fg(Color::Black)
        }
    }

    fn text(&self) -> Color {
        if self.dark {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(if self.dark { Color::White } else { Color::DarkGray })
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.text())
    }

    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(if self.dark { Color::LightBlue } else { Color::Blue })
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn selected_style(&self) -> Style {
        let bg = if self.dark { Color::DarkGray } else { Color::LightBlue };
        Style::default().bg(bg).add_modifier(Modifier::BOLD)
    }

    pub fn button_style(&self) -> Style {
        Style::default().bg(Color::Blue).fg(Color::White)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(if self.dark { Color::Gray } else { Color::DarkGray })
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.text()).add_modifier(Modifier::BOLD)
    }

    pub fn focused_field_style(&self) -> Style {
        Style::default()
            .fg(if self.dark { Color::LightCyan } else { Color::Blue })
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn notice_style(&self) -> Style {
        Style::default().fg(Color::LightRed)
    }

    /// Watched and unwatched are always drawn in different colors.
    pub fn status_style(&self, status: WatchStatus) -> Style {
        match status {
            WatchStatus::Watched => Style::default().fg(Color::Green),
            WatchStatus::Unwatched => Style::default().fg(Color::Yellow),
        }
    }
}
