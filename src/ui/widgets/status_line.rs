use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::action::KeyMode;
use crate::ui::theme::Palette;

pub fn render(
    frame: &mut Frame,
    mode: KeyMode,
    notice: Option<&str>,
    palette: Palette,
    area: Rect,
) {
    let line = match notice {
        Some(text) => Line::from(Span::styled(format!("  {}", text), palette.notice_style())),
        None => Line::from(Span::styled(hints(mode), palette.muted_style())),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn hints(mode: KeyMode) -> &'static str {
    match mode {
        KeyMode::Rows => {
            "  j/k: move | Enter: details | d: delete | a: add | t: theme | F5: reload | q: quit"
        }
        KeyMode::Form { .. } => {
            "  Tab/Shift+Tab: field | Space: status | Enter: add | Esc: back to list"
        }
        KeyMode::Detail => "  Esc/b: back to list | t: theme | q: quit",
    }
}
