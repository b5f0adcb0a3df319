use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::list::Focus;
use crate::model::{Draft, DraftField};
use crate::ui::theme::Palette;

/// One line per field, a submit line, and the border.
pub const HEIGHT: u16 = DraftField::ALL.len() as u16 + 3;

pub fn render(frame: &mut Frame, draft: &Draft, focus: Focus, palette: Palette, area: Rect) {
    let border_style = match focus {
        Focus::Form(_) => palette.focused_field_style(),
        Focus::Rows => palette.muted_style(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(" Add Movie ", palette.heading_style()));

    let mut lines: Vec<Line> = DraftField::ALL
        .iter()
        .map(|&field| field_line(draft, field, focus == Focus::Form(field), palette))
        .collect();
    lines.push(Line::from(Span::styled(
        " [Enter] Add Movie ",
        palette.button_style(),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(draft: &Draft, field: DraftField, focused: bool, palette: Palette) -> Line<'_> {
    let label_style = if focused {
        palette.focused_field_style()
    } else {
        palette.label_style()
    };
    let value_style = match field {
        DraftField::Status => palette.status_style(draft.status),
        _ => palette.normal_style(),
    };
    let mut spans = vec![
        Span::styled(if focused { "> " } else { "  " }, label_style),
        Span::styled(format!("{:<12}", format!("{}:", field.label())), label_style),
        Span::styled(draft.value(field), value_style),
    ];
    if focused {
        spans.push(Span::styled("_", label_style));
    }
    Line::from(spans)
}
