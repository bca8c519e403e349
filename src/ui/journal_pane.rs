use crate::app::AppState;
use crate::domain::{JournalField, UiMode};
use crate::ui::styles::{border_style, hint_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the night-closure journal pane
pub fn render_journal_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let is_editing = app.ui_mode == UiMode::EditingJournal;

    let title = if is_editing {
        " Night Closure — [Editing, Tab switches field] "
    } else {
        " Night Closure — Debrief "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    let mut lines: Vec<Line> = Vec::new();
    // Row offset of each field's first content line, for cursor placement
    let mut content_rows = [0usize; 3];

    for (idx, field) in JournalField::all().iter().enumerate() {
        let active = is_editing && *field == app.journal_field;
        let label_style = if active { selected_style() } else { hint_style() };
        lines.push(Line::from(Span::styled(field.label(), label_style)));
        content_rows[idx] = lines.len();

        let value = app.record.journal.field(*field);
        if value.is_empty() {
            lines.push(Line::raw(""));
        } else {
            for text_line in value.split('\n') {
                lines.push(Line::raw(text_line.to_string()));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);

    // Show cursor when editing
    if is_editing {
        let field_idx = JournalField::all()
            .iter()
            .position(|f| *f == app.journal_field)
            .unwrap_or(0);
        let value = app.record.journal.field(app.journal_field);
        let before_cursor = &value[..app.journal_cursor.min(value.len())];
        let line_number = before_cursor.matches('\n').count();
        let column = before_cursor
            .rsplit('\n')
            .next()
            .map(|l| l.chars().count())
            .unwrap_or(0);

        // Account for border (1 char) and the rows above this field
        let cursor_x = area.x + 1 + column as u16;
        let cursor_y = area.y + 1 + (content_rows[field_idx] + line_number) as u16;

        if cursor_x < area.x + area.width - 1 && cursor_y < area.y + area.height - 1 {
            f.set_cursor(cursor_x, cursor_y);
        }
    }
}
