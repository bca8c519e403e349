use crate::app::AppState;
use crate::domain::{ChecklistItem, PaneFocus, UiMode};
use crate::ui::styles::{
    border_style, default_style, done_style, done_text_style, hint_style, selected_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the tactical plan checklist
pub fn render_checklist_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.pane == PaneFocus::Checklist;
    let adding = app.ui_mode == UiMode::AddingChecklistItem;

    let mut items: Vec<ListItem> = Vec::new();

    if adding {
        let input = Line::from(vec![
            Span::styled(" > ".to_string(), title_style()),
            Span::raw(app.checklist_input.clone()),
            Span::styled("█".to_string(), title_style()),
        ]);
        items.push(ListItem::new(input));
    }

    if app.record.checklist.is_empty() && !adding {
        items.push(
            ListItem::new(Line::from(Span::raw(" No targets set for today. ")))
                .style(hint_style()),
        );
    } else {
        for (idx, item) in app.record.checklist.iter().enumerate() {
            let line = create_item_line(item);
            let style = if focused && !adding && idx == app.checklist_selected {
                selected_style()
            } else {
                default_style()
            };
            items.push(ListItem::new(line).style(style));
        }
    }

    let title = " Tactical Plan — Daily Targets ";
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single checklist line
/// Format: [x] run 3km
fn create_item_line(item: &ChecklistItem) -> Line<'static> {
    let mut spans = Vec::new();

    if item.completed {
        spans.push(Span::styled(" [x] ".to_string(), done_style()));
        spans.push(Span::styled(item.text.clone(), done_text_style()));
    } else {
        spans.push(Span::raw(" [ ] ".to_string()));
        spans.push(Span::raw(item.text.clone()));
    }

    Line::from(spans)
}
