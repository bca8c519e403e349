use crate::app::AppState;
use crate::config;
use crate::domain::PaneFocus;
use crate::ui::styles::{
    border_style, default_style, done_style, hint_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the three daily blocks
pub fn render_tasks_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.pane == PaneFocus::Tasks;

    let items: Vec<ListItem> = config::TASKS
        .iter()
        .enumerate()
        .map(|(idx, cfg)| {
            let completed = app.record.task(cfg.id);
            let line = create_task_line(cfg, completed);
            let style = if focused && idx == app.selected_task {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let done = app.record.completed_count();
    let title = format!(" Daily Blocks ({}/3) ", done);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single line for a block
/// Format: ✔ Focus Block — One task. Phone away.  [60 MIN]
fn create_task_line(cfg: &config::TaskConfig, completed: bool) -> Line<'static> {
    let mut spans = Vec::new();

    if completed {
        spans.push(Span::styled(" ✔ ".to_string(), done_style()));
    } else {
        spans.push(Span::raw(" ○ ".to_string()));
    }

    spans.push(Span::raw(cfg.label.to_string()));
    spans.push(Span::styled(format!("  {}", cfg.rule), hint_style()));
    spans.push(Span::styled(format!("  [{} MIN]", cfg.minutes), hint_style()));

    Line::from(spans)
}
