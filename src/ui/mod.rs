pub mod calendar_pane;
pub mod checklist_pane;
pub mod header;
pub mod journal_pane;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod styles;
pub mod tasks_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use calendar_pane::{campaign_month_count, render_calendar_pane};
use checklist_pane::render_checklist_pane;
use header::render_header;
use journal_pane::render_journal_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_day_changed_modal, render_timer_modal};
use ratatui::Frame;
use tasks_pane::render_tasks_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size, campaign_month_count());

    // Render keybindings bar and header
    render_keybindings(f, layout.keybindings_area);
    render_header(f, app, layout.header_area);

    // Render panes
    render_tasks_pane(f, app, layout.tasks_area);
    render_checklist_pane(f, app, layout.checklist_area);
    render_journal_pane(f, app, layout.journal_area);
    render_calendar_pane(f, app, layout.calendar_area);

    // Render day changed modal (takes precedence)
    if app.ui_mode == UiMode::DayChanged {
        render_day_changed_modal(f, app, size);
        return; // Don't render other modals
    }

    // Render countdown modal if active
    if app.ui_mode == UiMode::Timer {
        render_timer_modal(f, app, size);
    }
}
