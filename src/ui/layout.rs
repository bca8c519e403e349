use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub tasks_area: Rect,
    pub checklist_area: Rect,
    pub journal_area: Rect,
    pub calendar_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Header: title, streak, emergency, mantra (2 rows)
/// - Tasks: the three blocks (5 rows)
/// - Middle: Checklist (50%) | Journal (50%)
/// - Bottom: campaign heat-map (one row per campaign month)
pub fn create_layout(area: Rect, calendar_months: usize) -> MainLayout {
    let calendar_height = calendar_months as u16 + 2; // rows + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Keybindings bar
            Constraint::Length(2),               // Header
            Constraint::Length(5),               // Tasks pane
            Constraint::Min(8),                  // Checklist + journal
            Constraint::Length(calendar_height), // Calendar pane
        ])
        .split(area);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Checklist pane
            Constraint::Percentage(50), // Journal pane
        ])
        .split(chunks[3]);

    MainLayout {
        keybindings_area: chunks[0],
        header_area: chunks[1],
        tasks_area: chunks[2],
        checklist_area: middle[0],
        journal_area: middle[1],
        calendar_area: chunks[4],
    }
}

/// Create centered modal area (for the countdown and day-changed modals)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(12),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 120, 50);
        let layout = create_layout(area, 6);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.header_area.height, 2);
        assert_eq!(layout.tasks_area.height, 5);
        assert!(layout.checklist_area.height > 0);
        assert!(layout.journal_area.height > 0);
        assert_eq!(layout.calendar_area.height, 8);

        // Checklist and journal split the middle row
        assert_eq!(layout.checklist_area.y, layout.journal_area.y);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert!(modal.height < area.height);
        assert_eq!(modal.height, 12);
    }
}
