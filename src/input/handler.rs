use crate::app::AppState;
use crate::domain::{PaneFocus, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingChecklistItem => handle_adding_item_mode(app, key),
        UiMode::EditingJournal => handle_journal_editing_mode(app, key),
        UiMode::Timer => handle_timer_mode(app, key),
        // DayChanged is handled by the main loop (only quit is allowed)
        UiMode::DayChanged => Ok(false),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        // Switch pane focus
        KeyCode::Tab => {
            app.pane = app.pane.next();
            Ok(false)
        }

        // Navigation within the focused pane
        KeyCode::Up => {
            match app.pane {
                PaneFocus::Tasks => app.select_task_up(),
                PaneFocus::Checklist => app.select_item_up(),
            }
            Ok(false)
        }
        KeyCode::Down => {
            match app.pane {
                PaneFocus::Tasks => app.select_task_down(),
                PaneFocus::Checklist => app.select_item_down(),
            }
            Ok(false)
        }

        // Jump straight to a block
        KeyCode::Char('1') => {
            app.pane = PaneFocus::Tasks;
            app.selected_task = 0;
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.pane = PaneFocus::Tasks;
            app.selected_task = 1;
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.pane = PaneFocus::Tasks;
            app.selected_task = 2;
            Ok(false)
        }

        // Toggle the selected block / checklist item
        KeyCode::Enter | KeyCode::Char(' ') => {
            match app.pane {
                PaneFocus::Tasks => app.toggle_selected_task()?,
                PaneFocus::Checklist => app.toggle_selected_item()?,
            }
            Ok(false)
        }

        // Launch the countdown for the selected block
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.pane = PaneFocus::Tasks;
            app.open_timer();
            Ok(false)
        }

        // Add a checklist item
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.pane = PaneFocus::Checklist;
            app.start_add_item();
            Ok(false)
        }

        // Delete the selected checklist item
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            if app.pane == PaneFocus::Checklist {
                app.delete_selected_item()?;
            }
            Ok(false)
        }

        // Edit the journal
        KeyCode::Char('j') => {
            app.start_edit_journal();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys while typing a new checklist item
fn handle_adding_item_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.commit_add_item()?;
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_add_item();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.checklist_input.pop();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.checklist_input.push(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while editing a journal field
fn handle_journal_editing_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.stop_edit_journal();
            Ok(false)
        }
        KeyCode::Tab => {
            app.next_journal_field();
            Ok(false)
        }
        KeyCode::Left => {
            app.move_journal_cursor_left();
            Ok(false)
        }
        KeyCode::Right => {
            app.move_journal_cursor_right();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.delete_journal_char()?;
            Ok(false)
        }
        KeyCode::Enter => {
            app.insert_journal_char('\n')?;
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.insert_journal_char(c)?;
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys in the countdown modal
fn handle_timer_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(timer) = app.timer.as_mut() {
                timer.toggle();
            }
            Ok(false)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if let Some(timer) = app.timer.as_mut() {
                timer.reset();
            }
            Ok(false)
        }
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q') => {
            app.close_timer();
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{HistoryStore, MemoryStorage};
    use crossterm::event::KeyModifiers;

    fn app() -> AppState {
        let store = HistoryStore::new(Box::new(MemoryStorage::new())).unwrap();
        AppState::new(store)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_quits_in_normal_mode() {
        let mut app = app();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn test_enter_toggles_selected_block() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('2'))).unwrap();
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert!(app.record.body);
    }

    #[test]
    fn test_add_item_flow_via_keys() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingChecklistItem);

        for c in "gym".chars() {
            handle_key(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.record.checklist.len(), 1);
        assert_eq!(app.record.checklist[0].text, "gym");
    }

    #[test]
    fn test_esc_cancels_add_item() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, press(KeyCode::Char('x'))).unwrap();
        handle_key(&mut app, press(KeyCode::Esc)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.record.checklist.is_empty());
    }

    #[test]
    fn test_journal_mode_typing() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('j'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::EditingJournal);

        for c in "Ran 3km".chars() {
            handle_key(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, press(KeyCode::Esc)).unwrap();

        assert_eq!(app.record.journal.facts, "Ran 3km");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_timer_keys() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('t'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Timer);

        handle_key(&mut app, press(KeyCode::Char(' '))).unwrap();
        assert!(app.timer.as_ref().unwrap().running);

        handle_key(&mut app, press(KeyCode::Char('r'))).unwrap();
        assert!(!app.timer.as_ref().unwrap().running);

        handle_key(&mut app, press(KeyCode::Esc)).unwrap();
        assert!(app.timer.is_none());
    }

    #[test]
    fn test_q_does_not_quit_while_typing() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        assert!(!handle_key(&mut app, press(KeyCode::Char('q'))).unwrap());
        assert_eq!(app.checklist_input, "q");
    }
}
