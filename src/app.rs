use crate::config;
use crate::domain::{DailyRecord, JournalField, PaneFocus, TaskId, UiMode};
use crate::evaluator;
use crate::notifications;
use crate::store::HistoryStore;
use crate::ticker::CountdownTimer;
use anyhow::Result;
use chrono::NaiveDate;

/// Main application state
pub struct AppState {
    pub store: HistoryStore,
    /// The date this session is anchored to. Streak and emergency are always
    /// evaluated against this real date, never a browsed one; a midnight
    /// crossing forces a restart instead of silently re-anchoring.
    pub today: NaiveDate,
    /// Working copy of today's record, refreshed after every mutation
    pub record: DailyRecord,
    pub streak: u32,
    pub emergency: bool,
    pub ui_mode: UiMode,
    pub pane: PaneFocus,
    pub selected_task: usize,
    pub checklist_selected: usize,
    /// Buffer for the checklist input line while adding an item
    pub checklist_input: String,
    pub journal_field: JournalField,
    /// Cursor position (byte offset) within the journal field being edited
    pub journal_cursor: usize,
    pub timer: Option<CountdownTimer>,
    pub mantra: &'static str,
}

impl AppState {
    pub fn new(store: HistoryStore) -> Self {
        let today = chrono::Local::now().date_naive();
        let record = store.load(today);
        let streak = evaluator::compute_streak(store.history(), today);
        let emergency = evaluator::is_emergency(store.history(), today);

        Self {
            store,
            today,
            record,
            streak,
            emergency,
            ui_mode: UiMode::Normal,
            pane: PaneFocus::Tasks,
            selected_task: 0,
            checklist_selected: 0,
            checklist_input: String::new(),
            journal_field: JournalField::Facts,
            journal_cursor: 0,
            timer: None,
            mantra: config::pick_mantra(),
        }
    }

    /// Check if the current date has changed (crossed midnight)
    pub fn has_day_changed(&self) -> bool {
        chrono::Local::now().date_naive() != self.today
    }

    fn refresh_record(&mut self) {
        self.record = self.store.load(self.today);
    }

    // --- Task pane ---

    /// The task slot currently highlighted in the tasks pane
    pub fn selected_task_id(&self) -> TaskId {
        config::TASKS[self.selected_task].id
    }

    pub fn select_task_up(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    pub fn select_task_down(&mut self) {
        if self.selected_task + 1 < config::TASKS.len() {
            self.selected_task += 1;
        }
    }

    /// Flip the highlighted block's completed flag
    pub fn toggle_selected_task(&mut self) -> Result<()> {
        let task = self.selected_task_id();
        self.store.toggle_task(self.today, task)?;
        self.refresh_record();
        Ok(())
    }

    // --- Timer ---

    /// Open the countdown modal for the highlighted block
    pub fn open_timer(&mut self) {
        let cfg = config::task_config(self.selected_task_id());
        self.timer = Some(CountdownTimer::new(cfg.id, cfg.minutes));
        self.ui_mode = UiMode::Timer;
    }

    /// Close the countdown modal, cancelling any running countdown
    pub fn close_timer(&mut self) {
        self.timer = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Advance the countdown; on completion, mark the block done for today
    pub fn tick(&mut self) -> Result<()> {
        let finished_task = match self.timer.as_mut() {
            Some(timer) => {
                timer.tick();
                if timer.take_finished() {
                    Some(timer.task)
                } else {
                    None
                }
            }
            None => None,
        };

        if let Some(task) = finished_task {
            if !self.record.task(task) {
                self.store.toggle_task(self.today, task)?;
                self.refresh_record();
            }
            notifications::notify_block_complete(config::task_config(task).label);
        }
        Ok(())
    }

    // --- Checklist pane ---

    pub fn select_item_up(&mut self) {
        if self.checklist_selected > 0 {
            self.checklist_selected -= 1;
        }
    }

    pub fn select_item_down(&mut self) {
        if self.checklist_selected + 1 < self.record.checklist.len() {
            self.checklist_selected += 1;
        }
    }

    /// Enter the checklist input line
    pub fn start_add_item(&mut self) {
        self.checklist_input.clear();
        self.ui_mode = UiMode::AddingChecklistItem;
    }

    /// Commit the input line as a new checklist item (blank input is a no-op)
    pub fn commit_add_item(&mut self) -> Result<()> {
        let text = std::mem::take(&mut self.checklist_input);
        self.store.add_checklist_item(self.today, &text)?;
        self.refresh_record();
        self.ui_mode = UiMode::Normal;
        if !self.record.checklist.is_empty() {
            self.checklist_selected = self.record.checklist.len() - 1;
        }
        Ok(())
    }

    pub fn cancel_add_item(&mut self) {
        self.checklist_input.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn toggle_selected_item(&mut self) -> Result<()> {
        if let Some(item) = self.record.checklist.get(self.checklist_selected) {
            let id = item.id;
            self.store.toggle_checklist_item(self.today, id)?;
            self.refresh_record();
        }
        Ok(())
    }

    pub fn delete_selected_item(&mut self) -> Result<()> {
        if let Some(item) = self.record.checklist.get(self.checklist_selected) {
            let id = item.id;
            self.store.delete_checklist_item(self.today, id)?;
            self.refresh_record();
            self.clamp_checklist_selection();
        }
        Ok(())
    }

    fn clamp_checklist_selection(&mut self) {
        if self.checklist_selected >= self.record.checklist.len() {
            self.checklist_selected = self.record.checklist.len().saturating_sub(1);
        }
    }

    // --- Journal pane ---

    /// Enter journal editing on the first field, cursor at the end
    pub fn start_edit_journal(&mut self) {
        self.ui_mode = UiMode::EditingJournal;
        self.journal_field = JournalField::Facts;
        self.journal_cursor = self.record.journal.field(self.journal_field).len();
    }

    pub fn stop_edit_journal(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Move editing to the next journal field, cursor at the end
    pub fn next_journal_field(&mut self) {
        self.journal_field = self.journal_field.next();
        self.journal_cursor = self.record.journal.field(self.journal_field).len();
    }

    /// Insert a character at the cursor and persist the field
    pub fn insert_journal_char(&mut self, c: char) -> Result<()> {
        let mut value = self.record.journal.field(self.journal_field).to_string();
        value.insert(self.journal_cursor, c);
        self.journal_cursor += c.len_utf8();
        self.save_journal_field(value)
    }

    /// Delete the character before the cursor and persist the field
    pub fn delete_journal_char(&mut self) -> Result<()> {
        let value = self.record.journal.field(self.journal_field);
        if self.journal_cursor == 0 {
            return Ok(());
        }
        let mut value = value.to_string();
        let prev = previous_char_boundary(&value, self.journal_cursor);
        value.remove(prev);
        self.journal_cursor = prev;
        self.save_journal_field(value)
    }

    pub fn move_journal_cursor_left(&mut self) {
        let value = self.record.journal.field(self.journal_field);
        if self.journal_cursor > 0 {
            self.journal_cursor = previous_char_boundary(value, self.journal_cursor);
        }
    }

    pub fn move_journal_cursor_right(&mut self) {
        let value = self.record.journal.field(self.journal_field);
        if self.journal_cursor < value.len() {
            let next = value[self.journal_cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.journal_cursor += next;
        }
    }

    fn save_journal_field(&mut self, value: String) -> Result<()> {
        self.store
            .update_journal_field(self.today, self.journal_field, value)?;
        self.refresh_record();
        Ok(())
    }
}

/// Byte offset of the char boundary immediately before `pos`
fn previous_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos]
        .char_indices()
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}
