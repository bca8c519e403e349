use super::storage::Storage;
use crate::domain::{ChecklistItem, DailyRecord, JournalField, TaskId};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Storage key the whole history map is persisted under
pub const HISTORY_KEY: &str = "protocol_history";

/// The single persisted aggregate: ISO date -> that day's record.
///
/// A date is present iff the user has mutated that day's record at least
/// once; viewing a blank day never creates an entry.
pub type History = BTreeMap<NaiveDate, DailyRecord>;

/// Owns the in-memory history and the injected storage collaborator.
/// Every mutation re-serializes and persists the whole map (last write wins).
pub struct HistoryStore {
    storage: Box<dyn Storage>,
    history: History,
}

impl HistoryStore {
    /// Build a store on top of a storage backend, reading whatever history
    /// it holds. Malformed or absent persisted state loads as an empty map,
    /// never an error.
    pub fn new(storage: Box<dyn Storage>) -> Result<Self> {
        let history = match storage.get(HISTORY_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(history) => history,
                Err(e) => {
                    eprintln!("Warning: ignoring malformed history: {}", e);
                    History::new()
                }
            },
            None => History::new(),
        };

        Ok(Self { storage, history })
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The stored record for `date`, or a fresh default. Absence is not an
    /// error and does not create an entry.
    pub fn load(&self, date: NaiveDate) -> DailyRecord {
        self.history.get(&date).cloned().unwrap_or_default()
    }

    /// Replace the record at `date` and persist the whole map
    pub fn save(&mut self, date: NaiveDate, record: DailyRecord) -> Result<()> {
        self.history.insert(date, record);
        self.persist()
    }

    /// Flip one of the three block flags for `date`
    pub fn toggle_task(&mut self, date: NaiveDate, task: TaskId) -> Result<()> {
        let mut record = self.load(date);
        record.toggle_task(task);
        self.save(date, record)
    }

    /// Append a checklist item; empty or whitespace-only text is a no-op
    pub fn add_checklist_item(&mut self, date: NaiveDate, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        let mut record = self.load(date);
        record.checklist.push(ChecklistItem::new(text.to_string()));
        self.save(date, record)
    }

    /// Flip a checklist item's completed flag; unknown ids are a silent no-op
    pub fn toggle_checklist_item(&mut self, date: NaiveDate, id: Uuid) -> Result<()> {
        let mut record = self.load(date);
        match record.checklist_item_mut(id) {
            Some(item) => item.completed = !item.completed,
            None => return Ok(()),
        }
        self.save(date, record)
    }

    /// Remove a checklist item; unknown ids are a silent no-op
    pub fn delete_checklist_item(&mut self, date: NaiveDate, id: Uuid) -> Result<()> {
        let mut record = self.load(date);
        let before = record.checklist.len();
        record.checklist.retain(|item| item.id != id);
        if record.checklist.len() == before {
            return Ok(());
        }
        self.save(date, record)
    }

    /// Replace one journal field's text
    pub fn update_journal_field(
        &mut self,
        date: NaiveDate,
        field: JournalField,
        value: String,
    ) -> Result<()> {
        let mut record = self.load(date);
        *record.journal.field_mut(field) = value;
        self.save(date, record)
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.history)
            .context("Failed to serialize history")?;
        self.storage.set(HISTORY_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn store() -> HistoryStore {
        HistoryStore::new(Box::new(MemoryStorage::new())).unwrap()
    }

    #[test]
    fn test_load_unsaved_date_returns_default() {
        let store = store();
        let record = store.load(date("2026-01-15"));

        assert!(!record.focus && !record.body && !record.skill);
        assert!(record.checklist.is_empty());
        assert!(record.journal.is_empty());
        // Viewing must not create an entry
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut store = store();
        let day = date("2026-01-15");

        let mut record = DailyRecord::default();
        record.focus = true;
        record.journal.facts = "Studied 45m.".to_string();
        store.save(day, record.clone()).unwrap();

        assert_eq!(store.load(day), record);
    }

    #[test]
    fn test_toggle_task_is_self_inverse() {
        let mut store = store();
        let day = date("2026-01-15");

        store.toggle_task(day, TaskId::Skill).unwrap();
        assert!(store.load(day).skill);
        store.toggle_task(day, TaskId::Skill).unwrap();
        assert!(!store.load(day).skill);
        // Still an entry: the user has interacted with the date
        assert!(store.history().contains_key(&day));
    }

    #[test]
    fn test_add_checklist_item() {
        let mut store = store();
        let day = date("2026-01-15");

        store.add_checklist_item(day, "Deep work block").unwrap();
        let record = store.load(day);
        assert_eq!(record.checklist.len(), 1);
        assert_eq!(record.checklist[0].text, "Deep work block");
        assert!(!record.checklist[0].completed);
    }

    #[test]
    fn test_add_blank_checklist_item_is_noop() {
        let mut store = store();
        let day = date("2026-01-15");

        store.add_checklist_item(day, "").unwrap();
        store.add_checklist_item(day, "   \t").unwrap();

        assert!(store.load(day).checklist.is_empty());
        // A no-op mutation must not materialize the date either
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_add_checklist_item_trims_text() {
        let mut store = store();
        let day = date("2026-01-15");

        store.add_checklist_item(day, "  run 3km  ").unwrap();
        assert_eq!(store.load(day).checklist[0].text, "run 3km");
    }

    #[test]
    fn test_toggle_checklist_item() {
        let mut store = store();
        let day = date("2026-01-15");

        store.add_checklist_item(day, "Ship draft").unwrap();
        let id = store.load(day).checklist[0].id;

        store.toggle_checklist_item(day, id).unwrap();
        assert!(store.load(day).checklist[0].completed);
        store.toggle_checklist_item(day, id).unwrap();
        assert!(!store.load(day).checklist[0].completed);
    }

    #[test]
    fn test_unknown_checklist_id_is_silent_noop() {
        let mut store = store();
        let day = date("2026-01-15");
        store.add_checklist_item(day, "Ship draft").unwrap();

        let before = store.load(day);
        store.toggle_checklist_item(day, Uuid::new_v4()).unwrap();
        store.delete_checklist_item(day, Uuid::new_v4()).unwrap();
        assert_eq!(store.load(day), before);
    }

    #[test]
    fn test_add_then_delete_restores_checklist() {
        let mut store = store();
        let day = date("2026-01-15");

        store.add_checklist_item(day, "Keep me").unwrap();
        let before = store.load(day).checklist.clone();

        store.add_checklist_item(day, "Delete me").unwrap();
        let added_id = store.load(day).checklist[1].id;
        store.delete_checklist_item(day, added_id).unwrap();

        assert_eq!(store.load(day).checklist, before);
    }

    #[test]
    fn test_update_journal_field() {
        let mut store = store();
        let day = date("2026-01-15");

        store
            .update_journal_field(day, JournalField::Avoided, "No reels.".to_string())
            .unwrap();
        store
            .update_journal_field(day, JournalField::Better, "Start earlier.".to_string())
            .unwrap();

        let record = store.load(day);
        assert_eq!(record.journal.avoided, "No reels.");
        assert_eq!(record.journal.better, "Start earlier.");
        assert_eq!(record.journal.facts, "");
    }

    #[test]
    fn test_malformed_history_loads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(HISTORY_KEY, "not json {").unwrap();

        let store = HistoryStore::new(Box::new(storage)).unwrap();
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_dates_serialize_as_iso_keys() {
        let mut store = store();
        store.toggle_task(date("2026-01-15"), TaskId::Focus).unwrap();

        let json = serde_json::to_string(&store.history).unwrap();
        assert!(json.contains("\"2026-01-15\""));
    }

    #[test]
    fn test_file_backed_store_round_trips_on_disk() {
        use crate::store::storage::FileStorage;

        let temp_dir = tempfile::tempdir().unwrap();
        let day = date("2026-01-15");

        {
            let storage = FileStorage::with_dir(temp_dir.path().to_path_buf());
            let mut store = HistoryStore::new(Box::new(storage)).unwrap();
            store.toggle_task(day, TaskId::Focus).unwrap();
            store.add_checklist_item(day, "Ship draft").unwrap();
        }

        let storage = FileStorage::with_dir(temp_dir.path().to_path_buf());
        let store = HistoryStore::new(Box::new(storage)).unwrap();
        let record = store.load(day);
        assert!(record.focus);
        assert_eq!(record.checklist.len(), 1);
    }
}
