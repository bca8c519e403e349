use super::enums::{JournalField, TaskId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entry in the day's tactical checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Unique ID, generated at creation time
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        }
    }
}

/// Night-closure journal: three free-text prompts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    pub facts: String,
    #[serde(default)]
    pub avoided: String,
    #[serde(default)]
    pub better: String,
}

impl Journal {
    pub fn field(&self, field: JournalField) -> &str {
        match field {
            JournalField::Facts => &self.facts,
            JournalField::Avoided => &self.avoided,
            JournalField::Better => &self.better,
        }
    }

    pub fn field_mut(&mut self, field: JournalField) -> &mut String {
        match field {
            JournalField::Facts => &mut self.facts,
            JournalField::Avoided => &mut self.avoided,
            JournalField::Better => &mut self.better,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty() && self.avoided.is_empty() && self.better.is_empty()
    }
}

/// Everything tracked for one calendar date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(default)]
    pub focus: bool,
    #[serde(default)]
    pub body: bool,
    #[serde(default)]
    pub skill: bool,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub journal: Journal,
}

impl DailyRecord {
    /// Read one task flag
    pub fn task(&self, task: TaskId) -> bool {
        match task {
            TaskId::Focus => self.focus,
            TaskId::Body => self.body,
            TaskId::Skill => self.skill,
        }
    }

    /// Flip one task flag
    pub fn toggle_task(&mut self, task: TaskId) {
        let flag = match task {
            TaskId::Focus => &mut self.focus,
            TaskId::Body => &mut self.body,
            TaskId::Skill => &mut self.skill,
        };
        *flag = !*flag;
    }

    /// Number of completed task flags (0..=3)
    pub fn completed_count(&self) -> usize {
        [self.focus, self.body, self.skill]
            .iter()
            .filter(|&&done| done)
            .count()
    }

    /// Find a checklist item by id
    pub fn checklist_item_mut(&mut self, id: Uuid) -> Option<&mut ChecklistItem> {
        self.checklist.iter_mut().find(|item| item.id == id)
    }
}
