use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three fixed daily task slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskId {
    Focus,
    Body,
    Skill,
}

/// Error returned when a task name doesn't match any of the three slots
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown task `{0}` (expected focus, body, or skill)")]
pub struct ParseTaskIdError(pub String);

impl TaskId {
    /// Short identifier used in the persisted record and on the CLI
    pub fn name(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Body => "body",
            Self::Skill => "skill",
        }
    }

    /// All task slots in display order
    pub fn all() -> &'static [TaskId] {
        &[TaskId::Focus, TaskId::Body, TaskId::Skill]
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "focus" => Ok(Self::Focus),
            "body" => Ok(Self::Body),
            "skill" => Ok(Self::Skill),
            other => Err(ParseTaskIdError(other.to_string())),
        }
    }
}

/// One of the three night-closure journal prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalField {
    Facts,
    Avoided,
    Better,
}

impl JournalField {
    /// Prompt label shown above the field
    pub fn label(&self) -> &'static str {
        match self {
            Self::Facts => "WHAT I DID (FACTS ONLY)",
            Self::Avoided => "WHAT I AVOIDED",
            Self::Better => "IMPROVEMENT FOR TOMORROW",
        }
    }

    /// All fields in display order
    pub fn all() -> &'static [JournalField] {
        &[
            JournalField::Facts,
            JournalField::Avoided,
            JournalField::Better,
        ]
    }

    /// The field after this one, wrapping around
    pub fn next(&self) -> JournalField {
        match self {
            Self::Facts => Self::Avoided,
            Self::Avoided => Self::Better,
            Self::Better => Self::Facts,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingChecklistItem,
    EditingJournal,
    Timer,
    DayChanged, // Shown when midnight has passed, forces restart
}

/// Which pane keyboard navigation currently targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneFocus {
    Tasks,
    Checklist,
}

impl PaneFocus {
    pub fn next(&self) -> PaneFocus {
        match self {
            Self::Tasks => Self::Checklist,
            Self::Checklist => Self::Tasks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_from_str() {
        assert_eq!("focus".parse(), Ok(TaskId::Focus));
        assert_eq!("BODY".parse(), Ok(TaskId::Body));
        assert_eq!("Skill".parse(), Ok(TaskId::Skill));
        assert!("cardio".parse::<TaskId>().is_err());
    }

    #[test]
    fn test_task_id_round_trip() {
        for task in TaskId::all() {
            assert_eq!(task.name().parse(), Ok(*task));
        }
    }

    #[test]
    fn test_journal_field_next_wraps() {
        assert_eq!(JournalField::Facts.next(), JournalField::Avoided);
        assert_eq!(JournalField::Avoided.next(), JournalField::Better);
        assert_eq!(JournalField::Better.next(), JournalField::Facts);
    }

    #[test]
    fn test_pane_focus_cycles() {
        assert_eq!(PaneFocus::Tasks.next(), PaneFocus::Checklist);
        assert_eq!(PaneFocus::Checklist.next(), PaneFocus::Tasks);
    }
}
