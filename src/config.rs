use crate::domain::TaskId;
use chrono::NaiveDate;
use std::time::{SystemTime, UNIX_EPOCH};

/// Static definition of one of the three daily blocks
#[derive(Debug, Clone, Copy)]
pub struct TaskConfig {
    pub id: TaskId,
    pub label: &'static str,
    /// The one-line rule shown under the label
    pub rule: &'static str,
    /// Countdown length in minutes
    pub minutes: u32,
}

/// The three fixed blocks, in display order
pub const TASKS: [TaskConfig; 3] = [
    TaskConfig {
        id: TaskId::Focus,
        label: "Focus Block",
        rule: "One task. Phone away.",
        minutes: 60,
    },
    TaskConfig {
        id: TaskId::Body,
        label: "Body Discipline",
        rule: "Run / Gym / Calisthenics",
        minutes: 30,
    },
    TaskConfig {
        id: TaskId::Skill,
        label: "Skill Block",
        rule: "Theory / CS Core / Systems",
        minutes: 45,
    },
];

pub const MANTRAS: &[&str] = &[
    "Mood is irrelevant.",
    "I am the kind of person who finishes what he starts.",
    "Consistency > Intensity.",
    "Never miss twice.",
    "You are not allowed to negotiate with yourself.",
];

/// First day of the campaign window shown in the heat-map
pub fn campaign_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 17).expect("valid campaign start")
}

/// Last day of the campaign window (inclusive)
pub fn campaign_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, 17).expect("valid campaign end")
}

/// Look up the config entry for a task slot
pub fn task_config(id: TaskId) -> &'static TaskConfig {
    TASKS
        .iter()
        .find(|t| t.id == id)
        .expect("every TaskId has a config entry")
}

/// Pick a mantra for this session
pub fn pick_mantra() -> &'static str {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    MANTRAS[nanos as usize % MANTRAS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_task_has_a_config() {
        for task in TaskId::all() {
            assert_eq!(task_config(*task).id, *task);
        }
    }

    #[test]
    fn test_block_durations() {
        assert_eq!(task_config(TaskId::Focus).minutes, 60);
        assert_eq!(task_config(TaskId::Body).minutes, 30);
        assert_eq!(task_config(TaskId::Skill).minutes, 45);
    }

    #[test]
    fn test_campaign_window_ordering() {
        assert!(campaign_start() < campaign_end());
    }

    #[test]
    fn test_pick_mantra_is_from_the_list() {
        let mantra = pick_mantra();
        assert!(MANTRAS.contains(&mantra));
    }
}
