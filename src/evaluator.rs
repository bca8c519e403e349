//! Derived state over the history map: streak, emergency, and heat-map cells.
//!
//! Everything here is a pure function of the history and an anchor date, so
//! the store stays the only owner of mutation.

use crate::domain::DailyRecord;
use crate::store::History;
use chrono::{Duration, NaiveDate};

/// Heat-map classification for one campaign day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// No entry recorded for this date
    Untouched,
    /// All three blocks done
    Perfect,
    /// Entry exists with one or two blocks done
    Partial,
    /// Entry exists with zero blocks done
    Missed,
}

/// A perfect day has all three blocks completed
pub fn is_perfect(record: &DailyRecord) -> bool {
    record.focus && record.body && record.skill
}

/// Count consecutive perfect days strictly before `today`, walking back from
/// yesterday. The anchor day itself is never inspected: completing today's
/// blocks doesn't raise the streak until tomorrow.
pub fn compute_streak(history: &History, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today - Duration::days(1);

    while let Some(record) = history.get(&day) {
        if !is_perfect(record) {
            break;
        }
        streak += 1;
        day -= Duration::days(1);
    }

    streak
}

/// True iff yesterday has an entry and that entry is not perfect.
///
/// A missing entry is not an emergency: the flag signals a broken attempt,
/// not mere absence.
pub fn is_emergency(history: &History, today: NaiveDate) -> bool {
    let yesterday = today - Duration::days(1);
    match history.get(&yesterday) {
        Some(record) => !is_perfect(record),
        None => false,
    }
}

/// Classify one date for the campaign heat-map
pub fn day_status(history: &History, date: NaiveDate) -> DayStatus {
    match history.get(&date) {
        None => DayStatus::Untouched,
        Some(record) => match record.completed_count() {
            3 => DayStatus::Perfect,
            0 => DayStatus::Missed,
            _ => DayStatus::Partial,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn perfect() -> DailyRecord {
        let mut record = DailyRecord::default();
        for task in TaskId::all() {
            record.toggle_task(*task);
        }
        record
    }

    fn partial() -> DailyRecord {
        let mut record = DailyRecord::default();
        record.toggle_task(TaskId::Focus);
        record.toggle_task(TaskId::Skill);
        record
    }

    #[test]
    fn test_is_perfect() {
        assert!(is_perfect(&perfect()));
        assert!(!is_perfect(&partial()));
        assert!(!is_perfect(&DailyRecord::default()));
    }

    #[test]
    fn test_streak_counts_back_from_yesterday() {
        let mut history = History::new();
        history.insert(date("2026-01-01"), perfect());
        history.insert(date("2026-01-02"), perfect());
        history.insert(date("2026-01-03"), partial());

        // Today (01-03) is never inspected; 01-02 and 01-01 are perfect,
        // 2025-12-31 is missing.
        assert_eq!(compute_streak(&history, date("2026-01-03")), 2);
    }

    #[test]
    fn test_streak_zero_when_yesterday_missing() {
        let mut history = History::new();
        history.insert(date("2026-01-01"), perfect());
        history.insert(date("2026-01-02"), perfect());

        // 01-04's yesterday (01-03) has no entry: older perfect days don't count
        assert_eq!(compute_streak(&history, date("2026-01-04")), 0);
    }

    #[test]
    fn test_streak_zero_when_yesterday_imperfect() {
        let mut history = History::new();
        history.insert(date("2026-01-01"), perfect());
        history.insert(date("2026-01-02"), partial());

        assert_eq!(compute_streak(&history, date("2026-01-03")), 0);
    }

    #[test]
    fn test_streak_broken_by_all_false_entry() {
        let mut history = History::new();
        history.insert(date("2026-01-01"), perfect());
        history.insert(date("2026-01-02"), DailyRecord::default());
        history.insert(date("2026-01-03"), perfect());

        // The all-false entry on 01-02 breaks the walk just like any
        // imperfect day
        assert_eq!(compute_streak(&history, date("2026-01-04")), 1);
    }

    #[test]
    fn test_streak_ignores_today() {
        let mut history = History::new();
        history.insert(date("2026-01-02"), perfect());
        history.insert(date("2026-01-03"), perfect());

        assert_eq!(compute_streak(&history, date("2026-01-03")), 1);
    }

    #[test]
    fn test_emergency_on_broken_attempt() {
        let mut history = History::new();
        let mut record = DailyRecord::default();
        record.toggle_task(TaskId::Focus);
        record.toggle_task(TaskId::Skill);
        history.insert(date("2026-02-10"), record);

        assert!(is_emergency(&history, date("2026-02-11")));
    }

    #[test]
    fn test_no_emergency_when_yesterday_absent() {
        let history = History::new();
        assert!(!is_emergency(&history, date("2026-02-11")));
    }

    #[test]
    fn test_emergency_on_all_false_entry() {
        let mut history = History::new();
        history.insert(date("2026-02-10"), DailyRecord::default());

        // "Attempted and failed" is distinct from "no attempt recorded"
        assert!(is_emergency(&history, date("2026-02-11")));
    }

    #[test]
    fn test_no_emergency_after_perfect_day() {
        let mut history = History::new();
        history.insert(date("2026-02-10"), perfect());

        assert!(!is_emergency(&history, date("2026-02-11")));
    }

    #[test]
    fn test_day_status_classification() {
        let mut history = History::new();
        history.insert(date("2026-03-01"), perfect());
        history.insert(date("2026-03-02"), partial());
        history.insert(date("2026-03-03"), DailyRecord::default());

        assert_eq!(day_status(&history, date("2026-03-01")), DayStatus::Perfect);
        assert_eq!(day_status(&history, date("2026-03-02")), DayStatus::Partial);
        assert_eq!(day_status(&history, date("2026-03-03")), DayStatus::Missed);
        assert_eq!(
            day_status(&history, date("2026-03-04")),
            DayStatus::Untouched
        );
    }
}
