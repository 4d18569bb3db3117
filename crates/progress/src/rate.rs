//! Completion rates over trailing windows.

use chrono::{NaiveDate, TimeZone};
use habitally_core::{Calendar, Habit, Time};
use serde::Serialize;

use crate::daily::DailyLog;

/// Fraction of the last `window_days` days (today inclusive) that met the target.
///
/// A zero-day window yields 0.0.
pub fn completion_rate<L, Tz>(log: &L, window_days: u32, now: Time, calendar: &Calendar<Tz>) -> f64
where
    L: DailyLog + ?Sized,
    Tz: TimeZone,
{
    if window_days == 0 {
        return 0.0;
    }
    let completed = (0..window_days)
        .filter(|n| log.is_completed_on(calendar.days_ago(*n, now), calendar))
        .count();
    completed as f64 / f64::from(window_days)
}

/// Share of active habits completed today, 0.0 when none are active.
pub fn today_completion_rate<Tz: TimeZone>(habits: &[Habit], now: Time, calendar: &Calendar<Tz>) -> f64 {
    let active: Vec<&Habit> = habits.iter().filter(|h| h.is_active).collect();
    if active.is_empty() {
        return 0.0;
    }
    let done = active
        .iter()
        .filter(|h| h.is_completed_on(now, calendar))
        .count();
    done as f64 / active.len() as f64
}

/// One day of a completion history strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStatus {
    /// Local date
    pub date: NaiveDate,

    /// Completions logged that day
    pub completions: usize,

    /// Target reached
    pub completed: bool,

    /// Fraction of the target, capped at 1.0
    pub progress: f64,
}

/// Status of each of the last `days` days, oldest first, ending today.
pub fn recent_days<L, Tz>(log: &L, days: u32, now: Time, calendar: &Calendar<Tz>) -> Vec<DayStatus>
where
    L: DailyLog + ?Sized,
    Tz: TimeZone,
{
    (0..days)
        .rev()
        .map(|n| {
            let day = calendar.days_ago(n, now);
            DayStatus {
                date: calendar.local_date(day),
                completions: log.completions_on(day, calendar),
                completed: log.is_completed_on(day, calendar),
                progress: log.progress_on(day, calendar),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::fixtures::*;

    #[test]
    fn test_rate_over_week() {
        let h = habit_done_on(1, &[0, 2, 4], 1);
        let rate = completion_rate(&h, 7, now(), &cal());
        assert!((rate - 3.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_rate_ignores_days_outside_window() {
        let h = habit_done_on(1, &[0, 7, 8], 1);
        let rate = completion_rate(&h, 7, now(), &cal());
        assert!((rate - 1.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_window() {
        let h = habit_done_on(1, &[0], 1);
        assert_eq!(completion_rate(&h, 0, now(), &cal()), 0.0);
    }

    #[test]
    fn test_routine_rate() {
        let r = routine_done_on(&[0, 1]);
        assert!((completion_rate(&r, 4, now(), &cal()) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_today_rate_counts_active_only() {
        let mut paused = habit_done_on(1, &[0], 1);
        paused.is_active = false;
        let habits = vec![habit_done_on(1, &[0], 1), habit(1), paused];
        assert!((today_completion_rate(&habits, now(), &cal()) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_today_rate_without_active_habits() {
        assert_eq!(today_completion_rate(&[], now(), &cal()), 0.0);

        let mut h = habit_done_on(1, &[0], 1);
        h.is_active = false;
        assert_eq!(today_completion_rate(&[h], now(), &cal()), 0.0);
    }

    #[test]
    fn test_recent_days_oldest_first() {
        let h = habit_done_on(2, &[0, 2], 1);
        let days = recent_days(&h, 3, now(), &cal());
        assert_eq!(days.len(), 3);
        assert!(days[0].date < days[2].date);
        assert_eq!(days[2].date, cal().local_date(now()));
        assert_eq!(days[0].completions, 1);
        assert_eq!(days[1].completions, 0);
        assert!(!days[0].completed);
        assert!((days[2].progress - 0.5).abs() < 1e-9);
        assert!(recent_days(&h, 0, now(), &cal()).is_empty());
    }
}
