//! Date-bucketed counters over whole collections.

use std::collections::BTreeMap;

use chrono::TimeZone;
use habitally_core::{Calendar, Habit, MeditationSession, MeditationType, Reflection, Routine, Time};

use crate::daily::DailyLog;

/// Habit completions since the start of the current week.
pub fn completions_this_week<Tz: TimeZone>(habit: &Habit, now: Time, calendar: &Calendar<Tz>) -> usize {
    let start = calendar.start_of_week(now);
    habit
        .completions
        .iter()
        .filter(|c| c.completed_date >= start)
        .count()
}

/// Reflections dated since the start of the current week.
pub fn reflections_this_week<Tz: TimeZone>(
    reflections: &[Reflection],
    now: Time,
    calendar: &Calendar<Tz>,
) -> usize {
    let start = calendar.start_of_week(now);
    reflections.iter().filter(|r| r.date >= start).count()
}

/// Whether any reflection is dated today.
pub fn has_reflected_today<Tz: TimeZone>(reflections: &[Reflection], now: Time, calendar: &Calendar<Tz>) -> bool {
    reflections.iter().any(|r| calendar.is_same_day(r.date, now))
}

/// Routines with at least one completion today.
pub fn routines_completed_today<Tz: TimeZone>(routines: &[Routine], now: Time, calendar: &Calendar<Tz>) -> usize {
    routines
        .iter()
        .filter(|r| r.is_completed_on(now, calendar))
        .count()
}

/// Active habits that reached their target today.
pub fn habits_completed_today<Tz: TimeZone>(habits: &[Habit], now: Time, calendar: &Calendar<Tz>) -> usize {
    habits
        .iter()
        .filter(|h| h.is_active && h.is_completed_on(now, calendar))
        .count()
}

/// Minutes meditated in sessions completed within the last `window_days` days.
pub fn total_meditation_minutes<Tz: TimeZone>(
    sessions: &[MeditationSession],
    window_days: u32,
    now: Time,
    calendar: &Calendar<Tz>,
) -> u32 {
    let cutoff = calendar.days_ago(window_days, now);
    sessions
        .iter()
        .filter(|s| s.completed_date >= cutoff)
        .fold(0u32, |total, s| total.saturating_add(s.duration))
}

/// Minutes meditated across every recorded session. Saturates at `u32::MAX`.
pub fn lifetime_meditation_minutes(sessions: &[MeditationSession]) -> u32 {
    sessions
        .iter()
        .fold(0u32, |total, s| total.saturating_add(s.duration))
}

/// Total minutes per meditation type; types never practiced are absent.
pub fn minutes_by_type(sessions: &[MeditationSession]) -> BTreeMap<MeditationType, u32> {
    let mut totals = BTreeMap::new();
    for session in sessions {
        let total = totals.entry(session.kind).or_insert(0u32);
        *total = total.saturating_add(session.duration);
    }
    totals
}
