//! Streak computation.

use chrono::TimeZone;
use habitally_core::{Calendar, Time};

use crate::daily::DailyLog;

/// Consecutive completed days walking backward from today.
///
/// The walk starts at `now`'s day, so a today that has not met its target
/// yields 0 even when yesterday and earlier were completed.
pub fn current_streak<L, Tz>(log: &L, now: Time, calendar: &Calendar<Tz>) -> u32
where
    L: DailyLog + ?Sized,
    Tz: TimeZone,
{
    let mut streak = 0;
    let mut day = now;
    while log.is_completed_on(day, calendar) {
        streak += 1;
        day = calendar.days_ago(1, day);
    }
    streak
}

/// Longest run of consecutive completed local dates in the whole history.
pub fn longest_streak<L, Tz>(log: &L, calendar: &Calendar<Tz>) -> u32
where
    L: DailyLog + ?Sized,
    Tz: TimeZone,
{
    let mut longest = 0;
    let mut run = 0;
    let mut previous = None;
    for date in log.completed_dates(calendar) {
        run = match previous.and_then(|p: chrono::NaiveDate| p.succ_opt()) {
            Some(expected) if expected == date => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(date);
    }
    longest
}

/// Highest current streak among `logs`, 0 when empty.
pub fn best_current_streak<'a, L, Tz, I>(logs: I, now: Time, calendar: &Calendar<Tz>) -> u32
where
    L: DailyLog + 'a,
    Tz: TimeZone,
    I: IntoIterator<Item = &'a L>,
{
    logs.into_iter()
        .map(|log| current_streak(log, now, calendar))
        .max()
        .unwrap_or(0)
}
