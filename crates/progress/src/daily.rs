//! Per-day completion status.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, TimeZone};
use habitally_core::{Calendar, Habit, HabitCompletion, Routine, RoutineCompletion, Time};

/// Something with a completion log and a per-day target.
///
/// Implemented for [`Habit`] (target = `target_frequency`) and [`Routine`]
/// (target = 1) so streak and rate code is shared.
pub trait DailyLog {
    /// Every completion instant, in any order.
    fn completion_times(&self) -> Box<dyn Iterator<Item = Time> + '_>;

    /// Completions needed for a day to count as done (at least 1).
    fn daily_target(&self) -> usize;

    /// Completions on `day`'s local date.
    fn completions_on<Tz: TimeZone>(&self, day: Time, calendar: &Calendar<Tz>) -> usize {
        let date = calendar.local_date(day);
        self.completion_times()
            .filter(|at| calendar.local_date(*at) == date)
            .count()
    }

    /// Whether `day` met the target.
    fn is_completed_on<Tz: TimeZone>(&self, day: Time, calendar: &Calendar<Tz>) -> bool {
        self.completions_on(day, calendar) >= self.daily_target()
    }

    /// Fraction of the target reached on `day`, capped at 1.0.
    fn progress_on<Tz: TimeZone>(&self, day: Time, calendar: &Calendar<Tz>) -> f64 {
        let ratio = self.completions_on(day, calendar) as f64 / self.daily_target() as f64;
        ratio.min(1.0)
    }

    /// Every local date on which the target was met.
    fn completed_dates<Tz: TimeZone>(&self, calendar: &Calendar<Tz>) -> BTreeSet<NaiveDate> {
        let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for at in self.completion_times() {
            *per_day.entry(calendar.local_date(at)).or_default() += 1;
        }
        let target = self.daily_target();
        per_day
            .into_iter()
            .filter(|(_, count)| *count >= target)
            .map(|(date, _)| date)
            .collect()
    }
}

impl DailyLog for Habit {
    fn completion_times(&self) -> Box<dyn Iterator<Item = Time> + '_> {
        Box::new(self.completions.iter().map(|c| c.completed_date))
    }

    fn daily_target(&self) -> usize {
        self.effective_target() as usize
    }
}

impl DailyLog for Routine {
    fn completion_times(&self) -> Box<dyn Iterator<Item = Time> + '_> {
        Box::new(self.completions.iter().map(|c| c.completed_date))
    }

    fn daily_target(&self) -> usize {
        1
    }
}

/// Habit completions logged on `date`'s local day.
pub fn completions_for_date<'a, Tz: TimeZone>(
    habit: &'a Habit,
    date: Time,
    calendar: &Calendar<Tz>,
) -> Vec<&'a HabitCompletion> {
    habit
        .completions
        .iter()
        .filter(|c| calendar.is_same_day(c.completed_date, date))
        .collect()
}

/// True iff the habit reached its target on `date`.
pub fn is_completed_for_date<Tz: TimeZone>(habit: &Habit, date: Time, calendar: &Calendar<Tz>) -> bool {
    habit.is_completed_on(date, calendar)
}

/// `min(count / target, 1.0)` for `date`.
pub fn progress_for_date<Tz: TimeZone>(habit: &Habit, date: Time, calendar: &Calendar<Tz>) -> f64 {
    habit.progress_on(date, calendar)
}

/// Routine completions logged on `date`'s local day.
pub fn routine_completions_for_date<'a, Tz: TimeZone>(
    routine: &'a Routine,
    date: Time,
    calendar: &Calendar<Tz>,
) -> Vec<&'a RoutineCompletion> {
    routine
        .completions
        .iter()
        .filter(|c| calendar.is_same_day(c.completed_date, date))
        .collect()
}

/// True iff the routine was done at least once on `date`.
pub fn is_routine_completed_for_date<Tz: TimeZone>(
    routine: &Routine,
    date: Time,
    calendar: &Calendar<Tz>,
) -> bool {
    routine.is_completed_on(date, calendar)
}
