//! Goal listings and counters.

use chrono::TimeZone;
use habitally_core::{Calendar, Goal, Time};

/// Milestone-based completion fraction of a goal.
pub fn goal_progress(goal: &Goal) -> f64 {
    goal.progress()
}

/// Goals not yet completed.
pub fn active_count(goals: &[Goal]) -> usize {
    goals.iter().filter(|g| !g.is_completed).count()
}

/// Goals marked completed.
pub fn completed_count(goals: &[Goal]) -> usize {
    goals.iter().filter(|g| g.is_completed).count()
}

/// Share of all goals that are completed; 0 when there are none.
pub fn goal_success_rate(goals: &[Goal]) -> f64 {
    if goals.is_empty() {
        return 0.0;
    }
    completed_count(goals) as f64 / goals.len() as f64
}

/// Open goals, most urgent first: by priority, then nearest target date.
pub fn active_goals_by_urgency(goals: &[Goal]) -> Vec<&Goal> {
    let mut active: Vec<&Goal> = goals.iter().filter(|g| !g.is_completed).collect();
    active.sort_by(|a, b| {
        a.priority
            .sort_order()
            .cmp(&b.priority.sort_order())
            .then(a.target_date.cmp(&b.target_date))
    });
    active
}

/// Completed goals, newest by creation date first.
pub fn completed_goals_recent_first(goals: &[Goal]) -> Vec<&Goal> {
    let mut done: Vec<&Goal> = goals.iter().filter(|g| g.is_completed).collect();
    done.sort_by(|a, b| b.created_date.cmp(&a.created_date));
    done
}

/// Open goals whose target date has passed.
pub fn overdue_goals(goals: &[Goal], now: Time) -> Vec<&Goal> {
    goals.iter().filter(|g| g.is_overdue(now)).collect()
}

/// Open goals due within three months.
pub fn short_term_goals<'a, Tz: TimeZone>(
    goals: &'a [Goal],
    now: Time,
    calendar: &Calendar<Tz>,
) -> Vec<&'a Goal> {
    goals
        .iter()
        .filter(|g| !g.is_completed && g.is_short_term(now, calendar))
        .collect()
}
