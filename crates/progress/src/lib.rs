//! Derived statistics (Layer 2)
//!
//! Streaks, completion rates, goal listings and dashboard counters. Every
//! function is pure: entity values, an instant and a calendar in, a value out.

#![warn(missing_docs)]

pub mod aggregate;
pub mod daily;
pub mod goals;
pub mod overview;
pub mod rate;
pub mod streak;

pub use aggregate::{
    completions_this_week, habits_completed_today, has_reflected_today,
    lifetime_meditation_minutes, minutes_by_type, reflections_this_week,
    routines_completed_today, total_meditation_minutes,
};
pub use daily::{
    completions_for_date, is_completed_for_date, is_routine_completed_for_date,
    progress_for_date, routine_completions_for_date, DailyLog,
};
pub use goals::{
    active_count, active_goals_by_urgency, completed_count, completed_goals_recent_first,
    goal_progress, goal_success_rate, overdue_goals, short_term_goals,
};
pub use overview::{HabitReport, Overview, OverviewInput, RoutineReport, StatsConfig};
pub use rate::{completion_rate, recent_days, today_completion_rate, DayStatus};
pub use streak::{best_current_streak, current_streak, longest_streak};
