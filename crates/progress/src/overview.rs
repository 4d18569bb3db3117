//! Dashboard snapshot.

use chrono::TimeZone;
use habitally_core::{
    Calendar, Goal, Habit, HabitId, MeditationSession, Reflection, Routine, RoutineId, Time,
};
use serde::Serialize;

use crate::aggregate::{
    completions_this_week, habits_completed_today, has_reflected_today,
    lifetime_meditation_minutes, reflections_this_week, routines_completed_today,
    total_meditation_minutes,
};
use crate::daily::DailyLog;
use crate::goals::{active_count, completed_count, goal_success_rate, overdue_goals};
use crate::rate::{completion_rate, recent_days, today_completion_rate, DayStatus};
use crate::streak::{best_current_streak, current_streak, longest_streak};

/// Windows used by [`Overview::compute`].
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// Days in the per-habit success rate
    pub completion_window_days: u32,
    /// Days of meditation counted in `meditation_minutes`
    pub meditation_window_days: u32,
    /// Days shown in each habit's history strip
    pub history_days: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            completion_window_days: 30,
            meditation_window_days: 30,
            history_days: 7,
        }
    }
}

/// Borrowed view of the collections a snapshot reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverviewInput<'a> {
    /// Habits
    pub habits: &'a [Habit],
    /// Goals
    pub goals: &'a [Goal],
    /// Routines
    pub routines: &'a [Routine],
    /// Reflections
    pub reflections: &'a [Reflection],
    /// Meditation sessions
    pub sessions: &'a [MeditationSession],
}

/// Per-habit figures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitReport {
    /// Habit
    pub id: HabitId,
    /// Habit name
    pub name: String,
    /// Inactive habits are reported but excluded from today's rate
    pub is_active: bool,
    /// Fraction of today's target reached
    pub today_progress: f64,
    /// Consecutive completed days ending today
    pub current_streak: u32,
    /// Longest run ever
    pub longest_streak: u32,
    /// Success rate over the configured window
    pub completion_rate: f64,
    /// Completions since the week started
    pub completions_this_week: usize,
    /// Trailing history, oldest first
    pub recent: Vec<DayStatus>,
}

/// Per-routine figures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineReport {
    /// Routine
    pub id: RoutineId,
    /// Routine name
    pub name: String,
    /// Sum of activity minutes
    pub estimated_duration: u32,
    /// Done at least once today
    pub completed_today: bool,
    /// Consecutive completed days ending today
    pub current_streak: u32,
}

/// Counters a dashboard shows, computed at one instant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    /// When computed
    pub timestamp: Time,

    /// Number of habits
    pub habit_count: usize,
    /// Habits not paused
    pub active_habits: usize,
    /// Active habits that met today's target
    pub habits_completed_today: usize,
    /// Share of active habits done today
    pub today_completion_rate: f64,
    /// Best current habit streak
    pub best_habit_streak: u32,

    /// Number of routines
    pub routine_count: usize,
    /// Routines not paused
    pub active_routines: usize,
    /// Routines done today
    pub routines_completed_today: usize,
    /// Best current routine streak
    pub best_routine_streak: u32,

    /// Open goals
    pub active_goals: usize,
    /// Completed goals
    pub completed_goals: usize,
    /// Open goals past their target date
    pub overdue_goals: usize,
    /// Completed share of all goals
    pub goal_success_rate: f64,

    /// Reflections since the week started
    pub reflections_this_week: usize,
    /// A reflection exists for today
    pub has_reflected_today: bool,

    /// Meditation minutes within the configured window
    pub meditation_minutes: u32,
    /// Meditation minutes ever recorded
    pub lifetime_meditation_minutes: u32,

    /// One entry per habit
    pub habits: Vec<HabitReport>,
    /// One entry per routine
    pub routines: Vec<RoutineReport>,
}

impl Overview {
    /// Compute a snapshot of `input` as of `now`.
    pub fn compute<Tz: TimeZone>(
        input: &OverviewInput<'_>,
        now: Time,
        calendar: &Calendar<Tz>,
        config: &StatsConfig,
    ) -> Self {
        let habits = input
            .habits
            .iter()
            .map(|habit| HabitReport {
                id: habit.id,
                name: habit.name.clone(),
                is_active: habit.is_active,
                today_progress: habit.progress_on(now, calendar),
                current_streak: current_streak(habit, now, calendar),
                longest_streak: longest_streak(habit, calendar),
                completion_rate: completion_rate(habit, config.completion_window_days, now, calendar),
                completions_this_week: completions_this_week(habit, now, calendar),
                recent: recent_days(habit, config.history_days, now, calendar),
            })
            .collect();

        let routines = input
            .routines
            .iter()
            .map(|routine| RoutineReport {
                id: routine.id,
                name: routine.name.clone(),
                estimated_duration: routine.estimated_duration(),
                completed_today: routine.is_completed_on(now, calendar),
                current_streak: current_streak(routine, now, calendar),
            })
            .collect();

        Self {
            timestamp: now,
            habit_count: input.habits.len(),
            active_habits: input.habits.iter().filter(|h| h.is_active).count(),
            habits_completed_today: habits_completed_today(input.habits, now, calendar),
            today_completion_rate: today_completion_rate(input.habits, now, calendar),
            best_habit_streak: best_current_streak(input.habits, now, calendar),
            routine_count: input.routines.len(),
            active_routines: input.routines.iter().filter(|r| r.is_active).count(),
            routines_completed_today: routines_completed_today(input.routines, now, calendar),
            best_routine_streak: best_current_streak(input.routines, now, calendar),
            active_goals: active_count(input.goals),
            completed_goals: completed_count(input.goals),
            overdue_goals: overdue_goals(input.goals, now).len(),
            goal_success_rate: goal_success_rate(input.goals),
            reflections_this_week: reflections_this_week(input.reflections, now, calendar),
            has_reflected_today: has_reflected_today(input.reflections, now, calendar),
            meditation_minutes: total_meditation_minutes(
                input.sessions,
                config.meditation_window_days,
                now,
                calendar,
            ),
            lifetime_meditation_minutes: lifetime_meditation_minutes(input.sessions),
            habits,
            routines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::fixtures::*;
    use chrono::Duration;
    use habitally_core::{GoalCategory, MeditationType, Priority};

    #[test]
    fn test_empty_overview() {
        let overview = Overview::compute(&OverviewInput::default(), now(), &cal(), &StatsConfig::default());
        assert_eq!(overview.habit_count, 0);
        assert_eq!(overview.active_habits, 0);
        assert_eq!(overview.goal_success_rate, 0.0);
        assert_eq!(overview.today_completion_rate, 0.0);
        assert_eq!(overview.best_habit_streak, 0);
        assert!(!overview.has_reflected_today);
        assert!(overview.habits.is_empty());
    }

    #[test]
    fn test_overview_counters() {
        let mut paused = habit(1);
        paused.is_active = false;
        let habits = vec![habit_done_on(1, &[0, 1, 2], 1), habit(2), paused];
        let mut idle = routine_done_on(&[]);
        idle.is_active = false;
        let routines = vec![routine_done_on(&[0, 1]), idle];
        let goals = vec![Goal::new(
            "late",
            "",
            GoalCategory::Career,
            now() - Duration::days(1),
            Priority::High,
        )];
        let sessions = vec![
            MeditationSession::at(now(), 12, MeditationType::Walking),
            MeditationSession::at(now() - Duration::days(60), 8, MeditationType::Walking),
        ];
        let input = OverviewInput {
            habits: &habits,
            goals: &goals,
            routines: &routines,
            sessions: &sessions,
            ..Default::default()
        };
        let config = StatsConfig {
            history_days: 3,
            ..Default::default()
        };

        let overview = Overview::compute(&input, now(), &cal(), &config);
        assert_eq!(overview.habit_count, 3);
        assert_eq!(overview.active_habits, 2);
        assert_eq!(overview.routine_count, 2);
        assert_eq!(overview.active_routines, 1);
        assert_eq!(overview.goal_success_rate, 0.0);
        assert_eq!(overview.habits_completed_today, 1);
        assert!((overview.today_completion_rate - 0.5).abs() < 1e-9);
        assert_eq!(overview.best_habit_streak, 3);
        assert_eq!(overview.routines_completed_today, 1);
        assert_eq!(overview.best_routine_streak, 2);
        assert_eq!(overview.active_goals, 1);
        assert_eq!(overview.overdue_goals, 1);
        assert_eq!(overview.meditation_minutes, 12);
        assert_eq!(overview.lifetime_meditation_minutes, 20);
        assert_eq!(overview.habits[0].recent.len(), 3);
        assert!((overview.habits[0].completion_rate - 0.1).abs() < 1e-9);
        assert_eq!(overview.routines[0].estimated_duration, 0);
    }
}
