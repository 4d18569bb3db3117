//! Sample data for a first launch.

use chrono::TimeZone;
use habitally_core::{
    Calendar, FrequencyType, Goal, GoalCategory, Habit, HabitCategory, Milestone, Priority, Time,
};

/// Four starter habits.
pub fn sample_habits() -> Vec<Habit> {
    let habit = |name: &str, description: &str, category, target, message: &str| {
        Habit::new(name, description, category)
            .with_target(target, FrequencyType::Daily)
            .with_motivational_message(message)
    };
    vec![
        habit(
            "Drink Water",
            "Stay hydrated throughout the day",
            HabitCategory::Health,
            8,
            "Hydration is the foundation of health! 💧",
        ),
        habit(
            "Morning Meditation",
            "Start the day with mindfulness",
            HabitCategory::Mindfulness,
            1,
            "Peace begins with a single breath 🧘‍♀️",
        ),
        habit(
            "Read for 30 minutes",
            "Expand knowledge and imagination",
            HabitCategory::Learning,
            1,
            "Every page is a step toward wisdom 📚",
        ),
        habit(
            "Exercise",
            "Keep your body strong and healthy",
            HabitCategory::Fitness,
            1,
            "Your body is your temple - treat it well! 💪",
        ),
    ]
}

/// Two starter goals with two milestones each, dated relative to `now`.
pub fn sample_goals<Tz: TimeZone>(now: Time, calendar: &Calendar<Tz>) -> Vec<Goal> {
    let mut routine = Goal::new(
        "Build a Consistent Morning Routine",
        "Establish a healthy morning routine that sets a positive tone for each day",
        GoalCategory::Lifestyle,
        calendar.add_months(1, now),
        Priority::High,
    )
    .created_at(now);
    routine.add_milestone(Milestone::new(
        "Define routine activities",
        "List 5 key morning activities",
        calendar.days_after(7, now),
    ));
    routine.add_milestone(Milestone::new(
        "Practice for 1 week",
        "Follow routine for 7 consecutive days",
        calendar.days_after(14, now),
    ));

    let mut skill = Goal::new(
        "Learn a New Skill",
        "Master a new skill that contributes to personal or professional growth",
        GoalCategory::Education,
        calendar.add_months(12, now),
        Priority::Medium,
    )
    .created_at(now);
    skill.add_milestone(Milestone::new(
        "Choose skill to learn",
        "Research and select a skill to focus on",
        calendar.days_after(3, now),
    ));
    skill.add_milestone(Milestone::new(
        "Complete first course",
        "Finish an introductory course or tutorial",
        calendar.add_months(3, now),
    ));

    vec![routine, skill]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_sample_habits() {
        let habits = sample_habits();
        assert_eq!(habits.len(), 4);
        assert_eq!(habits[0].name, "Drink Water");
        assert_eq!(habits[0].target_frequency, 8);
        assert!(habits.iter().all(|h| h.is_active && h.completions.is_empty()));
        assert!(habits[3].motivational_message.starts_with("Your body"));
    }

    #[test]
    fn test_sample_goals_are_dated_from_now() {
        let now = Utc.with_ymd_and_hms(2025, 10, 20, 9, 0, 0).unwrap();
        let cal = Calendar::new(Utc);
        let goals = sample_goals(now, &cal);

        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].priority, Priority::High);
        assert_eq!(goals[0].target_date, Utc.with_ymd_and_hms(2025, 11, 20, 9, 0, 0).unwrap());
        assert_eq!(goals[1].target_date, Utc.with_ymd_and_hms(2026, 10, 20, 9, 0, 0).unwrap());
        assert!(goals.iter().all(|g| g.milestones.len() == 2 && g.progress() == 0.0));
        assert_eq!(goals[1].milestones[0].title, "Choose skill to learn");
        assert!(goals[1].milestones[0].target_date < goals[1].milestones[1].target_date);
    }
}
