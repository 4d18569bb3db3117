//! Predefined routines users can start from.

use chrono::TimeZone;
use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::routine::{Routine, RoutineActivity, TimeOfDay};
use crate::Time;

raw_value_enum! {
    /// Built-in routine template.
    pub enum RoutineTemplate {
        /// Energizing Morning
        Morning => "Morning",
        /// Peaceful Evening
        Evening => "Evening",
        /// Fitness Focus
        Workout => "Workout",
        /// Learning Session
        Study => "Study",
    }
}

impl RoutineTemplate {
    /// Build a fresh routine (new ids) from this template, created now.
    pub fn build(&self) -> Routine {
        self.build_on(chrono::Utc::now(), &Calendar::local())
    }

    /// Build a fresh routine created at `now`, with its reminder on `now`'s
    /// local date in `calendar`.
    pub fn build_on<Tz: TimeZone>(&self, now: Time, calendar: &Calendar<Tz>) -> Routine {
        let assemble = |name: &str, description: &str, time_of_day: TimeOfDay, activities: Vec<RoutineActivity>| {
            let mut routine = Routine::created_on(name, description, time_of_day, now, calendar);
            routine.activities = activities;
            routine
        };
        match self {
            RoutineTemplate::Morning => assemble(
                "Energizing Morning",
                "Start your day with purpose and energy",
                TimeOfDay::Morning,
                vec![
                    RoutineActivity::new("Drink Water", "Hydrate after sleep", 2, 1),
                    RoutineActivity::new("Stretch", "Light stretching or yoga", 10, 2),
                    RoutineActivity::new("Meditation", "5-minute mindfulness practice", 5, 3),
                    RoutineActivity::new("Review Goals", "Check daily priorities", 5, 4),
                    RoutineActivity::new("Healthy Breakfast", "Nutritious meal to fuel your day", 15, 5),
                ],
            ),
            RoutineTemplate::Evening => assemble(
                "Peaceful Evening",
                "Wind down and prepare for rest",
                TimeOfDay::Evening,
                vec![
                    RoutineActivity::new("Reflect on Day", "Journal about today's experiences", 10, 1),
                    RoutineActivity::new("Plan Tomorrow", "Set priorities for tomorrow", 5, 2),
                    RoutineActivity::new("Digital Detox", "Put away devices", 1, 3),
                    RoutineActivity::new("Reading", "Read something inspiring", 20, 4).optional(),
                    RoutineActivity::new("Prepare for Sleep", "Get ready for restful sleep", 15, 5),
                ],
            ),
            RoutineTemplate::Workout => assemble(
                "Fitness Focus",
                "Stay active and healthy",
                TimeOfDay::Afternoon,
                vec![
                    RoutineActivity::new("Warm-up", "Light cardio and stretching", 10, 1),
                    RoutineActivity::new("Main Workout", "Strength or cardio training", 30, 2),
                    RoutineActivity::new("Cool Down", "Stretching and recovery", 10, 3),
                    RoutineActivity::new("Hydrate", "Drink water and refuel", 5, 4),
                ],
            ),
            RoutineTemplate::Study => assemble(
                "Learning Session",
                "Focused time for growth and learning",
                TimeOfDay::Afternoon,
                vec![
                    RoutineActivity::new("Review Previous Material", "Quick recap of last session", 10, 1),
                    RoutineActivity::new("Active Learning", "Engage with new content", 25, 2),
                    RoutineActivity::new("Break", "Short rest to recharge", 5, 3),
                    RoutineActivity::new("Practice/Apply", "Apply what you've learned", 20, 4),
                    RoutineActivity::new("Summarize", "Note key takeaways", 10, 5),
                ],
            ),
        }
    }
}

/// One fresh routine per template.
pub fn routine_templates() -> Vec<Routine> {
    RoutineTemplate::ALL.iter().map(RoutineTemplate::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_template_durations() {
        assert_eq!(RoutineTemplate::Morning.build().estimated_duration(), 37);
        assert_eq!(RoutineTemplate::Evening.build().estimated_duration(), 51);
        assert_eq!(RoutineTemplate::Workout.build().estimated_duration(), 55);
        assert_eq!(RoutineTemplate::Study.build().estimated_duration(), 70);
    }

    #[test]
    fn test_build_on_places_reminder_in_calendar_day() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let cal = Calendar::new(offset);
        // 2025-10-20 20:00 UTC is already 2025-10-21 in UTC+9.
        let now = Utc.with_ymd_and_hms(2025, 10, 20, 20, 0, 0).unwrap();
        let routine = RoutineTemplate::Morning.build_on(now, &cal);
        assert_eq!(routine.created_date, now);
        assert_eq!(
            routine.reminder_time,
            Some(Utc.with_ymd_and_hms(2025, 10, 20, 22, 0, 0).unwrap())
        );
        assert_eq!(routine.activities.len(), 5);
    }

    #[test]
    fn test_templates_get_fresh_ids() {
        let a = RoutineTemplate::Morning.build();
        let b = RoutineTemplate::Morning.build();
        assert_ne!(a.id, b.id);
        assert_ne!(a.activities[0].id, b.activities[0].id);
        assert_eq!(routine_templates().len(), 4);
    }
}
