//! JSON encoding of repository collections.

use habitally_store::{Collection, Repository};
use serde::de::DeserializeOwned;
use tracing::warn;

use super::Result;

/// Encode one collection of `repo` as stored under its key.
pub fn encode(repo: &Repository, collection: Collection) -> Result<Vec<u8>> {
    let bytes = match collection {
        Collection::Habits => serde_json::to_vec(repo.habits())?,
        Collection::Goals => serde_json::to_vec(repo.goals())?,
        Collection::Routines => serde_json::to_vec(repo.routines())?,
        Collection::Reflections => serde_json::to_vec(repo.reflections())?,
        Collection::MeditationSessions => serde_json::to_vec(repo.meditation_sessions())?,
        Collection::Onboarding => serde_json::to_vec(&repo.has_completed_onboarding())?,
    };
    Ok(bytes)
}

/// Strictly decode stored bytes.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decode stored bytes, treating missing and undecodable values alike.
///
/// Decode failures are logged and reported as `None`.
pub fn decode_lenient<T: DeserializeOwned>(key: &str, bytes: Option<Vec<u8>>) -> Option<T> {
    let bytes = bytes?;
    match decode(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Discarding undecodable {}: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use habitally_core::{
        Calendar, FrequencyType, Goal, GoalCategory, Habit, HabitCategory, HabitCompletion,
        MeditationSession, MeditationType, Milestone, Mood, Priority, PromptCategory, Reflection,
        ReflectionPrompt, Routine, RoutineActivity, RoutineCompletion, Time, TimeOfDay,
    };
    use habitally_store::Collections;
    use serde_json::Value;

    fn now() -> Time {
        Utc.with_ymd_and_hms(2025, 10, 20, 18, 0, 0).unwrap()
    }

    fn populated() -> Repository {
        let mut habit = Habit::new("Water", "Drink", HabitCategory::Health)
            .with_target(8, FrequencyType::Weekly)
            .created_at(now());
        habit.record(HabitCompletion::at(now(), None));
        habit.record(HabitCompletion::at(now(), Some("glass".into())));

        let mut goal = Goal::new("Ship", "", GoalCategory::Career, now(), Priority::Critical)
            .created_at(now());
        goal.add_milestone(Milestone::new("Draft", "", now()));

        let mut routine = Routine::new("Night", "", TimeOfDay::Night);
        routine.add_activity(RoutineActivity::new("Read", "", 20, 1).optional());
        routine.record(RoutineCompletion::at(now(), None, Some(25)));

        let prompt = ReflectionPrompt::new("Q", PromptCategory::Creativity, false);
        let reflection = Reflection::at(now(), prompt, "A")
            .with_mood(Mood::Challenging)
            .with_gratitude(["tea"]);

        Repository::from_collections(Collections {
            habits: vec![habit],
            goals: vec![goal],
            routines: vec![routine],
            reflections: vec![reflection],
            meditation_sessions: vec![MeditationSession::at(now(), 10, MeditationType::BodyScanning)],
            has_completed_onboarding: true,
        })
    }

    fn json(repo: &Repository, collection: Collection) -> Value {
        serde_json::from_slice(&encode(repo, collection).unwrap()).unwrap()
    }

    #[test]
    fn test_round_trip_populated() {
        let repo = populated();
        let habits: Vec<Habit> = decode(&encode(&repo, Collection::Habits).unwrap()).unwrap();
        let goals: Vec<Goal> = decode(&encode(&repo, Collection::Goals).unwrap()).unwrap();
        let routines: Vec<Routine> = decode(&encode(&repo, Collection::Routines).unwrap()).unwrap();
        let reflections: Vec<Reflection> =
            decode(&encode(&repo, Collection::Reflections).unwrap()).unwrap();
        let sessions: Vec<MeditationSession> =
            decode(&encode(&repo, Collection::MeditationSessions).unwrap()).unwrap();
        let flag: bool = decode(&encode(&repo, Collection::Onboarding).unwrap()).unwrap();

        assert_eq!(habits, repo.habits());
        assert_eq!(goals, repo.goals());
        assert_eq!(routines, repo.routines());
        assert_eq!(reflections, repo.reflections());
        assert_eq!(sessions, repo.meditation_sessions());
        assert!(flag);
    }

    #[test]
    fn test_round_trip_empty() {
        let repo = Repository::new();
        for collection in Collection::ALL {
            let bytes = encode(&repo, collection).unwrap();
            let expected: &[u8] = if collection == Collection::Onboarding { b"false" } else { b"[]" };
            assert_eq!(bytes, expected);
        }
    }

    #[test]
    fn test_round_trip_with_optionals_unset() {
        let mut habit = Habit::new("Walk", "", HabitCategory::Fitness).created_at(now());
        habit.record(HabitCompletion::at(now(), None));

        let mut goal = Goal::new("Learn", "", GoalCategory::Education, now(), Priority::Low)
            .created_at(now());
        goal.add_milestone(Milestone::new("Start", "", now()));

        let mut routine = Routine::created_on("Bare", "", TimeOfDay::Evening, now(), &Calendar::new(Utc));
        routine.reminder_time = None;
        routine.record(RoutineCompletion::at(now(), None, None));

        let prompt = ReflectionPrompt::new("Q", PromptCategory::Growth, true);
        let reflection = Reflection::at(now(), prompt, "A");

        let repo = Repository::from_collections(Collections {
            habits: vec![habit],
            goals: vec![goal],
            routines: vec![routine],
            reflections: vec![reflection],
            meditation_sessions: vec![MeditationSession::at(now(), 5, MeditationType::Walking)],
            has_completed_onboarding: false,
        });

        let routines = json(&repo, Collection::Routines);
        assert!(routines[0].get("reminderTime").is_none());
        assert!(routines[0]["completions"][0].get("notes").is_none());
        assert!(routines[0]["completions"][0].get("duration").is_none());
        assert!(json(&repo, Collection::Goals)[0]["milestones"][0].get("completedDate").is_none());
        assert!(json(&repo, Collection::Reflections)[0].get("mood").is_none());
        assert!(json(&repo, Collection::MeditationSessions)[0].get("notes").is_none());

        let habits: Vec<Habit> = decode(&encode(&repo, Collection::Habits).unwrap()).unwrap();
        let goals: Vec<Goal> = decode(&encode(&repo, Collection::Goals).unwrap()).unwrap();
        let routines: Vec<Routine> = decode(&encode(&repo, Collection::Routines).unwrap()).unwrap();
        let reflections: Vec<Reflection> =
            decode(&encode(&repo, Collection::Reflections).unwrap()).unwrap();
        let sessions: Vec<MeditationSession> =
            decode(&encode(&repo, Collection::MeditationSessions).unwrap()).unwrap();

        assert_eq!(habits, repo.habits());
        assert_eq!(goals, repo.goals());
        assert_eq!(routines, repo.routines());
        assert_eq!(routines[0].reminder_time, None);
        assert_eq!(reflections, repo.reflections());
        assert_eq!(sessions, repo.meditation_sessions());
    }

    #[test]
    fn test_field_names_and_raw_values() {
        let repo = populated();

        let habits = json(&repo, Collection::Habits);
        assert_eq!(habits[0]["targetFrequency"], 8);
        assert_eq!(habits[0]["frequencyType"], "Weekly");
        assert_eq!(habits[0]["isActive"], true);
        assert!(habits[0]["completions"][0].get("notes").is_none());
        assert_eq!(habits[0]["completions"][1]["notes"], "glass");
        assert_eq!(habits[0]["createdDate"], "2025-10-20T18:00:00Z");

        let goals = json(&repo, Collection::Goals);
        assert_eq!(goals[0]["priority"], "Critical");
        assert!(goals[0]["milestones"][0].get("completedDate").is_none());

        let routines = json(&repo, Collection::Routines);
        assert_eq!(routines[0]["timeOfDay"], "Night");
        assert_eq!(routines[0]["completions"][0]["duration"], 25);
        assert_eq!(routines[0]["activities"][0]["isOptional"], true);

        let reflections = json(&repo, Collection::Reflections);
        assert_eq!(reflections[0]["mood"], "Challenging");

        let sessions = json(&repo, Collection::MeditationSessions);
        assert_eq!(sessions[0]["type"], "Body Scanning");
    }

    #[test]
    fn test_lenient_decode() {
        assert_eq!(decode_lenient::<Vec<Habit>>("habits", None), None);
        assert_eq!(decode_lenient::<Vec<Habit>>("habits", Some(b"{oops".to_vec())), None);
        assert_eq!(decode_lenient::<bool>("flag", Some(b"true".to_vec())), Some(true));
        assert_eq!(
            decode_lenient::<Vec<Habit>>("habits", Some(b"[]".to_vec())),
            Some(Vec::new())
        );
    }

    #[test]
    fn test_null_optionals_accepted() {
        let raw = r#"[{"id":"01JAAAAAAAAAAAAAAAAAAAAAAA","duration":5,"type":"Walking",
            "completedDate":"2025-10-20T18:00:00Z","notes":null}]"#;
        let sessions: Vec<MeditationSession> = decode(raw.as_bytes()).unwrap();
        assert_eq!(sessions[0].kind, MeditationType::Walking);
        assert_eq!(sessions[0].notes, None);
    }
}
