//! Habit model - a recurring behaviour with a per-day completion target.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::id::{CompletionId, HabitId};
use crate::prompts;
use crate::Time;

raw_value_enum! {
    /// What area of life a habit belongs to.
    pub enum HabitCategory {
        /// Physical health
        Health => "Health",
        /// Getting things done
        Productivity => "Productivity",
        /// Attention and calm
        Mindfulness => "Mindfulness",
        /// Exercise
        Fitness => "Fitness",
        /// Study and reading
        Learning => "Learning",
        /// Relationships and community
        Social => "Social",
        /// Making things
        Creativity => "Creativity",
    }
}

raw_value_enum! {
    /// Whether the target count is meant per day or per week.
    pub enum FrequencyType {
        /// Target counted per calendar day
        Daily => "Daily",
        /// Target counted per calendar week
        Weekly => "Weekly",
    }
}

/// A habit the user is building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier
    pub id: HabitId,

    /// Habit name
    pub name: String,

    /// Longer description
    pub description: String,

    /// Category
    pub category: HabitCategory,

    /// Completions needed per period (at least 1)
    pub target_frequency: u32,

    /// Period the target applies to
    pub frequency_type: FrequencyType,

    /// Inactive habits are kept but hidden from daily stats
    pub is_active: bool,

    /// When created
    pub created_date: Time,

    /// Completion log, in insertion order
    pub completions: Vec<HabitCompletion>,

    /// Shown after a completion
    pub motivational_message: String,
}

impl Habit {
    /// Create an active daily habit with target 1 and a random default message.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: HabitCategory,
    ) -> Self {
        Self::with_rng(name, description, category, &mut rand::thread_rng())
    }

    /// Like [`Habit::new`], drawing the default message from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        name: impl Into<String>,
        description: impl Into<String>,
        category: HabitCategory,
        rng: &mut R,
    ) -> Self {
        Self {
            id: HabitId::new(),
            name: name.into(),
            description: description.into(),
            category,
            target_frequency: 1,
            frequency_type: FrequencyType::Daily,
            is_active: true,
            created_date: chrono::Utc::now(),
            completions: Vec::new(),
            motivational_message: prompts::motivational_message(rng).to_string(),
        }
    }

    /// Set the target count and its period. A target of 0 becomes 1.
    pub fn with_target(mut self, target_frequency: u32, frequency_type: FrequencyType) -> Self {
        self.target_frequency = target_frequency.max(1);
        self.frequency_type = frequency_type;
        self
    }

    /// Replace the motivational message. Blank input keeps the default.
    pub fn with_motivational_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.trim().is_empty() {
            self.motivational_message = message;
        }
        self
    }

    /// Override the creation timestamp.
    pub fn created_at(mut self, at: Time) -> Self {
        self.created_date = at;
        self
    }

    /// Target count, treating a corrupted 0 as 1.
    pub fn effective_target(&self) -> u32 {
        self.target_frequency.max(1)
    }

    /// Append a completion record.
    pub fn record(&mut self, completion: HabitCompletion) {
        self.completions.push(completion);
    }
}

/// One logged completion of a habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitCompletion {
    /// Unique identifier
    pub id: CompletionId,

    /// When the habit was done
    pub completed_date: Time,

    /// Optional free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HabitCompletion {
    /// A completion stamped now.
    pub fn new(notes: Option<String>) -> Self {
        Self::at(chrono::Utc::now(), notes)
    }

    /// A completion stamped at `completed_date`.
    pub fn at(completed_date: Time, notes: Option<String>) -> Self {
        Self {
            id: CompletionId::new(),
            completed_date,
            notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_habit_defaults() {
        let habit = Habit::new("Read", "Thirty minutes", HabitCategory::Learning);
        assert!(habit.is_active);
        assert!(habit.completions.is_empty());
        assert_eq!(habit.target_frequency, 1);
        assert_eq!(habit.frequency_type, FrequencyType::Daily);
        assert!(prompts::MOTIVATIONAL_MESSAGES.contains(&habit.motivational_message.as_str()));
    }

    #[test]
    fn test_default_message_is_deterministic_with_seeded_rng() {
        let a = Habit::with_rng("Run", "", HabitCategory::Fitness, &mut StdRng::seed_from_u64(9));
        let b = Habit::with_rng("Run", "", HabitCategory::Fitness, &mut StdRng::seed_from_u64(9));
        assert_eq!(a.motivational_message, b.motivational_message);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_zero_target_is_clamped() {
        let habit = Habit::new("Water", "", HabitCategory::Health).with_target(0, FrequencyType::Weekly);
        assert_eq!(habit.target_frequency, 1);
        assert_eq!(habit.frequency_type, FrequencyType::Weekly);
    }

    #[test]
    fn test_blank_message_keeps_default() {
        let habit = Habit::new("Water", "", HabitCategory::Health);
        let default = habit.motivational_message.clone();
        let habit = habit.with_motivational_message("   ");
        assert_eq!(habit.motivational_message, default);
        let habit = habit.with_motivational_message("Drink up");
        assert_eq!(habit.motivational_message, "Drink up");
    }

    #[test]
    fn test_serializes_with_raw_field_names() {
        let mut habit = Habit::new("Water", "Stay hydrated", HabitCategory::Health)
            .with_target(8, FrequencyType::Daily);
        habit.record(HabitCompletion::new(None));
        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(json["category"], "Health");
        assert_eq!(json["frequencyType"], "Daily");
        assert_eq!(json["targetFrequency"], 8);
        assert_eq!(json["isActive"], true);
        assert!(json["completions"][0].get("notes").is_none());

        let back: Habit = serde_json::from_value(json).unwrap();
        assert_eq!(back, habit);
    }
}
