//! Habitally core data models.
//!
//! Plain entity types for habits, goals, routines, reflections and
//! meditation sessions, plus the calendar arithmetic every derived
//! statistic depends on.

#![warn(missing_docs)]

#[macro_use]
mod macros;

// Identities and errors
mod error;
mod id;

// Date windows
mod calendar;

// Entities
mod goal;
mod habit;
mod meditation;
mod reflection;
mod routine;

// Fixed content
pub mod prompts;
mod templates;

// Re-exports
pub use calendar::Calendar;
pub use error::CoreError;
pub use id::*;

pub use goal::{Goal, GoalCategory, Milestone, Priority};
pub use habit::{FrequencyType, Habit, HabitCategory, HabitCompletion};
pub use meditation::{MeditationSession, MeditationType};
pub use prompts::PromptPeriod;
pub use reflection::{Mood, PromptCategory, Reflection, ReflectionPrompt};
pub use routine::{Routine, RoutineActivity, RoutineCompletion, TimeOfDay};
pub use templates::{routine_templates, RoutineTemplate};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
