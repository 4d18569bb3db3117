//! Unique identifiers for Habitally entities.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

define_id!(
    /// Unique identifier for a Habit
    HabitId
);

define_id!(
    /// Unique identifier for a HabitCompletion
    CompletionId
);

define_id!(
    /// Unique identifier for a Goal
    GoalId
);

define_id!(
    /// Unique identifier for a Milestone
    MilestoneId
);

define_id!(
    /// Unique identifier for a Routine
    RoutineId
);

define_id!(
    /// Unique identifier for a RoutineActivity
    ActivityId
);

define_id!(
    /// Unique identifier for a RoutineCompletion
    RoutineCompletionId
);

define_id!(
    /// Unique identifier for a Reflection
    ReflectionId
);

define_id!(
    /// Unique identifier for a ReflectionPrompt snapshot
    PromptId
);

define_id!(
    /// Unique identifier for a MeditationSession
    SessionId
);
