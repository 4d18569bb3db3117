//! Change notifications emitted by the repository.

use std::fmt;

use habitally_core::Time;

/// A persisted slice of repository state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    /// Habits
    Habits,
    /// Goals
    Goals,
    /// Routines
    Routines,
    /// Reflections
    Reflections,
    /// Meditation sessions
    MeditationSessions,
    /// The onboarding flag
    Onboarding,
}

impl Collection {
    /// Every collection, in persistence order.
    pub const ALL: [Collection; 6] = [
        Collection::Habits,
        Collection::Goals,
        Collection::Routines,
        Collection::Reflections,
        Collection::MeditationSessions,
        Collection::Onboarding,
    ];

    /// Storage key this collection is persisted under.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Habits => "habits",
            Collection::Goals => "goals",
            Collection::Routines => "routines",
            Collection::Reflections => "reflections",
            Collection::MeditationSessions => "meditationSessions",
            Collection::Onboarding => "hasCompletedOnboarding",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// What happened to a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Contents changed and should be written
    Updated,
    /// Collection was wiped and its persisted copy should be removed
    Cleared,
}

/// Emitted after every state-changing mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Affected collection
    pub collection: Collection,
    /// Kind of change
    pub kind: ChangeKind,
    /// When the mutation happened
    pub timestamp: Time,
}

impl ChangeEvent {
    /// An `Updated` event stamped now.
    pub fn updated(collection: Collection) -> Self {
        Self {
            collection,
            kind: ChangeKind::Updated,
            timestamp: chrono::Utc::now(),
        }
    }

    /// A `Cleared` event stamped now.
    pub fn cleared(collection: Collection) -> Self {
        Self {
            collection,
            kind: ChangeKind::Cleared,
            timestamp: chrono::Utc::now(),
        }
    }
}
