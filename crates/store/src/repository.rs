//! In-memory owner of every user collection.

use habitally_core::{
    Goal, GoalId, Habit, HabitCompletion, HabitId, MeditationSession, Milestone, MilestoneId,
    Reflection, ReflectionId, Routine, RoutineId, SessionId, Time,
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::event::{ChangeEvent, Collection};

/// Plain collection values, used to build a [`Repository`] from storage.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    /// Habits
    pub habits: Vec<Habit>,
    /// Goals
    pub goals: Vec<Goal>,
    /// Routines
    pub routines: Vec<Routine>,
    /// Reflections
    pub reflections: Vec<Reflection>,
    /// Meditation sessions
    pub meditation_sessions: Vec<MeditationSession>,
    /// Onboarding finished
    pub has_completed_onboarding: bool,
}

/// Holds habits, goals, routines, reflections, meditation sessions and the
/// onboarding flag.
///
/// Mutators that target a missing id do nothing and emit nothing. Every
/// mutation that changes state notifies subscribers once per touched
/// collection.
#[derive(Debug, Default)]
pub struct Repository {
    data: Collections,
    subscribers: Vec<UnboundedSender<ChangeEvent>>,
}

impl Repository {
    /// An empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository holding `data`.
    pub fn from_collections(data: Collections) -> Self {
        Self {
            data,
            subscribers: Vec::new(),
        }
    }

    /// Receive a [`ChangeEvent`] after every state-changing mutation.
    pub fn subscribe(&mut self) -> UnboundedReceiver<ChangeEvent> {
        let (tx, rx) = unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: ChangeEvent) {
        debug!("{:?} {}", event.kind, event.collection);
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn changed(&mut self, collection: Collection) {
        self.emit(ChangeEvent::updated(collection));
    }

    // === Read access ===

    /// All habits in insertion order.
    pub fn habits(&self) -> &[Habit] {
        &self.data.habits
    }

    /// All goals in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.data.goals
    }

    /// All routines in insertion order.
    pub fn routines(&self) -> &[Routine] {
        &self.data.routines
    }

    /// All reflections in insertion order.
    pub fn reflections(&self) -> &[Reflection] {
        &self.data.reflections
    }

    /// All meditation sessions in insertion order.
    pub fn meditation_sessions(&self) -> &[MeditationSession] {
        &self.data.meditation_sessions
    }

    /// Whether onboarding was finished.
    pub fn has_completed_onboarding(&self) -> bool {
        self.data.has_completed_onboarding
    }

    /// Look up a habit.
    pub fn habit(&self, id: HabitId) -> Option<&Habit> {
        self.data.habits.iter().find(|h| h.id == id)
    }

    /// Look up a goal.
    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.data.goals.iter().find(|g| g.id == id)
    }

    /// Look up a routine.
    pub fn routine(&self, id: RoutineId) -> Option<&Routine> {
        self.data.routines.iter().find(|r| r.id == id)
    }

    /// Look up a reflection.
    pub fn reflection(&self, id: ReflectionId) -> Option<&Reflection> {
        self.data.reflections.iter().find(|r| r.id == id)
    }

    // === Habits ===

    /// Append a habit.
    pub fn add_habit(&mut self, habit: Habit) {
        debug!("Adding habit {}", habit.id);
        self.data.habits.push(habit);
        self.changed(Collection::Habits);
    }

    /// Replace the habit with the same id.
    pub fn update_habit(&mut self, habit: Habit) -> bool {
        let id = habit.id;
        if replace(&mut self.data.habits, habit, |h| h.id == id) {
            self.changed(Collection::Habits);
            return true;
        }
        debug!("No habit {} to update", id);
        false
    }

    /// Remove every habit with this id.
    pub fn delete_habit(&mut self, id: HabitId) -> bool {
        if remove_all(&mut self.data.habits, |h| h.id == id) {
            self.changed(Collection::Habits);
            return true;
        }
        debug!("No habit {} to delete", id);
        false
    }

    /// Log a completion stamped now.
    pub fn complete_habit(&mut self, id: HabitId, notes: Option<String>) -> bool {
        self.complete_habit_at(id, chrono::Utc::now(), notes)
    }

    /// Log a completion at `at`.
    pub fn complete_habit_at(&mut self, id: HabitId, at: Time, notes: Option<String>) -> bool {
        let Some(habit) = self.data.habits.iter_mut().find(|h| h.id == id) else {
            debug!("No habit {} to complete", id);
            return false;
        };
        habit.record(HabitCompletion::at(at, notes));
        self.changed(Collection::Habits);
        true
    }

    // === Goals ===

    /// Append a goal.
    pub fn add_goal(&mut self, goal: Goal) {
        debug!("Adding goal {}", goal.id);
        self.data.goals.push(goal);
        self.changed(Collection::Goals);
    }

    /// Replace the goal with the same id.
    pub fn update_goal(&mut self, goal: Goal) -> bool {
        let id = goal.id;
        if replace(&mut self.data.goals, goal, |g| g.id == id) {
            self.changed(Collection::Goals);
            return true;
        }
        debug!("No goal {} to update", id);
        false
    }

    /// Remove every goal with this id.
    pub fn delete_goal(&mut self, id: GoalId) -> bool {
        if remove_all(&mut self.data.goals, |g| g.id == id) {
            self.changed(Collection::Goals);
            return true;
        }
        debug!("No goal {} to delete", id);
        false
    }

    /// Mark a goal completed.
    pub fn complete_goal(&mut self, id: GoalId) -> bool {
        let Some(goal) = self.data.goals.iter_mut().find(|g| g.id == id) else {
            debug!("No goal {} to complete", id);
            return false;
        };
        if goal.is_completed {
            return true;
        }
        goal.is_completed = true;
        self.changed(Collection::Goals);
        true
    }

    /// Insert a milestone into a goal, keeping milestones in date order.
    pub fn add_milestone(&mut self, goal_id: GoalId, milestone: Milestone) -> bool {
        let Some(goal) = self.data.goals.iter_mut().find(|g| g.id == goal_id) else {
            debug!("No goal {} for milestone", goal_id);
            return false;
        };
        goal.add_milestone(milestone);
        self.changed(Collection::Goals);
        true
    }

    /// Flip a milestone's completion, stamping now.
    pub fn toggle_milestone(&mut self, goal_id: GoalId, milestone_id: MilestoneId) -> bool {
        self.toggle_milestone_at(goal_id, milestone_id, chrono::Utc::now())
    }

    /// Flip a milestone's completion, stamping `at` when it becomes complete.
    pub fn toggle_milestone_at(&mut self, goal_id: GoalId, milestone_id: MilestoneId, at: Time) -> bool {
        let toggled = self
            .data
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .is_some_and(|goal| goal.toggle_milestone(milestone_id, at));
        if toggled {
            self.changed(Collection::Goals);
        } else {
            debug!("No milestone {} in goal {}", milestone_id, goal_id);
        }
        toggled
    }

    // === Routines ===

    /// Append a routine.
    pub fn add_routine(&mut self, routine: Routine) {
        debug!("Adding routine {}", routine.id);
        self.data.routines.push(routine);
        self.changed(Collection::Routines);
    }

    /// Replace the routine with the same id.
    pub fn update_routine(&mut self, routine: Routine) -> bool {
        let id = routine.id;
        if replace(&mut self.data.routines, routine, |r| r.id == id) {
            self.changed(Collection::Routines);
            return true;
        }
        debug!("No routine {} to update", id);
        false
    }

    /// Remove every routine with this id.
    pub fn delete_routine(&mut self, id: RoutineId) -> bool {
        if remove_all(&mut self.data.routines, |r| r.id == id) {
            self.changed(Collection::Routines);
            return true;
        }
        debug!("No routine {} to delete", id);
        false
    }

    /// Log a routine run stamped now.
    pub fn complete_routine(&mut self, id: RoutineId, notes: Option<String>) -> bool {
        self.complete_routine_at(id, chrono::Utc::now(), notes, None)
    }

    /// Log a routine run at `at`, optionally with the minutes it actually took.
    pub fn complete_routine_at(
        &mut self,
        id: RoutineId,
        at: Time,
        notes: Option<String>,
        duration: Option<u32>,
    ) -> bool {
        let Some(routine) = self.data.routines.iter_mut().find(|r| r.id == id) else {
            debug!("No routine {} to complete", id);
            return false;
        };
        routine.complete(notes, duration, at);
        self.changed(Collection::Routines);
        true
    }

    // === Reflections ===

    /// Append a reflection.
    pub fn add_reflection(&mut self, reflection: Reflection) {
        self.data.reflections.push(reflection);
        self.changed(Collection::Reflections);
    }

    /// Replace the reflection with the same id.
    pub fn update_reflection(&mut self, reflection: Reflection) -> bool {
        let id = reflection.id;
        if replace(&mut self.data.reflections, reflection, |r| r.id == id) {
            self.changed(Collection::Reflections);
            return true;
        }
        debug!("No reflection {} to update", id);
        false
    }

    /// Remove every reflection with this id.
    pub fn delete_reflection(&mut self, id: ReflectionId) -> bool {
        if remove_all(&mut self.data.reflections, |r| r.id == id) {
            self.changed(Collection::Reflections);
            return true;
        }
        debug!("No reflection {} to delete", id);
        false
    }

    // === Meditation ===

    /// Append a meditation session.
    pub fn add_meditation_session(&mut self, session: MeditationSession) {
        self.data.meditation_sessions.push(session);
        self.changed(Collection::MeditationSessions);
    }

    /// Replace the session with the same id.
    pub fn update_meditation_session(&mut self, session: MeditationSession) -> bool {
        let id = session.id;
        if replace(&mut self.data.meditation_sessions, session, |s| s.id == id) {
            self.changed(Collection::MeditationSessions);
            return true;
        }
        debug!("No meditation session {} to update", id);
        false
    }

    /// Remove every session with this id.
    pub fn delete_meditation_session(&mut self, id: SessionId) -> bool {
        if remove_all(&mut self.data.meditation_sessions, |s| s.id == id) {
            self.changed(Collection::MeditationSessions);
            return true;
        }
        debug!("No meditation session {} to delete", id);
        false
    }

    // === Onboarding and reset ===

    /// Record whether onboarding was finished.
    pub fn set_onboarding_completed(&mut self, completed: bool) {
        if self.data.has_completed_onboarding != completed {
            self.data.has_completed_onboarding = completed;
            self.changed(Collection::Onboarding);
        }
    }

    /// Clear every collection and the onboarding flag.
    ///
    /// Emits [`ChangeKind::Cleared`](crate::ChangeKind::Cleared) for each
    /// collection so persisted copies are removed.
    pub fn reset_all(&mut self) {
        debug!("Resetting all data");
        self.data = Collections::default();
        for collection in Collection::ALL {
            self.emit(ChangeEvent::cleared(collection));
        }
    }
}

fn replace<T>(items: &mut [T], item: T, matches: impl Fn(&T) -> bool) -> bool {
    match items.iter_mut().find(|existing| matches(existing)) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

fn remove_all<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(|item| !matches(item));
    items.len() != before
}
