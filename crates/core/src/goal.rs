//! Goal model - a dated objective broken into milestones.

use chrono::TimeZone;
use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::id::{GoalId, HabitId, MilestoneId};
use crate::Time;

raw_value_enum! {
    /// What area of life a goal belongs to.
    pub enum GoalCategory {
        /// Physical health
        Health => "Health",
        /// Work and career
        Career => "Career",
        /// Personal growth
        Personal => "Personal",
        /// Money
        Financial => "Financial",
        /// Family and friends
        Relationships => "Relationships",
        /// Formal or self-directed study
        Education => "Education",
        /// Everyday living
        Lifestyle => "Lifestyle",
    }
}

raw_value_enum! {
    /// How urgent a goal is.
    pub enum Priority {
        /// Someday
        Low => "Low",
        /// Default
        Medium => "Medium",
        /// Soon
        High => "High",
        /// Now
        Critical => "Critical",
    }
}

impl Priority {
    /// Ascending-urgency sort key: Critical sorts first.
    pub fn sort_order(&self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// A goal the user is working towards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal title
    pub title: String,

    /// Detailed description
    pub description: String,

    /// Category
    pub category: GoalCategory,

    /// Deadline
    pub target_date: Time,

    /// Marked done by the user
    pub is_completed: bool,

    /// When created
    pub created_date: Time,

    /// Milestones, sorted by target date
    pub milestones: Vec<Milestone>,

    /// Habits supporting this goal (references only)
    pub related_habits: Vec<HabitId>,

    /// Urgency
    pub priority: Priority,
}

impl Goal {
    /// Create an open goal with no milestones.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: GoalCategory,
        target_date: Time,
        priority: Priority,
    ) -> Self {
        Self {
            id: GoalId::new(),
            title: title.into(),
            description: description.into(),
            category,
            target_date,
            is_completed: false,
            created_date: chrono::Utc::now(),
            milestones: Vec::new(),
            related_habits: Vec::new(),
            priority,
        }
    }

    /// Override the creation timestamp.
    pub fn created_at(mut self, at: Time) -> Self {
        self.created_date = at;
        self
    }

    /// Insert a milestone, keeping the list sorted by target date.
    ///
    /// Milestones sharing a target date keep their insertion order.
    pub fn add_milestone(&mut self, milestone: Milestone) {
        self.milestones.push(milestone);
        self.milestones.sort_by_key(|m| m.target_date);
    }

    /// Mark a milestone done. Returns false if no milestone has that id.
    pub fn complete_milestone(&mut self, id: MilestoneId, at: Time) -> bool {
        match self.milestones.iter_mut().find(|m| m.id == id) {
            Some(milestone) => {
                milestone.set_completed(true, at);
                true
            }
            None => false,
        }
    }

    /// Flip a milestone's completion. Returns false if no milestone has that id.
    pub fn toggle_milestone(&mut self, id: MilestoneId, at: Time) -> bool {
        match self.milestones.iter_mut().find(|m| m.id == id) {
            Some(milestone) => {
                let done = !milestone.is_completed;
                milestone.set_completed(done, at);
                true
            }
            None => false,
        }
    }

    /// Reference a supporting habit. Duplicates are ignored.
    pub fn link_habit(&mut self, habit: HabitId) {
        if !self.related_habits.contains(&habit) {
            self.related_habits.push(habit);
        }
    }

    /// Number of completed milestones.
    pub fn completed_milestones(&self) -> usize {
        self.milestones.iter().filter(|m| m.is_completed).count()
    }

    /// Completed fraction of milestones in [0, 1].
    ///
    /// Without milestones the goal is all-or-nothing on `is_completed`.
    pub fn progress(&self) -> f64 {
        if self.milestones.is_empty() {
            return if self.is_completed { 1.0 } else { 0.0 };
        }
        self.completed_milestones() as f64 / self.milestones.len() as f64
    }

    /// Due within three calendar months of `now` (or already due).
    pub fn is_short_term<Tz: TimeZone>(&self, now: Time, calendar: &Calendar<Tz>) -> bool {
        self.target_date <= calendar.add_months(3, now)
    }

    /// Negation of [`Goal::is_short_term`].
    pub fn is_long_term<Tz: TimeZone>(&self, now: Time, calendar: &Calendar<Tz>) -> bool {
        !self.is_short_term(now, calendar)
    }

    /// Calendar days left until the target date, 0 once passed.
    pub fn days_remaining<Tz: TimeZone>(&self, now: Time, calendar: &Calendar<Tz>) -> u32 {
        calendar.days_until(self.target_date, now)
    }

    /// Open and past its target date.
    pub fn is_overdue(&self, now: Time) -> bool {
        !self.is_completed && self.target_date < now
    }

    /// First incomplete milestone in target-date order.
    pub fn next_milestone(&self) -> Option<&Milestone> {
        self.milestones.iter().find(|m| !m.is_completed)
    }
}

/// A dated step towards a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Unique identifier
    pub id: MilestoneId,

    /// Title
    pub title: String,

    /// Description
    pub description: String,

    /// Deadline
    pub target_date: Time,

    /// Done flag
    pub is_completed: bool,

    /// Set while completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<Time>,

    /// When created
    pub created_date: Time,
}

impl Milestone {
    /// Create an open milestone.
    pub fn new(title: impl Into<String>, description: impl Into<String>, target_date: Time) -> Self {
        Self {
            id: MilestoneId::new(),
            title: title.into(),
            description: description.into(),
            target_date,
            is_completed: false,
            completed_date: None,
            created_date: chrono::Utc::now(),
        }
    }

    /// Set the completion flag, stamping or clearing `completed_date`.
    pub fn set_completed(&mut self, completed: bool, at: Time) {
        self.is_completed = completed;
        self.completed_date = completed.then_some(at);
    }

    /// Open and past its target date.
    pub fn is_overdue(&self, now: Time) -> bool {
        !self.is_completed && self.target_date < now
    }

    /// Calendar days left until the target date, 0 once passed.
    pub fn days_remaining<Tz: TimeZone>(&self, now: Time, calendar: &Calendar<Tz>) -> u32 {
        calendar.days_until(self.target_date, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn now() -> Time {
        Utc.with_ymd_and_hms(2025, 10, 20, 12, 0, 0).unwrap()
    }

    fn goal(target: Time) -> Goal {
        Goal::new("Run a marathon", "42km", GoalCategory::Health, target, Priority::High)
    }

    #[test]
    fn test_milestones_stay_sorted_for_any_insertion_order() {
        let offsets = [9, 2, 14, 2, 0, 30, 5];
        let mut g = goal(now() + Duration::days(60));
        for (i, days) in offsets.iter().enumerate() {
            g.add_milestone(Milestone::new(format!("m{}", i), "", now() + Duration::days(*days)));
            assert!(g
                .milestones
                .windows(2)
                .all(|pair| pair[0].target_date <= pair[1].target_date));
        }
        assert_eq!(g.milestones.len(), offsets.len());
        // Equal dates keep insertion order.
        let twos: Vec<&str> = g
            .milestones
            .iter()
            .filter(|m| m.target_date == now() + Duration::days(2))
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(twos, vec!["m1", "m3"]);
    }

    #[test]
    fn test_progress_from_milestones() {
        let mut g = goal(now() + Duration::days(60));
        for i in 0..4 {
            g.add_milestone(Milestone::new(format!("m{}", i), "", now() + Duration::days(i)));
        }
        let first = g.milestones[0].id;
        assert!(g.complete_milestone(first, now()));
        assert!((g.progress() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_without_milestones() {
        let mut g = goal(now());
        assert_eq!(g.progress(), 0.0);
        g.is_completed = true;
        assert_eq!(g.progress(), 1.0);
    }

    #[test]
    fn test_toggle_sets_and_clears_completed_date() {
        let mut g = goal(now() + Duration::days(10));
        g.add_milestone(Milestone::new("a", "", now()));
        let id = g.milestones[0].id;

        assert!(g.toggle_milestone(id, now()));
        assert!(g.milestones[0].is_completed);
        assert_eq!(g.milestones[0].completed_date, Some(now()));

        assert!(g.toggle_milestone(id, now()));
        assert!(!g.milestones[0].is_completed);
        assert_eq!(g.milestones[0].completed_date, None);

        assert!(!g.toggle_milestone(MilestoneId::new(), now()));
    }

    #[test]
    fn test_next_milestone_skips_completed() {
        let mut g = goal(now() + Duration::days(10));
        g.add_milestone(Milestone::new("late", "", now() + Duration::days(5)));
        g.add_milestone(Milestone::new("early", "", now() + Duration::days(1)));
        let early = g.milestones[0].id;
        assert_eq!(g.next_milestone().unwrap().title, "early");
        g.complete_milestone(early, now());
        assert_eq!(g.next_milestone().unwrap().title, "late");
    }

    #[test]
    fn test_short_term_boundary() {
        let cal = Calendar::new(Utc);
        assert!(goal(cal.add_months(3, now())).is_short_term(now(), &cal));
        let later = goal(cal.add_months(3, now()) + Duration::seconds(1));
        assert!(later.is_long_term(now(), &cal));
    }

    #[test]
    fn test_overdue_and_days_remaining() {
        let cal = Calendar::new(Utc);
        let mut past = goal(now() - Duration::days(3));
        assert!(past.is_overdue(now()));
        assert_eq!(past.days_remaining(now(), &cal), 0);
        past.is_completed = true;
        assert!(!past.is_overdue(now()));

        let future = goal(now() + Duration::days(12));
        assert!(!future.is_overdue(now()));
        assert_eq!(future.days_remaining(now(), &cal), 12);
    }

    #[test]
    fn test_priority_sort_order() {
        let mut all = Priority::ALL.to_vec();
        all.sort_by_key(|p| p.sort_order());
        assert_eq!(
            all,
            vec![Priority::Critical, Priority::High, Priority::Medium, Priority::Low]
        );
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_link_habit_is_a_set() {
        let mut g = goal(now());
        let habit = HabitId::new();
        g.link_habit(habit);
        g.link_habit(habit);
        assert_eq!(g.related_habits, vec![habit]);
    }
}
