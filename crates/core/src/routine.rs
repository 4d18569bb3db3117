//! Routine model - an ordered block of activities done at a time of day.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::id::{ActivityId, RoutineCompletionId, RoutineId};
use crate::Time;

raw_value_enum! {
    /// When in the day a routine is meant to run.
    pub enum TimeOfDay {
        /// Suggested 07:00
        Morning => "Morning",
        /// Suggested 14:00
        Afternoon => "Afternoon",
        /// Suggested 18:00
        Evening => "Evening",
        /// Suggested 21:00
        Night => "Night",
    }
}

impl TimeOfDay {
    /// Default reminder wall-clock time for this slot.
    pub fn suggested_time(&self) -> NaiveTime {
        let hour = match self {
            TimeOfDay::Morning => 7,
            TimeOfDay::Afternoon => 14,
            TimeOfDay::Evening => 18,
            TimeOfDay::Night => 21,
        };
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
    }
}

/// A routine and its completion log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    /// Unique identifier
    pub id: RoutineId,

    /// Routine name
    pub name: String,

    /// Description
    pub description: String,

    /// Slot in the day
    pub time_of_day: TimeOfDay,

    /// Inactive routines are hidden from daily stats
    pub is_active: bool,

    /// When created
    pub created_date: Time,

    /// Activities, displayed by `order`
    pub activities: Vec<RoutineActivity>,

    /// Whether a reminder should fire
    pub reminder_enabled: bool,

    /// Reminder instant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<Time>,

    /// Completion log, in insertion order
    pub completions: Vec<RoutineCompletion>,
}

impl Routine {
    /// Create an active routine with the slot's suggested reminder time today.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        time_of_day: TimeOfDay,
    ) -> Self {
        Self::created_on(name, description, time_of_day, chrono::Utc::now(), &Calendar::local())
    }

    /// Create a routine as of `now`, placing the reminder on `now`'s local date.
    pub fn created_on<Tz: chrono::TimeZone>(
        name: impl Into<String>,
        description: impl Into<String>,
        time_of_day: TimeOfDay,
        now: Time,
        calendar: &Calendar<Tz>,
    ) -> Self {
        Self {
            id: RoutineId::new(),
            name: name.into(),
            description: description.into(),
            time_of_day,
            is_active: true,
            created_date: now,
            activities: Vec::new(),
            reminder_enabled: false,
            reminder_time: Some(calendar.at_time_of_day(now, time_of_day.suggested_time())),
            completions: Vec::new(),
        }
    }

    /// Total estimated minutes across all activities, saturating at `u32::MAX`.
    pub fn estimated_duration(&self) -> u32 {
        self.activities
            .iter()
            .fold(0u32, |total, a| total.saturating_add(a.estimated_minutes))
    }

    /// Append an activity.
    pub fn add_activity(&mut self, activity: RoutineActivity) {
        self.activities.push(activity);
    }

    /// Remove an activity. Orders are left as-is; see [`Routine::renumber_activities`].
    pub fn remove_activity(&mut self, id: ActivityId) -> bool {
        let before = self.activities.len();
        self.activities.retain(|a| a.id != id);
        self.activities.len() != before
    }

    /// Activities in display order. Ties keep insertion order.
    pub fn sorted_activities(&self) -> Vec<&RoutineActivity> {
        let mut sorted: Vec<&RoutineActivity> = self.activities.iter().collect();
        sorted.sort_by_key(|a| a.order);
        sorted
    }

    /// Rewrite `order` as 1..=n following the current display order.
    pub fn renumber_activities(&mut self) {
        self.activities.sort_by_key(|a| a.order);
        for (index, activity) in self.activities.iter_mut().enumerate() {
            activity.order = index as i32 + 1;
        }
    }

    /// Log a completion.
    pub fn record(&mut self, completion: RoutineCompletion) {
        self.completions.push(completion);
    }

    /// Log a run finished at `at`, with the minutes it actually took if known.
    pub fn complete(&mut self, notes: Option<String>, duration: Option<u32>, at: Time) {
        self.record(RoutineCompletion::at(at, notes, duration));
    }
}

/// One step of a routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineActivity {
    /// Unique identifier
    pub id: ActivityId,

    /// Activity name
    pub name: String,

    /// Description
    pub description: String,

    /// Estimated minutes (positive)
    pub estimated_minutes: u32,

    /// May be skipped
    pub is_optional: bool,

    /// Display position; not guaranteed unique or contiguous
    pub order: i32,
}

impl RoutineActivity {
    /// Create a required activity. Zero minutes becomes 1.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        estimated_minutes: u32,
        order: i32,
    ) -> Self {
        Self {
            id: ActivityId::new(),
            name: name.into(),
            description: description.into(),
            estimated_minutes: estimated_minutes.max(1),
            is_optional: false,
            order,
        }
    }

    /// Mark as optional.
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }
}

/// One logged run of a routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineCompletion {
    /// Unique identifier
    pub id: RoutineCompletionId,

    /// When the routine was done
    pub completed_date: Time,

    /// Optional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Actual minutes taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl RoutineCompletion {
    /// A completion stamped now.
    pub fn new(notes: Option<String>, duration: Option<u32>) -> Self {
        Self::at(chrono::Utc::now(), notes, duration)
    }

    /// A completion stamped at `completed_date`.
    pub fn at(completed_date: Time, notes: Option<String>, duration: Option<u32>) -> Self {
        Self {
            id: RoutineCompletionId::new(),
            completed_date,
            notes,
            duration,
        }
    }
}
