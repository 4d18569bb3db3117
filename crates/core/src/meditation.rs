//! Meditation session model.

use serde::{Deserialize, Serialize};

use crate::id::SessionId;
use crate::Time;

raw_value_enum! {
    /// Style of meditation.
    pub enum MeditationType {
        /// Present-moment awareness
        Mindfulness => "Mindfulness",
        /// Breath focus
        Breathing => "Breathing",
        /// Progressive body awareness
        BodyScanning => "Body Scanning",
        /// Compassion practice
        LovingKindness => "Loving Kindness",
        /// Guided imagery
        Visualization => "Visualization",
        /// Mindful movement
        Walking => "Walking",
    }
}

impl MeditationType {
    /// Short human description.
    pub fn description(&self) -> &'static str {
        match self {
            MeditationType::Mindfulness => "Focus on present moment awareness",
            MeditationType::Breathing => "Concentrate on breath patterns",
            MeditationType::BodyScanning => "Progressive body awareness",
            MeditationType::LovingKindness => "Cultivate compassion and love",
            MeditationType::Visualization => "Guided imagery and visualization",
            MeditationType::Walking => "Mindful movement meditation",
        }
    }
}

/// A finished meditation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeditationSession {
    /// Unique identifier
    pub id: SessionId,

    /// Minutes meditated (positive)
    pub duration: u32,

    /// Style
    #[serde(rename = "type")]
    pub kind: MeditationType,

    /// When finished
    pub completed_date: Time,

    /// Optional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MeditationSession {
    /// A session finished now. Zero minutes becomes 1.
    pub fn new(duration: u32, kind: MeditationType) -> Self {
        Self::at(chrono::Utc::now(), duration, kind)
    }

    /// A session finished at `completed_date`.
    pub fn at(completed_date: Time, duration: u32, kind: MeditationType) -> Self {
        Self {
            id: SessionId::new(),
            duration: duration.max(1),
            kind,
            completed_date,
            notes: None,
        }
    }

    /// Attach notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
