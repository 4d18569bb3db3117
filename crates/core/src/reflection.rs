//! Reflection model - a journal entry answering a prompt.

use serde::{Deserialize, Serialize};

use crate::id::{PromptId, ReflectionId};
use crate::Time;

raw_value_enum! {
    /// Self-reported mood.
    pub enum Mood {
        /// Feeling amazing
        Excellent => "Excellent",
        /// Positive
        Good => "Good",
        /// Neutral
        Okay => "Okay",
        /// Some difficulties
        Challenging => "Challenging",
        /// A tough time
        Difficult => "Difficult",
    }
}

impl Mood {
    /// Short human description.
    pub fn description(&self) -> &'static str {
        match self {
            Mood::Excellent => "Feeling amazing and energized",
            Mood::Good => "Positive and content",
            Mood::Okay => "Neutral, going through the motions",
            Mood::Challenging => "Facing some difficulties",
            Mood::Difficult => "Having a tough time",
        }
    }
}

raw_value_enum! {
    /// Theme of a reflection prompt.
    pub enum PromptCategory {
        /// Thankfulness
        Gratitude => "Gratitude",
        /// Learning and change
        Growth => "Growth",
        /// People
        Relationships => "Relationships",
        /// Goal progress
        Goals => "Goals",
        /// Awareness
        Mindfulness => "Mindfulness",
        /// Ideas
        Creativity => "Creativity",
        /// Self-care
        Wellness => "Wellness",
    }
}

/// A question to reflect on. Reflections embed a copy, not a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionPrompt {
    /// Unique identifier of this copy
    pub id: PromptId,

    /// Question text
    pub question: String,

    /// Theme
    pub category: PromptCategory,

    /// Meant for the daily pool
    pub is_daily: bool,
}

impl ReflectionPrompt {
    /// Create a prompt.
    pub fn new(question: impl Into<String>, category: PromptCategory, is_daily: bool) -> Self {
        Self {
            id: PromptId::new(),
            question: question.into(),
            category,
            is_daily,
        }
    }
}

/// A journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    /// Unique identifier
    pub id: ReflectionId,

    /// Day the reflection is about
    pub date: Time,

    /// Prompt snapshot
    pub prompt: ReflectionPrompt,

    /// Answer
    pub response: String,

    /// Optional mood
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,

    /// Things the user is grateful for
    pub gratitude: Vec<String>,

    /// Free-form insights
    pub insights: String,

    /// When created
    pub created_date: Time,
}

impl Reflection {
    /// A reflection dated now.
    pub fn new(prompt: ReflectionPrompt, response: impl Into<String>) -> Self {
        Self::at(chrono::Utc::now(), prompt, response)
    }

    /// A reflection dated `at`.
    pub fn at(at: Time, prompt: ReflectionPrompt, response: impl Into<String>) -> Self {
        Self {
            id: ReflectionId::new(),
            date: at,
            prompt,
            response: response.into(),
            mood: None,
            gratitude: Vec::new(),
            insights: String::new(),
            created_date: at,
        }
    }

    /// Attach a mood.
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    /// Attach gratitude entries; blank entries are dropped.
    pub fn with_gratitude<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gratitude = items
            .into_iter()
            .map(Into::<String>::into)
            .filter(|item| !item.trim().is_empty())
            .collect();
        self
    }

    /// Attach insights.
    pub fn with_insights(mut self, insights: impl Into<String>) -> Self {
        self.insights = insights.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_drops_blank_gratitude() {
        let prompt = ReflectionPrompt::new("What went well?", PromptCategory::Growth, true);
        let r = Reflection::new(prompt, "A lot")
            .with_mood(Mood::Good)
            .with_gratitude(["coffee", " ", "friends"]);
        assert_eq!(r.gratitude, vec!["coffee".to_string(), "friends".to_string()]);
        assert_eq!(r.mood, Some(Mood::Good));
        assert_eq!(r.date, r.created_date);
    }

    #[test]
    fn test_missing_mood_deserializes_as_none() {
        let prompt = ReflectionPrompt::new("Q", PromptCategory::Wellness, false);
        let r = Reflection::new(prompt, "");
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("mood").is_none());
        assert_eq!(json["prompt"]["isDaily"], false);

        let mut with_null = json.clone();
        with_null["mood"] = serde_json::Value::Null;
        let back: Reflection = serde_json::from_value(with_null).unwrap();
        assert_eq!(back, r);
    }
}
