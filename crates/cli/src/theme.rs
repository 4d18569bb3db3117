//! Terminal presentation for core enums and figures.

use habitally_core::{FrequencyType, GoalCategory, HabitCategory, MeditationType, Mood, Priority};

pub fn mood_emoji(mood: Mood) -> &'static str {
    match mood {
        Mood::Excellent => "😄",
        Mood::Good => "😊",
        Mood::Okay => "😐",
        Mood::Challenging => "😔",
        Mood::Difficult => "😞",
    }
}

pub fn habit_symbol(category: HabitCategory) -> &'static str {
    match category {
        HabitCategory::Health => "❤️",
        HabitCategory::Productivity => "✅",
        HabitCategory::Mindfulness => "🍃",
        HabitCategory::Fitness => "🚶",
        HabitCategory::Learning => "📖",
        HabitCategory::Social => "👥",
        HabitCategory::Creativity => "🎨",
    }
}

pub fn goal_symbol(category: GoalCategory) -> &'static str {
    match category {
        GoalCategory::Health => "❤️",
        GoalCategory::Career => "💼",
        GoalCategory::Personal => "👤",
        GoalCategory::Financial => "💲",
        GoalCategory::Relationships => "💞",
        GoalCategory::Education => "🎓",
        GoalCategory::Lifestyle => "🏠",
    }
}

pub fn meditation_symbol(kind: MeditationType) -> &'static str {
    match kind {
        MeditationType::Mindfulness => "🧠",
        MeditationType::Breathing => "🌬️",
        MeditationType::BodyScanning => "🧍",
        MeditationType::LovingKindness => "💗",
        MeditationType::Visualization => "👁️",
        MeditationType::Walking => "🚶",
    }
}

pub fn priority_marker(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "!!!",
        Priority::High => "!!",
        Priority::Medium => "!",
        Priority::Low => "",
    }
}

pub fn frequency_unit(frequency: FrequencyType) -> &'static str {
    match frequency {
        FrequencyType::Daily => "times per day",
        FrequencyType::Weekly => "times per week",
    }
}

/// `45m`, or `1h 30m` from an hour up.
pub fn format_minutes(total: u32) -> String {
    if total >= 60 {
        format!("{}h {}m", total / 60, total % 60)
    } else {
        format!("{total}m")
    }
}

/// Fixed-width bar for a fraction in [0, 1].
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
