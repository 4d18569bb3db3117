//! Fixed text pools and random selection from them.
//!
//! Selection takes the random source as an argument so callers can seed it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::reflection::{PromptCategory, ReflectionPrompt};

/// Default messages a new habit picks from.
pub const MOTIVATIONAL_MESSAGES: &[&str] = &[
    "Great job! You're building a better you! 🌟",
    "Consistency is key! Keep it up! 💪",
    "Another step towards your goals! 🎯",
    "You're creating positive change! ✨",
    "Progress over perfection! 🚀",
    "Your future self will thank you! 🙏",
    "Small steps, big results! 👏",
    "You're unstoppable! 🔥",
];

const FALLBACK_MESSAGE: &str = "Well done!";

const DAILY: &[(&str, PromptCategory)] = &[
    ("What are three things you're grateful for today?", PromptCategory::Gratitude),
    ("What was the highlight of your day?", PromptCategory::Mindfulness),
    ("How did you grow or learn something new today?", PromptCategory::Growth),
    ("What challenged you today, and how did you handle it?", PromptCategory::Growth),
    ("How did you take care of your well-being today?", PromptCategory::Wellness),
];

const WEEKLY: &[(&str, PromptCategory)] = &[
    ("What progress have you made toward your goals this week?", PromptCategory::Goals),
    ("How have your relationships evolved this week?", PromptCategory::Relationships),
    ("What creative ideas or solutions came to you this week?", PromptCategory::Creativity),
    ("What patterns do you notice in your thoughts and behaviors?", PromptCategory::Mindfulness),
    ("What would you like to improve or change next week?", PromptCategory::Growth),
];

const MONTHLY: &[(&str, PromptCategory)] = &[
    ("What are your biggest accomplishments this month?", PromptCategory::Goals),
    ("How have you changed or grown this month?", PromptCategory::Growth),
    ("What relationships have been most meaningful this month?", PromptCategory::Relationships),
    ("What habits have served you well, and which need adjustment?", PromptCategory::Wellness),
    ("What are you most excited about for next month?", PromptCategory::Goals),
];

/// Which prompt pool to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptPeriod {
    /// Daily prompts
    Daily,
    /// Weekly prompts
    Weekly,
    /// Monthly prompts
    Monthly,
}

impl PromptPeriod {
    fn pool(&self) -> &'static [(&'static str, PromptCategory)] {
        match self {
            PromptPeriod::Daily => DAILY,
            PromptPeriod::Weekly => WEEKLY,
            PromptPeriod::Monthly => MONTHLY,
        }
    }
}

/// Pick a motivational message.
pub fn motivational_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOTIVATIONAL_MESSAGES
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_MESSAGE)
}

/// Fresh copies of every prompt in a pool.
pub fn prompts(period: PromptPeriod) -> Vec<ReflectionPrompt> {
    period
        .pool()
        .iter()
        .map(|(question, category)| {
            ReflectionPrompt::new(*question, *category, period == PromptPeriod::Daily)
        })
        .collect()
}

/// A fresh copy of a random prompt from a pool.
pub fn random_prompt<R: Rng + ?Sized>(period: PromptPeriod, rng: &mut R) -> ReflectionPrompt {
    let pool = period.pool();
    let (question, category) = pool.choose(rng).copied().unwrap_or(pool[0]);
    ReflectionPrompt::new(question, category, period == PromptPeriod::Daily)
}
