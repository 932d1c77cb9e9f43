//! Badge definitions.
//!
//! Badges are earned per member when a count in some category crosses the
//! badge's threshold. Evaluation lives in `fridge-app`; this module only
//! carries the definitions.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// What a badge counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCategory {
    /// Quotes captured by the member
    Quotes,
    /// Quests completed by the family
    Quests,
    /// Wisdom items collected by the member
    Wisdom,
    /// Spotlight passes received
    Spotlight,
    /// Experiments completed by the member
    Experiments,
}

/// A badge definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    /// Stable badge id
    pub id: String,
    /// Display name
    pub name: String,
    /// Display emoji
    pub emoji: String,
    /// What it takes
    pub description: String,
    /// Count threshold in the badge's category
    pub requirement: u32,
    /// Category the threshold applies to
    pub category: BadgeCategory,
}

fn badge(id: &str, name: &str, emoji: &str, description: &str, requirement: u32, category: BadgeCategory) -> Badge {
    Badge {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        description: description.to_string(),
        requirement,
        category,
    }
}

/// The bundled badge table.
pub static BADGES: LazyLock<Vec<Badge>> = LazyLock::new(|| {
    use BadgeCategory::*;
    vec![
        badge("quote-catcher-1", "Quote Catcher", "💬", "Captured 5 quotes", 5, Quotes),
        badge("quote-catcher-2", "Quote Collector", "📝", "Captured 15 quotes", 15, Quotes),
        badge("quote-catcher-3", "Quote Master", "🏆", "Captured 30 quotes", 30, Quotes),
        badge("quest-completer-1", "Quest Starter", "🎯", "Completed 3 quests", 3, Quests),
        badge("quest-completer-2", "Quest Completer", "⭐", "Completed 10 quests", 10, Quests),
        badge("wisdom-seeker-1", "Wisdom Seeker", "📚", "Collected 10 pieces of wisdom", 10, Wisdom),
        badge("wisdom-seeker-2", "Wisdom Keeper", "🦉", "Collected 25 pieces of wisdom", 25, Wisdom),
        badge("spotlight-star-1", "Spotlight Star", "🌟", "Received the spotlight 3 times", 3, Spotlight),
        badge("spotlight-star-2", "Shining Light", "✨", "Received the spotlight 10 times", 10, Spotlight),
        badge("experimenter-1", "Experimenter", "🧪", "Completed 1 experiment", 1, Experiments),
        badge("experimenter-2", "Growth Mindset", "🌱", "Completed 3 experiments", 3, Experiments),
        badge("experimenter-3", "Transformer", "🦋", "Completed 5 experiments", 5, Experiments),
    ]
});

/// Badges in a category, ordered by ascending requirement.
pub fn by_category(category: BadgeCategory) -> Vec<&'static Badge> {
    let mut badges: Vec<_> = BADGES.iter().filter(|b| b.category == category).collect();
    badges.sort_by_key(|b| b.requirement);
    badges
}
