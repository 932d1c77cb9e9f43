//! Wisdom packs: curated card collections for the swipe deck.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// A single wisdom card.
///
/// `source` names a person ("Marcus Aurelius"); `attribution` cites a text
/// passage ("Chapter 2, Verse 47"). A card carries one or the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WisdomCard {
    /// Stable card id
    pub id: String,
    /// The wisdom text
    pub text: String,
    /// Who said it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Where it comes from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

/// A curated collection of wisdom cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WisdomPack {
    /// Stable pack id
    pub id: String,
    /// Display name
    pub name: String,
    /// Display emoji
    pub emoji: String,
    /// One-line description
    pub description: String,
    /// Accent color (hex)
    pub color: String,
    /// The cards in this pack
    pub cards: Vec<WisdomCard>,
}

fn card(id: &str, text: &str, source: &str) -> WisdomCard {
    WisdomCard {
        id: id.to_string(),
        text: text.to_string(),
        source: Some(source.to_string()),
        attribution: None,
    }
}

fn cited(id: &str, text: &str, attribution: &str) -> WisdomCard {
    WisdomCard {
        id: id.to_string(),
        text: text.to_string(),
        source: None,
        attribution: Some(attribution.to_string()),
    }
}

/// The bundled wisdom packs.
pub static WISDOM_PACKS: LazyLock<Vec<WisdomPack>> = LazyLock::new(|| {
    vec![
        WisdomPack {
            id: "stoics".to_string(),
            name: "Stoic Philosophy".to_string(),
            emoji: "🏛️".to_string(),
            description: "Ancient wisdom for modern life".to_string(),
            color: "#6366F1".to_string(),
            cards: vec![
                card("stoic-1", "The obstacle is the way.", "Marcus Aurelius"),
                card("stoic-2", "We suffer more in imagination than in reality.", "Seneca"),
                card("stoic-3", "It is not things that disturb us, but our judgments about things.", "Epictetus"),
                card("stoic-4", "Waste no more time arguing about what a good man should be. Be one.", "Marcus Aurelius"),
                card("stoic-7", "You have power over your mind, not outside events. Realize this, and you will find strength.", "Marcus Aurelius"),
                card("stoic-8", "First say to yourself what you would be; then do what you have to do.", "Epictetus"),
                card("stoic-12", "Very little is needed to make a happy life; it is all within yourself.", "Marcus Aurelius"),
            ],
        },
        WisdomPack {
            id: "gita".to_string(),
            name: "Bhagavad Gita".to_string(),
            emoji: "🙏".to_string(),
            description: "Hindu scripture on duty and devotion".to_string(),
            color: "#F59E0B".to_string(),
            cards: vec![
                cited("gita-1", "You have the right to work, but never to the fruit of work.", "Chapter 2, Verse 47"),
                cited("gita-4", "The mind is restless and difficult to restrain, but it is subdued by practice.", "Chapter 6, Verse 35"),
                cited("gita-7", "Set your heart upon your work but never its reward.", "Chapter 2"),
                cited("gita-10", "Reshape yourself through the power of your will.", "Chapter 6"),
            ],
        },
        WisdomPack {
            id: "tao".to_string(),
            name: "Tao Te Ching".to_string(),
            emoji: "☯️".to_string(),
            description: "The way of balance and harmony".to_string(),
            color: "#10B981".to_string(),
            cards: vec![
                card("tao-1", "The journey of a thousand miles begins with a single step.", "Lao Tzu"),
                card("tao-2", "Nature does not hurry, yet everything is accomplished.", "Lao Tzu"),
                card("tao-3", "Knowing others is intelligence; knowing yourself is true wisdom.", "Lao Tzu"),
                card("tao-8", "Silence is a source of great strength.", "Lao Tzu"),
                card("tao-10", "He who knows that enough is enough will always have enough.", "Lao Tzu"),
            ],
        },
        WisdomPack {
            id: "kids-books".to_string(),
            name: "Children's Literature".to_string(),
            emoji: "📚".to_string(),
            description: "Wisdom hidden in kids' stories".to_string(),
            color: "#EC4899".to_string(),
            cards: vec![
                card("kids-2", "You're braver than you believe, stronger than you seem, and smarter than you think.", "Winnie the Pooh, A.A. Milne"),
                card("kids-3", "It is only with the heart that one can see rightly; what is essential is invisible to the eye.", "The Little Prince"),
                card("kids-6", "A person's a person, no matter how small.", "Horton Hears a Who, Dr. Seuss"),
                card("kids-7", "You have been my friend. That in itself is a tremendous thing.", "Charlotte's Web, E.B. White"),
                card("kids-9", "All grown-ups were once children... but only few of them remember it.", "The Little Prince"),
            ],
        },
        WisdomPack {
            id: "mr-rogers".to_string(),
            name: "Mister Rogers".to_string(),
            emoji: "👟".to_string(),
            description: "Lessons from the neighborhood".to_string(),
            color: "#EF4444".to_string(),
            cards: vec![
                card("rogers-1", "You've made this day a special day, by just your being you.", "Fred Rogers"),
                card("rogers-3", "When we can talk about our feelings, they become less overwhelming.", "Fred Rogers"),
                card("rogers-7", "When I was a boy and I would see scary things in the news, my mother would say, look for the helpers.", "Fred Rogers"),
                card("rogers-8", "Listening is where love begins.", "Fred Rogers"),
            ],
        },
    ]
});

/// Look up a pack by id.
pub fn wisdom_pack(id: &str) -> Option<&'static WisdomPack> {
    WISDOM_PACKS.iter().find(|p| p.id == id)
}

/// Pack metadata without card bodies, for listing screens.
#[derive(Debug, Clone, Serialize)]
pub struct PackSummary {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub color: String,
    pub card_count: usize,
}

/// Summaries of every wisdom pack.
pub fn pack_list() -> Vec<PackSummary> {
    WISDOM_PACKS
        .iter()
        .map(|p| PackSummary {
            id: p.id.clone(),
            name: p.name.clone(),
            emoji: p.emoji.clone(),
            description: p.description.clone(),
            color: p.color.clone(),
            card_count: p.cards.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_card_has_source_or_attribution() {
        for pack in WISDOM_PACKS.iter() {
            for card in &pack.cards {
                assert!(
                    card.source.is_some() || card.attribution.is_some(),
                    "card {} has neither source nor attribution",
                    card.id
                );
            }
        }
    }

    #[test]
    fn pack_list_matches_packs() {
        let list = pack_list();
        assert_eq!(list.len(), WISDOM_PACKS.len());
        assert_eq!(list[0].card_count, WISDOM_PACKS[0].cards.len());
    }
}
