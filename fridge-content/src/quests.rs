//! Quest packs: bundled family activities.
//!
//! A quest pack is a themed set of activities a family can browse, adopt into
//! their own library, or pick as the weekly quest. The state layer snapshots
//! the [`Quest`] definition at adoption time.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// A single family activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Stable id, prefixed by pack (`wa-1`, `kc-3`, ...)
    pub id: String,
    /// Short title
    pub title: String,
    /// What to do
    pub description: String,
    /// Rough time commitment ("Evening", "1 hour", ...)
    pub duration: String,
    /// Youngest age the quest works for
    pub min_age: u8,
    /// Things to gather beforehand, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,
    /// Optional tip for parents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

/// A themed collection of quests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestPack {
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
    /// The quests in this pack
    pub quests: Vec<Quest>,
}

fn quest(id: &str, title: &str, description: &str, duration: &str, min_age: u8) -> Quest {
    Quest {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        min_age,
        materials: Vec::new(),
        tips: None,
    }
}

fn quest_with_materials(
    id: &str,
    title: &str,
    description: &str,
    duration: &str,
    min_age: u8,
    materials: &[&str],
) -> Quest {
    Quest {
        materials: materials.iter().map(|m| m.to_string()).collect(),
        ..quest(id, title, description, duration, min_age)
    }
}

fn pack(id: &str, name: &str, emoji: &str, description: &str, color: &str, quests: Vec<Quest>) -> QuestPack {
    QuestPack {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        quests,
    }
}

/// The bundled quest packs.
pub static QUEST_PACKS: LazyLock<Vec<QuestPack>> = LazyLock::new(|| {
    vec![
        pack(
            "weekend-adventures",
            "Weekend Adventures",
            "🏕️",
            "Get out of the house together",
            "#10B981",
            vec![
                quest("wa-1", "Backyard Campout", "Set up a tent in the backyard and sleep under the stars. Tell stories, make shadow puppets with flashlights, and listen to the night sounds.", "Evening", 4),
                quest("wa-2", "Sunrise Mission", "Wake up early and watch the sunrise together. Bring hot cocoa and blankets. Talk about what you hope for the day.", "1 hour", 4),
                quest_with_materials("wa-3", "Photo Scavenger Hunt", "Create a list of 10 things to find and photograph: something red, something that makes you happy, something older than you.", "2 hours", 5, &["Phone or camera", "List of items"]),
                quest_with_materials("wa-5", "Letter to Future Selves", "Everyone writes a letter to themselves to open in 5 years. Seal them up and put them somewhere safe.", "1 hour", 6, &["Paper", "Envelopes", "Pens"]),
            ],
        ),
        pack(
            "kindness",
            "Kindness Challenges",
            "💛",
            "Acts of kindness for others",
            "#F59E0B",
            vec![
                quest("kc-1", "Random Acts Day", "Do 3 surprise kind things for strangers today. Buy someone coffee, leave a kind note, hold doors open with a smile.", "All day", 4),
                quest_with_materials("kc-2", "Neighbor Surprise", "Bake cookies, draw a picture, or make something for a neighbor. Deliver it together and say hello.", "2 hours", 3, &["Baking supplies or art supplies"]),
                quest("kc-4", "Compliment Chain", "Start a chain of compliments. Each family member gives a genuine compliment to the person on their left, then they pass it on.", "30 min", 3),
                quest_with_materials("kc-5", "Care Package", "Put together a care package for someone going through a tough time. Include snacks, a book, a note, and something comforting.", "1 hour", 4, &["Box", "Comfort items"]),
            ],
        ),
        pack(
            "tech-free",
            "Tech-Free Activities",
            "📵",
            "No screens required",
            "#8B5CF6",
            vec![
                quest("tf-1", "Technology-Free Saturday", "No screens for 24 hours. Board games, outdoor play, cooking, reading, and real conversations only.", "All day", 3),
                quest("tf-2", "Fort Building Championship", "Using only blankets, pillows, and furniture, build the most epic fort you can. Then have a picnic inside it.", "2 hours", 3),
                quest("tf-3", "Story Round Robin", "One person starts a story with one sentence. Go around the circle, each person adding a sentence. Where does it end up?", "30 min", 4),
                quest("tf-5", "Family Talent Show", "Everyone prepares a short act: a song, a joke, a dance, a magic trick, a poem. Perform for each other after dinner.", "2 hours", 3),
            ],
        ),
        pack(
            "kitchen",
            "Kitchen Quests",
            "👨‍🍳",
            "Cooking and baking together",
            "#EF4444",
            vec![
                quest("kq-1", "Cook a Cuisine", "Pick a country and cook a meal from there. Research the food, shop for ingredients together, and cook as a team.", "3 hours", 4),
                quest("kq-2", "Family Recipe Night", "Cook a recipe passed down from a grandparent or family member. Talk about where it came from and why it matters.", "2 hours", 4),
                quest_with_materials("kq-5", "Pizza From Scratch", "Make pizza dough from scratch. Everyone designs their own personal pizza with whatever toppings they want.", "2 hours", 3, &["Flour", "Yeast", "Toppings"]),
            ],
        ),
        pack(
            "outdoor",
            "Outdoor Challenges",
            "🌿",
            "Nature and exploration",
            "#059669",
            vec![
                quest("oc-1", "Stargazing Night", "Go outside on a clear night and learn 3 new constellations together. Bring blankets, hot drinks, and a star chart.", "Evening", 4),
                quest("oc-2", "Neighborhood Explorer", "Walk a route you have never taken in your own neighborhood. How many new things can you spot?", "1 hour", 3),
                quest("oc-4", "Nature Treasure Hunt", "Make a list of natural treasures to find: a feather, a smooth rock, a Y-shaped stick, something soft, something that makes a sound.", "1 hour", 4),
                quest_with_materials("oc-5", "Plant Something", "Plant seeds, a tree, or start a small garden together. Take care of it as a family and watch it grow.", "1 hour", 3, &["Seeds or plants", "Soil", "Pots or garden space"]),
            ],
        ),
        pack(
            "game-night",
            "Family Game Night",
            "🎲",
            "Games and competitions",
            "#6366F1",
            vec![
                quest_with_materials("gn-1", "Invent a Game", "As a family, invent a brand new board game or card game. Make the pieces, write the rules, and play it.", "2 hours", 5, &["Paper", "Markers", "Dice or cards"]),
                quest("gn-2", "Tournament Night", "Pick 3 different games. Play a round-robin tournament. Keep score across all games. Crown the family champion.", "Evening", 4),
                quest("gn-5", "Family Trivia", "Write trivia questions about each family member. How well do you really know each other?", "1 hour", 5),
            ],
        ),
    ]
});

/// Look up a pack by id.
pub fn quest_pack(id: &str) -> Option<&'static QuestPack> {
    QUEST_PACKS.iter().find(|p| p.id == id)
}

/// Pack metadata without quest bodies, for listing screens.
#[derive(Debug, Clone, Serialize)]
pub struct PackSummary {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub color: String,
    pub quest_count: usize,
}

/// Summaries of every quest pack.
pub fn pack_list() -> Vec<PackSummary> {
    QUEST_PACKS
        .iter()
        .map(|p| PackSummary {
            id: p.id.clone(),
            name: p.name.clone(),
            emoji: p.emoji.clone(),
            description: p.description.clone(),
            color: p.color.clone(),
            quest_count: p.quests.len(),
        })
        .collect()
}

/// Look up a quest by id across all packs, with its pack id.
pub fn find_quest(quest_id: &str) -> Option<(&'static QuestPack, &'static Quest)> {
    QUEST_PACKS
        .iter()
        .find_map(|p| p.quests.iter().find(|q| q.id == quest_id).map(|q| (p, q)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quest_ids_are_unique_across_packs() {
        let mut ids: Vec<_> = QUEST_PACKS
            .iter()
            .flat_map(|p| p.quests.iter().map(|q| q.id.as_str()))
            .collect();
        ids.sort();
        ids.dedup();
        let total: usize = QUEST_PACKS.iter().map(|p| p.quests.len()).sum();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn find_quest_resolves_pack() {
        let (pack, quest) = find_quest("kc-4").unwrap();
        assert_eq!(pack.id, "kindness");
        assert_eq!(quest.title, "Compliment Chain");
        assert!(find_quest("nope").is_none());
    }

    #[test]
    fn pack_list_matches_packs() {
        let list = pack_list();
        assert_eq!(list.len(), QUEST_PACKS.len());
        assert_eq!(list[0].id, QUEST_PACKS[0].id);
        assert_eq!(list[0].quest_count, QUEST_PACKS[0].quests.len());
    }

    #[test]
    fn materials_are_omitted_when_empty() {
        let quest = &quest_pack("tech-free").unwrap().quests[0];
        let json = serde_json::to_value(quest).unwrap();
        assert!(json.get("materials").is_none());
    }
}
