//! Demo family data seeded on first run.

use chrono::{DateTime, Local, NaiveDate, Utc};

use fridge_content::{Pillar, QuestionCategory};
use fridge_state::{
    FamilyMember, FamilyValue, FridgeItem, FridgeItemType, FridgeStatus, MemberRole, Reaction,
    SpotlightPass, SpotlightState, TonightsQuestion, TurnState,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn instant(s: &str) -> DateTime<Utc> {
    s.parse().unwrap_or_else(|_| Utc::now())
}

fn member(id: &str, name: &str, avatar: &str, color: &str, birthdate: NaiveDate, role: MemberRole) -> FamilyMember {
    FamilyMember {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar.to_string(),
        color: color.to_string(),
        birthdate,
        role,
    }
}

/// The demo roster: two parents, two kids.
pub fn family() -> Vec<FamilyMember> {
    vec![
        member("dad", "Dad", "👨", "#3B82F6", date(1988, 3, 15), MemberRole::Parent),
        member("mom", "Mom", "👩", "#8B5CF6", date(1990, 6, 22), MemberRole::Parent),
        member("wyatt", "Wyatt", "👦", "#F59E0B", date(2018, 1, 10), MemberRole::Child),
        member("eleanor", "Eleanor", "👧", "#EC4899", date(2021, 4, 5), MemberRole::Child),
    ]
}

/// The demo family values.
pub fn values() -> Vec<FamilyValue> {
    let created = instant("2026-01-15T10:00:00Z");
    let value = |id: &str, emoji: &str, title: &str, description: &str| FamilyValue {
        id: id.to_string(),
        emoji: emoji.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        created_at: created,
    };
    vec![
        value("val-1", "💪", "Courage", "We face hard things together"),
        value("val-2", "😂", "Laughter", "We find the funny in everything"),
        value("val-3", "🤝", "Kindness", "We treat everyone with care"),
    ]
}

struct ItemSeed<'a> {
    id: &'a str,
    item_type: FridgeItemType,
    content: &'a str,
    said_by: Option<&'a str>,
    source: Option<&'a str>,
    pillar: Option<Pillar>,
    captured_by: &'a str,
    emoji: Option<&'a str>,
    status: FridgeStatus,
    reaction: Option<(&'a str, &'a str, &'a str)>,
    created: &'a str,
}

fn item(seed: ItemSeed<'_>) -> FridgeItem {
    let created = instant(seed.created);
    FridgeItem {
        id: seed.id.to_string(),
        item_type: seed.item_type,
        content: seed.content.to_string(),
        said_by: seed.said_by.map(str::to_string),
        source: seed.source.map(str::to_string),
        pillar: seed.pillar,
        captured_by: seed.captured_by.to_string(),
        emoji: seed.emoji.map(str::to_string),
        status: seed.status,
        value_tag: None,
        reactions: seed
            .reaction
            .map(|(member_id, emoji, at)| Reaction {
                member_id: member_id.to_string(),
                emoji: emoji.to_string(),
                reacted_at: instant(at),
            })
            .into_iter()
            .collect(),
        created_at: created,
        updated_at: created,
    }
}

/// Starter fridge items across every status.
pub fn fridge_items() -> Vec<FridgeItem> {
    use FridgeItemType::{Note, Quote, Wisdom};
    use FridgeStatus::{Archived, Personal, Pinned, Rotation};
    vec![
        item(ItemSeed {
            id: "item-1",
            item_type: Wisdom,
            content: "Know yourself, love yourself, be true to yourself.",
            said_by: None,
            source: Some("Grandmother"),
            pillar: Some(Pillar::Identity),
            captured_by: "dad",
            emoji: None,
            status: Pinned,
            reaction: Some(("mom", "❤️", "2026-02-02T10:00:00Z")),
            created: "2026-02-01T10:00:00Z",
        }),
        item(ItemSeed {
            id: "item-2",
            item_type: Quote,
            content: "If fish could walk they'd probably be rude about it",
            said_by: Some("wyatt"),
            source: None,
            pillar: None,
            captured_by: "dad",
            emoji: Some("😂"),
            status: Pinned,
            reaction: Some(("mom", "😂", "2026-02-08T18:00:00Z")),
            created: "2026-02-08T10:00:00Z",
        }),
        item(ItemSeed {
            id: "item-3",
            item_type: Wisdom,
            content: "Those who say yes are rewarded by adventures.",
            said_by: None,
            source: Some("Family wisdom"),
            pillar: Some(Pillar::Delight),
            captured_by: "mom",
            emoji: None,
            status: Pinned,
            reaction: None,
            created: "2026-01-15T10:00:00Z",
        }),
        item(ItemSeed {
            id: "item-4",
            item_type: Quote,
            content: "I think love is when you share your last cookie even when you're still hungry",
            said_by: Some("eleanor"),
            source: None,
            pillar: None,
            captured_by: "mom",
            emoji: Some("🥹"),
            status: Rotation,
            reaction: Some(("dad", "🥹", "2026-02-05T20:00:00Z")),
            created: "2026-02-05T10:00:00Z",
        }),
        item(ItemSeed {
            id: "item-5",
            item_type: Wisdom,
            content: "Effort is your birthright; outcome is not.",
            said_by: None,
            source: Some("Philosophy magnet"),
            pillar: Some(Pillar::Effort),
            captured_by: "mom",
            emoji: None,
            status: Rotation,
            reaction: None,
            created: "2026-02-03T10:00:00Z",
        }),
        item(ItemSeed {
            id: "item-6",
            item_type: Note,
            content: "I've been thinking about what it means to be brave",
            said_by: None,
            source: None,
            pillar: None,
            captured_by: "wyatt",
            emoji: None,
            status: Rotation,
            reaction: Some(("dad", "💪", "2026-02-07T18:00:00Z")),
            created: "2026-02-07T10:00:00Z",
        }),
        item(ItemSeed {
            id: "item-7",
            item_type: Quote,
            content: "Dad, the moon is following us again!",
            said_by: Some("eleanor"),
            source: None,
            pillar: None,
            captured_by: "dad",
            emoji: Some("🤔"),
            status: Rotation,
            reaction: None,
            created: "2026-02-02T10:00:00Z",
        }),
        item(ItemSeed {
            id: "item-8",
            item_type: Quote,
            content: "Why does the moon follow us in the car?",
            said_by: Some("eleanor"),
            source: None,
            pillar: None,
            captured_by: "dad",
            emoji: Some("🤔"),
            status: Personal,
            reaction: None,
            created: "2026-02-09T10:00:00Z",
        }),
        item(ItemSeed {
            id: "item-9",
            item_type: Wisdom,
            content: "Mistakes are gifts. They show you something true.",
            said_by: None,
            source: Some("Modern wisdom"),
            pillar: Some(Pillar::Effort),
            captured_by: "dad",
            emoji: None,
            status: Personal,
            reaction: None,
            created: "2026-02-04T10:00:00Z",
        }),
        item(ItemSeed {
            id: "item-10",
            item_type: Quote,
            content: "I'm not tired, my eyes are just resting",
            said_by: Some("wyatt"),
            source: None,
            pillar: None,
            captured_by: "mom",
            emoji: Some("😂"),
            status: Personal,
            reaction: None,
            created: "2026-02-06T10:00:00Z",
        }),
        item(ItemSeed {
            id: "item-11",
            item_type: Quote,
            content: "Vegetables are just plants pretending to be food",
            said_by: Some("wyatt"),
            source: None,
            pillar: None,
            captured_by: "dad",
            emoji: Some("😂"),
            status: Archived,
            reaction: None,
            created: "2026-01-20T10:00:00Z",
        }),
    ]
}

/// The starter magnets as pinned wisdom items. A magnet whose text a curated
/// item already carries is skipped; capture alternates between the parents.
pub fn starter_magnet_items() -> Vec<FridgeItem> {
    let curated = fridge_items();
    let created = instant("2026-01-10T10:00:00Z");
    fridge_content::magnets::starter_magnets()
        .into_iter()
        .filter(|magnet| curated.iter().all(|i| i.content != magnet.text))
        .enumerate()
        .map(|(i, magnet)| FridgeItem {
            id: format!("magnet-{}", magnet.id),
            item_type: FridgeItemType::Wisdom,
            content: magnet.text.clone(),
            said_by: None,
            source: Some(magnet.source.clone()),
            pillar: Some(magnet.pillar),
            captured_by: if i % 2 == 0 { "dad" } else { "mom" }.to_string(),
            emoji: None,
            status: FridgeStatus::Pinned,
            value_tag: None,
            reactions: Vec::new(),
            created_at: created,
            updated_at: created,
        })
        .collect()
}

/// Spotlight seed: Wyatt holds it, with a short pass history.
pub fn spotlight() -> SpotlightState {
    let pass = |id: &str, from: &str, to: &str, reason: &str, at: &str| SpotlightPass {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        reason: reason.to_string(),
        passed_at: instant(at),
    };
    SpotlightState {
        current_holder: "wyatt".to_string(),
        held_since: instant("2026-02-06T10:00:00Z"),
        history: vec![
            pass("sp-1", "mom", "wyatt", "For being such a great helper with Eleanor this week", "2026-02-06T18:00:00Z"),
            pass("sp-2", "dad", "mom", "For making everyone laugh at dinner", "2026-02-01T18:00:00Z"),
            pass("sp-3", "wyatt", "dad", "For teaching me to ride my bike", "2026-01-25T18:00:00Z"),
        ],
    }
}

/// Turn orders: Eleanor is next to pick a question; kids sit out the
/// quest-picking rotation she is too young for.
pub fn turns() -> TurnState {
    TurnState {
        question_picker_order: vec!["dad".into(), "mom".into(), "wyatt".into(), "eleanor".into()],
        question_picker_index: 3,
        quest_picker_order: vec!["dad".into(), "mom".into(), "wyatt".into()],
        quest_picker_index: 0,
    }
}

/// Tonight's question seed, dated today.
pub fn tonights_question() -> TonightsQuestion {
    TonightsQuestion {
        question_id: "q-1".to_string(),
        question_text: "What made you laugh today?".to_string(),
        category: QuestionCategory::Fun,
        picked_by: "dad".to_string(),
        date: Local::now().date_naive(),
        discussed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_items_reference_sample_members() {
        let ids: Vec<_> = family().into_iter().map(|m| m.id).collect();
        for item in fridge_items() {
            assert!(ids.contains(&item.captured_by), "{} captured by stranger", item.id);
            if let Some(said_by) = item.said_by {
                assert!(ids.contains(&said_by));
            }
        }
    }

    #[test]
    fn starter_magnets_skip_texts_already_on_the_board() {
        let curated = fridge_items();
        let magnets = starter_magnet_items();
        // magnet 1 shares its text with item-1 and stays off the seed board
        assert_eq!(magnets.len(), fridge_content::STARTER_MAGNET_IDS.len() - 1);
        assert!(magnets.iter().all(|m| m.id != "magnet-1"));
        assert!(magnets.iter().any(|m| m.id == "magnet-9"));
        for magnet in &magnets {
            assert_eq!(magnet.status, FridgeStatus::Pinned);
            assert!(curated.iter().all(|i| i.content != magnet.content));
        }
    }

    #[test]
    fn sample_question_exists_in_the_catalog() {
        let seed = tonights_question();
        let question = fridge_content::questions::question(&seed.question_id).unwrap();
        assert_eq!(question.text, seed.question_text);
        assert_eq!(question.category, seed.category);
    }

    #[test]
    fn spotlight_holder_is_on_the_roster() {
        let ids: Vec<_> = family().into_iter().map(|m| m.id).collect();
        assert!(ids.contains(&spotlight().current_holder));
    }
}
