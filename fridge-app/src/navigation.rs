//! Screen routing and pack selection.
//!
//! Pure in-memory UI state. Nothing here persists; a fresh session always
//! opens on the home screen.

use serde::{Deserialize, Serialize};

use fridge_content::{QuestPack, WisdomPack};

/// Every screen the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Home,
    Fridge,
    Archive,
    Discover,
    SwipePack,
    BrowsePack,
    MyBoard,
    Family,
    AddQuote,
    PickQuestion,
    PassSpotlight,
    WisdomLibrary,
    QuestLibrary,
    WeeklyQuest,
    Experiment,
    FamilyValues,
    FamilyStory,
    Onboarding,
    Settings,
}

/// Which way the screen transition slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDirection {
    /// Forward navigation
    Left,
    /// Backward navigation
    Right,
}

/// Kind of pack driving the swipe deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackType {
    Wisdom,
    Quest,
}

/// The pack currently open in the swipe or browse screen, plus which cards
/// have already been swiped this visit.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePack {
    pub pack_type: PackType,
    pub pack_id: String,
    pub name: String,
    pub emoji: String,
    pub color: String,
    swiped_ids: Vec<String>,
}

impl ActivePack {
    /// Open a pack with an empty swipe history.
    pub fn new(
        pack_type: PackType,
        pack_id: impl Into<String>,
        name: impl Into<String>,
        emoji: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            pack_type,
            pack_id: pack_id.into(),
            name: name.into(),
            emoji: emoji.into(),
            color: color.into(),
            swiped_ids: Vec::new(),
        }
    }

    /// Open a wisdom pack from the catalog.
    pub fn from_wisdom(pack: &WisdomPack) -> Self {
        Self::new(PackType::Wisdom, &pack.id, &pack.name, &pack.emoji, &pack.color)
    }

    /// Open a quest pack from the catalog.
    pub fn from_quests(pack: &QuestPack) -> Self {
        Self::new(PackType::Quest, &pack.id, &pack.name, &pack.emoji, &pack.color)
    }

    /// Record a card as swiped (either direction).
    pub fn mark_swiped(&mut self, card_id: impl Into<String>) {
        let card_id = card_id.into();
        if !self.swiped_ids.contains(&card_id) {
            self.swiped_ids.push(card_id);
        }
    }

    /// Whether a card was already swiped this visit.
    pub fn is_swiped(&self, card_id: &str) -> bool {
        self.swiped_ids.iter().any(|id| id == card_id)
    }

    /// Cards swiped so far, in order.
    pub fn swiped_ids(&self) -> &[String] {
        &self.swiped_ids
    }
}

/// Current screen, where we came from, and the slide direction.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    current: Screen,
    previous: Screen,
    direction: SlideDirection,
    active_pack: Option<ActivePack>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current: Screen::Home,
            previous: Screen::Home,
            direction: SlideDirection::Left,
            active_pack: None,
        }
    }
}

impl NavigationState {
    /// Go to a screen, sliding forward.
    pub fn navigate_to(&mut self, screen: Screen) {
        self.navigate_with(screen, SlideDirection::Left);
    }

    /// Go to a screen with an explicit slide direction.
    pub fn navigate_with(&mut self, screen: Screen, direction: SlideDirection) {
        self.previous = self.current;
        self.current = screen;
        self.direction = direction;
    }

    /// Return to the previous screen, sliding back. The screens swap, so a
    /// second `go_back` returns forward again.
    pub fn go_back(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
        self.direction = SlideDirection::Right;
    }

    /// Open a pack for the swipe or browse screens.
    pub fn set_active_pack(&mut self, pack: ActivePack) {
        self.active_pack = Some(pack);
    }

    /// Close the open pack.
    pub fn clear_active_pack(&mut self) {
        self.active_pack = None;
    }

    /// The screen currently showing.
    pub fn current(&self) -> Screen {
        self.current
    }

    /// The screen we came from.
    pub fn previous(&self) -> Screen {
        self.previous
    }

    /// Which way the last transition slid.
    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// The open pack, if any.
    pub fn active_pack(&self) -> Option<&ActivePack> {
        self.active_pack.as_ref()
    }

    /// The open pack, mutable for swipe tracking.
    pub fn active_pack_mut(&mut self) -> Option<&mut ActivePack> {
        self.active_pack.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_opens_on_home() {
        let nav = NavigationState::default();
        assert_eq!(nav.current(), Screen::Home);
        assert_eq!(nav.direction(), SlideDirection::Left);
    }

    #[test]
    fn go_back_returns_to_previous_screen() {
        let mut nav = NavigationState::default();
        nav.navigate_to(Screen::Fridge);
        nav.navigate_to(Screen::Archive);
        assert_eq!(nav.previous(), Screen::Fridge);

        nav.go_back();
        assert_eq!(nav.current(), Screen::Fridge);
        assert_eq!(nav.direction(), SlideDirection::Right);
    }

    #[test]
    fn screens_serialize_in_kebab_case() {
        assert_eq!(serde_json::to_string(&Screen::PickQuestion).unwrap(), "\"pick-question\"");
        assert_eq!(serde_json::to_string(&Screen::SwipePack).unwrap(), "\"swipe-pack\"");
    }

    #[test]
    fn packs_open_from_the_catalog() {
        let wisdom = fridge_content::packs::wisdom_pack("stoics").unwrap();
        let pack = ActivePack::from_wisdom(wisdom);
        assert_eq!(pack.pack_type, PackType::Wisdom);
        assert_eq!(pack.name, "Stoic Philosophy");

        let quests = fridge_content::quests::quest_pack("kindness").unwrap();
        let pack = ActivePack::from_quests(quests);
        assert_eq!(pack.pack_type, PackType::Quest);
        assert!(pack.swiped_ids().is_empty());
    }

    #[test]
    fn swipe_tracking_dedupes_cards() {
        let mut pack = ActivePack::new(PackType::Wisdom, "stoic", "Stoic Wisdom", "🏛️", "#78716C");
        pack.mark_swiped("card-1");
        pack.mark_swiped("card-1");
        pack.mark_swiped("card-2");
        assert!(pack.is_swiped("card-1"));
        assert!(!pack.is_swiped("card-3"));
        assert_eq!(pack.swiped_ids().len(), 2);
    }
}
