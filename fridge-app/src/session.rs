//! The aggregate session: every container wired over one shared store.

use std::sync::Arc;

use tracing::info;

use fridge_content::Badge;
use fridge_state::{
    ExperimentStatus, ExperimentTracker, FamilyDirectory, FridgeBoard, FridgeItemType,
    KeyValueStore, NewFridgeItem, QuestLog, Rituals, Storage, TimeCapsules,
};

use crate::badges::{BadgeLedger, MemberCounts};
use crate::navigation::NavigationState;
use crate::sample;

/// One running Family Fridge session.
///
/// Containers stay independent; the session owns them, routes hydration and
/// first-run seeding, and computes the cross-container views (badge counts)
/// no single container can see.
pub struct FridgeApp {
    storage: Storage,
    pub directory: FamilyDirectory,
    pub board: FridgeBoard,
    pub rituals: Rituals,
    pub quests: QuestLog,
    pub experiments: ExperimentTracker,
    pub capsules: TimeCapsules,
    pub badges: BadgeLedger,
    pub navigation: NavigationState,
}

impl FridgeApp {
    /// Build every container over one shared store. Nothing is loaded yet;
    /// call [`start`](Self::start) or [`hydrate`](Self::hydrate).
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let storage = Storage::new(store);
        Self {
            directory: FamilyDirectory::new(storage.clone()),
            board: FridgeBoard::new(storage.clone()),
            rituals: Rituals::new(storage.clone()),
            quests: QuestLog::new(storage.clone()),
            experiments: ExperimentTracker::new(storage.clone()),
            capsules: TimeCapsules::new(storage.clone()),
            badges: BadgeLedger::new(storage.clone()),
            navigation: NavigationState::default(),
            storage,
        }
    }

    /// Bring the session up: seed demo data on a first run, otherwise load
    /// everything persisted.
    pub fn start(&mut self) {
        if self.storage.is_first_run() {
            info!("first run, seeding demo family");
            self.seed_demo_data();
        } else {
            self.hydrate();
        }
    }

    /// Load every persisted slice.
    pub fn hydrate(&mut self) {
        self.directory.hydrate();
        self.board.hydrate();
        self.rituals.hydrate();
        self.quests.hydrate();
        self.experiments.hydrate();
        self.capsules.hydrate();
        self.badges.hydrate();
    }

    /// Install the demo family, starter fridge items, starter magnet pins,
    /// spotlight, turn orders, and tonight's question, then stamp the
    /// schema version.
    pub fn seed_demo_data(&mut self) {
        self.directory.replace_all(sample::family(), sample::values());
        let mut items = sample::fridge_items();
        items.extend(sample::starter_magnet_items());
        self.board.set_items(items);
        self.rituals.set_spotlight(sample::spotlight());
        self.rituals.set_turns(sample::turns());
        self.rituals.set_tonights_question(sample::tonights_question());
        self.storage.stamp_schema_version();
    }

    /// Wipe the namespace and drop every container back to empty. Keys
    /// outside the app's namespace are untouched.
    pub fn reset(&mut self) {
        info!("resetting session");
        self.storage.clear_all();
        let store = self.storage.clone();
        self.directory = FamilyDirectory::new(store.clone());
        self.board = FridgeBoard::new(store.clone());
        self.rituals = Rituals::new(store.clone());
        self.quests = QuestLog::new(store.clone());
        self.experiments = ExperimentTracker::new(store.clone());
        self.capsules = TimeCapsules::new(store.clone());
        self.badges = BadgeLedger::new(store);
        self.navigation = NavigationState::default();
    }

    /// The shared persistence adapter.
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Add a magnet from the heirloom set to the fridge as a wisdom item.
    /// A magnet already on the board (matched by text) is not added twice;
    /// returns the new item id, or `None` for an unknown or duplicate magnet.
    pub fn collect_magnet(&mut self, magnet_id: u32, captured_by: &str) -> Option<String> {
        let magnet = fridge_content::magnets::magnet_by_id(magnet_id)?;
        if self.board.items().iter().any(|i| i.content == magnet.text) {
            return None;
        }
        Some(self.board.add_item(NewFridgeItem::wisdom(
            magnet.text.clone(),
            magnet.source.clone(),
            captured_by,
            Some(magnet.pillar),
        )))
    }

    /// A member's counts in each badge category, gathered across containers.
    pub fn member_counts(&self, member_id: &str) -> MemberCounts {
        let count_items = |item_type: FridgeItemType| {
            self.board
                .items()
                .iter()
                .filter(|i| i.item_type == item_type && i.captured_by == member_id)
                .count() as u32
        };
        MemberCounts {
            quotes: count_items(FridgeItemType::Quote),
            wisdom: count_items(FridgeItemType::Wisdom),
            // quest completions are a family effort, counted for everyone
            quests: self
                .quests
                .library()
                .iter()
                .map(|fq| fq.completions.len() as u32)
                .sum(),
            spotlight: self
                .rituals
                .spotlight()
                .history
                .iter()
                .filter(|pass| pass.to == member_id)
                .count() as u32,
            experiments: self
                .experiments
                .member_experiments(member_id)
                .iter()
                .filter(|e| e.status == ExperimentStatus::Completed)
                .count() as u32,
        }
    }

    /// Re-evaluate one member's badges. Returns any newly earned.
    pub fn refresh_badges(&mut self, member_id: &str) -> Vec<&'static Badge> {
        let counts = self.member_counts(member_id);
        self.badges.evaluate(member_id, counts)
    }

    /// Re-evaluate badges for the whole roster.
    pub fn refresh_all_badges(&mut self) {
        let member_ids = self.directory.member_ids();
        for member_id in member_ids {
            self.refresh_badges(&member_id);
        }
    }
}
