//! Badge evaluation and the earned-badge ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use fridge_content::{Badge, BadgeCategory, BADGES};
use fridge_state::{keys, Storage};

/// A badge a member has earned, recorded once per (badge, member).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedBadge {
    pub badge_id: String,
    pub member_id: String,
    pub earned_at: DateTime<Utc>,
}

/// A member's counts in each badge category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberCounts {
    /// Quotes the member captured
    pub quotes: u32,
    /// Wisdom items the member collected
    pub wisdom: u32,
    /// Quests the family completed
    pub quests: u32,
    /// Spotlight passes the member received
    pub spotlight: u32,
    /// Experiments the member completed
    pub experiments: u32,
}

impl MemberCounts {
    fn in_category(&self, category: BadgeCategory) -> u32 {
        match category {
            BadgeCategory::Quotes => self.quotes,
            BadgeCategory::Wisdom => self.wisdom,
            BadgeCategory::Quests => self.quests,
            BadgeCategory::Spotlight => self.spotlight,
            BadgeCategory::Experiments => self.experiments,
        }
    }
}

/// Owns the `earnedBadges` slice.
pub struct BadgeLedger {
    storage: Storage,
    earned: Vec<EarnedBadge>,
}

impl BadgeLedger {
    /// Create an empty ledger over `storage`.
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            earned: Vec::new(),
        }
    }

    /// Load the persisted ledger, if any.
    pub fn hydrate(&mut self) {
        if let Some(earned) = self.storage.load(keys::EARNED_BADGES) {
            self.earned = earned;
        }
    }

    fn persist(&self) {
        self.storage.save(keys::EARNED_BADGES, &self.earned);
    }

    /// Compare a member's counts against the badge table and record anything
    /// newly crossed. Already-earned badges are skipped, so calling this
    /// after every mutation is safe. Returns the badges earned by this call.
    pub fn evaluate(&mut self, member_id: &str, counts: MemberCounts) -> Vec<&'static Badge> {
        let newly_earned: Vec<&'static Badge> = BADGES
            .iter()
            .filter(|badge| counts.in_category(badge.category) >= badge.requirement)
            .filter(|badge| !self.has_earned(member_id, &badge.id))
            .collect();
        if newly_earned.is_empty() {
            return newly_earned;
        }
        let now = Utc::now();
        for badge in &newly_earned {
            info!(member_id, badge_id = %badge.id, "badge earned");
            self.earned.push(EarnedBadge {
                badge_id: badge.id.clone(),
                member_id: member_id.to_string(),
                earned_at: now,
            });
        }
        self.persist();
        newly_earned
    }

    /// Whether a member already holds a badge.
    pub fn has_earned(&self, member_id: &str, badge_id: &str) -> bool {
        self.earned
            .iter()
            .any(|e| e.member_id == member_id && e.badge_id == badge_id)
    }

    /// Every badge one member has earned, in earn order.
    pub fn member_badges(&self, member_id: &str) -> Vec<&EarnedBadge> {
        self.earned.iter().filter(|e| e.member_id == member_id).collect()
    }

    /// The whole ledger.
    pub fn earned(&self) -> &[EarnedBadge] {
        &self.earned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fridge_state::MemoryStore;
    use std::sync::Arc;

    fn ledger() -> BadgeLedger {
        BadgeLedger::new(Storage::new(Arc::new(MemoryStore::new())))
    }

    #[test]
    fn crossing_a_threshold_earns_once() {
        let mut ledger = ledger();
        let counts = MemberCounts { quotes: 5, ..Default::default() };

        let earned = ledger.evaluate("dad", counts);
        assert_eq!(earned.len(), 1);
        assert_eq!(earned[0].id, "quote-catcher-1");

        // same counts again: nothing new
        assert!(ledger.evaluate("dad", counts).is_empty());
        assert_eq!(ledger.member_badges("dad").len(), 1);
    }

    #[test]
    fn a_jump_earns_every_tier_passed() {
        let mut ledger = ledger();
        let counts = MemberCounts { experiments: 5, ..Default::default() };
        let mut ids: Vec<_> = ledger.evaluate("mom", counts).iter().map(|b| b.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, ["experimenter-1", "experimenter-2", "experimenter-3"]);
    }

    #[test]
    fn badges_are_per_member() {
        let mut ledger = ledger();
        let counts = MemberCounts { spotlight: 3, ..Default::default() };
        ledger.evaluate("wyatt", counts);
        assert!(ledger.has_earned("wyatt", "spotlight-star-1"));
        assert!(!ledger.has_earned("eleanor", "spotlight-star-1"));
    }

    #[test]
    fn ledger_round_trips_through_storage() {
        let storage = Storage::new(Arc::new(MemoryStore::new()));
        let mut ledger = BadgeLedger::new(storage.clone());
        ledger.evaluate("dad", MemberCounts { wisdom: 10, ..Default::default() });

        let mut again = BadgeLedger::new(storage);
        again.hydrate();
        assert!(again.has_earned("dad", "wisdom-seeker-1"));
    }
}
