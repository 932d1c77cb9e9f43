//! Bundled content catalogs for Family Fridge.
//!
//! Everything in this crate is immutable reference data with stable string
//! ids: the dinner question bank, quest packs, wisdom packs, the heirloom
//! magnet set, and badge definitions. The state layer consumes these tables
//! but never mutates them; family-specific metadata (favorites, completions,
//! pins) lives in `fridge-state`.
//!
//! # Key components
//!
//! - [`questions`]: the dinner question bank with category and age gating
//! - [`quests`]: quest packs a family can browse and adopt from
//! - [`packs`]: wisdom card packs for the swipe deck
//! - [`magnets`]: the heirloom magnet set, tagged by pillar
//! - [`badges`]: badge definitions with earn thresholds

pub mod badges;
pub mod magnets;
pub mod packs;
pub mod questions;
pub mod quests;

pub use badges::{Badge, BadgeCategory, BADGES};
pub use magnets::{Magnet, Pillar, MAGNETS, STARTER_MAGNET_IDS};
pub use packs::{WisdomCard, WisdomPack};
pub use questions::{Question, QuestionCategory};
pub use quests::{Quest, QuestPack};
