//! State containers for Family Fridge.
//!
//! This crate is the core of the application: a set of independent state
//! containers, each owning one persisted slice of family data, plus the
//! key-value persistence adapter they mirror into after every mutation.
//!
//! # Key components
//!
//! - [`Storage`]: namespaced JSON persistence over an injected [`KeyValueStore`]
//! - [`FamilyDirectory`]: the roster, family values, onboarding, active user
//! - [`FridgeBoard`]: captured quotes, wisdom, and notes with their lifecycle
//! - [`Rituals`]: the spotlight, tonight's question, and turn-order cursors
//! - [`QuestLog`]: the adopted quest library and the weekly quest slot
//! - [`ExperimentTracker`]: time-boxed personal and family challenges
//! - [`TimeCapsules`]: sealed notes that unlock on a future date
//!
//! Containers never call one another; cross-references between slices are
//! plain ids resolved through the owning container's accessors. Every
//! mutation goes through a command enum or its backing method, computes the
//! new state synchronously, and mirrors the slice to storage best-effort
//! (failures are logged, never surfaced).
//!
//! # Example
//!
//! ```
//! use fridge_state::{FridgeBoard, MemoryStore, NewFridgeItem, Storage};
//! use std::sync::Arc;
//!
//! let storage = Storage::new(Arc::new(MemoryStore::new()));
//! let mut board = FridgeBoard::new(storage);
//! let id = board.add_item(NewFridgeItem::quote("The moon is following us!", "eleanor", "dad", "🤔"));
//! assert!(board.item(&id).is_some());
//! ```

pub mod board;
pub mod capsule;
pub mod directory;
pub mod error;
pub mod experiment;
pub mod quest;
pub mod ritual;
pub mod storage;
pub mod time;
pub mod types;

pub use board::{BoardCommand, FridgeBoard, NewFridgeItem};
pub use capsule::{CapsuleCommand, TimeCapsules};
pub use directory::{DirectoryCommand, FamilyDirectory, MAX_FAMILY_VALUES};
pub use error::StateError;
pub use experiment::{ExperimentCommand, ExperimentTracker, NewExperiment};
pub use quest::{QuestCommand, QuestLog};
pub use ritual::{RitualCommand, Rituals};
pub use storage::{keys, DirStore, KeyValueStore, MemoryStore, Storage, StoreError, SCHEMA_VERSION};
pub use types::*;
