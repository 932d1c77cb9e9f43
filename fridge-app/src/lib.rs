//! Family Fridge application session.
//!
//! Wires the state containers from `fridge-state` into one [`FridgeApp`],
//! seeds demo data on first run, carries the in-memory navigation state,
//! and evaluates badge progress across the containers.
//!
//! ```
//! use fridge_app::FridgeApp;
//! use fridge_state::MemoryStore;
//! use std::sync::Arc;
//!
//! let mut app = FridgeApp::new(Arc::new(MemoryStore::new()));
//! app.start();
//! assert!(!app.directory.members().is_empty());
//! ```

pub mod badges;
pub mod navigation;
pub mod sample;
pub mod session;

pub use badges::{BadgeLedger, EarnedBadge, MemberCounts};
pub use navigation::{ActivePack, NavigationState, PackType, Screen, SlideDirection};
pub use session::FridgeApp;
