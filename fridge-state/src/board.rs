//! The fridge board: captured quotes, wisdom, and notes.

use chrono::Utc;
use tracing::info;

use fridge_content::Pillar;

use crate::error::StateError;
use crate::storage::{keys, Storage};
use crate::types::{FridgeItem, FridgeItemType, FridgeStatus, Reaction};

/// Everything needed to capture a new item; id, timestamps, reactions, and
/// the initial `Personal` status are filled in by the board.
#[derive(Debug, Clone)]
pub struct NewFridgeItem {
    pub item_type: FridgeItemType,
    pub content: String,
    pub said_by: Option<String>,
    pub source: Option<String>,
    pub pillar: Option<Pillar>,
    pub captured_by: String,
    pub emoji: Option<String>,
}

impl NewFridgeItem {
    /// A quote said by a family member.
    pub fn quote(
        content: impl Into<String>,
        said_by: impl Into<String>,
        captured_by: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            item_type: FridgeItemType::Quote,
            content: content.into(),
            said_by: Some(said_by.into()),
            source: None,
            pillar: None,
            captured_by: captured_by.into(),
            emoji: Some(emoji.into()),
        }
    }

    /// A piece of wisdom with an attribution.
    pub fn wisdom(
        content: impl Into<String>,
        source: impl Into<String>,
        captured_by: impl Into<String>,
        pillar: Option<Pillar>,
    ) -> Self {
        Self {
            item_type: FridgeItemType::Wisdom,
            content: content.into(),
            said_by: None,
            source: Some(source.into()),
            pillar,
            captured_by: captured_by.into(),
            emoji: None,
        }
    }

    /// A free-form note.
    pub fn note(content: impl Into<String>, captured_by: impl Into<String>) -> Self {
        Self {
            item_type: FridgeItemType::Note,
            content: content.into(),
            said_by: None,
            source: None,
            pillar: None,
            captured_by: captured_by.into(),
            emoji: None,
        }
    }
}

/// Commands accepted by [`FridgeBoard::apply`].
#[derive(Debug, Clone)]
pub enum BoardCommand {
    AddItem(NewFridgeItem),
    UpdateStatus { item_id: String, status: FridgeStatus },
    AddReaction {
        item_id: String,
        member_id: String,
        emoji: String,
    },
    RemoveReaction { item_id: String, member_id: String },
    TagValue {
        item_id: String,
        value_id: Option<String>,
    },
    DeleteItem { item_id: String },
}

/// Owns the `fridge` slice: every captured item, newest first.
pub struct FridgeBoard {
    storage: Storage,
    items: Vec<FridgeItem>,
}

impl FridgeBoard {
    /// Create an empty board over `storage`.
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            items: Vec::new(),
        }
    }

    /// Load the persisted item list, if any.
    pub fn hydrate(&mut self) {
        if let Some(items) = self.storage.load(keys::FRIDGE) {
            self.items = items;
        }
    }

    fn persist(&self) {
        self.storage.save(keys::FRIDGE, &self.items);
    }

    /// Dispatch a command to its handler.
    pub fn apply(&mut self, command: BoardCommand) -> Result<(), StateError> {
        match command {
            BoardCommand::AddItem(draft) => {
                self.add_item(draft);
                Ok(())
            }
            BoardCommand::UpdateStatus { item_id, status } => self.update_status(&item_id, status),
            BoardCommand::AddReaction { item_id, member_id, emoji } => {
                self.add_reaction(&item_id, member_id, emoji)
            }
            BoardCommand::RemoveReaction { item_id, member_id } => {
                self.remove_reaction(&item_id, &member_id)
            }
            BoardCommand::TagValue { item_id, value_id } => self.tag_value(&item_id, value_id),
            BoardCommand::DeleteItem { item_id } => self.delete_item(&item_id),
        }
    }

    /// Capture a new item. Always starts `Personal`, with
    /// `created_at == updated_at`, prepended so newest-first is the natural
    /// order. Returns the new item's id.
    pub fn add_item(&mut self, draft: NewFridgeItem) -> String {
        let now = Utc::now();
        let item = FridgeItem {
            id: self.storage.generate_id("fridge"),
            item_type: draft.item_type,
            content: draft.content,
            said_by: draft.said_by,
            source: draft.source,
            pillar: draft.pillar,
            captured_by: draft.captured_by,
            emoji: draft.emoji,
            status: FridgeStatus::Personal,
            value_tag: None,
            reactions: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        info!(item_id = %item.id, item_type = ?item.item_type, "capturing fridge item");
        let id = item.id.clone();
        self.items.insert(0, item);
        self.persist();
        id
    }

    /// Move an item to a new status. Any transition is permitted here;
    /// the promotion UI only offers forward moves.
    pub fn update_status(&mut self, item_id: &str, status: FridgeStatus) -> Result<(), StateError> {
        let item = self.item_mut(item_id)?;
        item.status = status;
        item.updated_at = Utc::now();
        self.persist();
        Ok(())
    }

    /// Add a member's reaction, replacing any earlier reaction from the
    /// same member.
    pub fn add_reaction(
        &mut self,
        item_id: &str,
        member_id: String,
        emoji: String,
    ) -> Result<(), StateError> {
        let now = Utc::now();
        let item = self.item_mut(item_id)?;
        item.reactions.retain(|r| r.member_id != member_id);
        item.reactions.push(Reaction {
            member_id,
            emoji,
            reacted_at: now,
        });
        item.updated_at = now;
        self.persist();
        Ok(())
    }

    /// Remove a member's reaction if present.
    pub fn remove_reaction(&mut self, item_id: &str, member_id: &str) -> Result<(), StateError> {
        let item = self.item_mut(item_id)?;
        item.reactions.retain(|r| r.member_id != member_id);
        item.updated_at = Utc::now();
        self.persist();
        Ok(())
    }

    /// Link or unlink a family value.
    pub fn tag_value(&mut self, item_id: &str, value_id: Option<String>) -> Result<(), StateError> {
        let item = self.item_mut(item_id)?;
        item.value_tag = value_id;
        item.updated_at = Utc::now();
        self.persist();
        Ok(())
    }

    /// Hard-delete an item. No soft-delete, no undo.
    pub fn delete_item(&mut self, item_id: &str) -> Result<(), StateError> {
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        if self.items.len() == before {
            return Err(StateError::ItemNotFound(item_id.to_string()));
        }
        self.persist();
        Ok(())
    }

    /// Bulk-replace the item list, for demo-data seeding.
    pub fn set_items(&mut self, items: Vec<FridgeItem>) {
        self.items = items;
        self.persist();
    }

    fn item_mut(&mut self, item_id: &str) -> Result<&mut FridgeItem, StateError> {
        self.items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| StateError::ItemNotFound(item_id.to_string()))
    }

    // --- accessors ---

    /// Look up an item by id.
    pub fn item(&self, item_id: &str) -> Option<&FridgeItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// All items, newest first.
    pub fn items(&self) -> &[FridgeItem] {
        &self.items
    }

    fn with_status(&self, status: FridgeStatus) -> Vec<&FridgeItem> {
        self.items.iter().filter(|i| i.status == status).collect()
    }

    /// Items pinned to the front of the fridge.
    pub fn pinned(&self) -> Vec<&FridgeItem> {
        self.with_status(FridgeStatus::Pinned)
    }

    /// Items in the shared rotation.
    pub fn rotation(&self) -> Vec<&FridgeItem> {
        self.with_status(FridgeStatus::Rotation)
    }

    /// Items still on personal boards.
    pub fn personal(&self) -> Vec<&FridgeItem> {
        self.with_status(FridgeStatus::Personal)
    }

    /// Archived items.
    pub fn archived(&self) -> Vec<&FridgeItem> {
        self.with_status(FridgeStatus::Archived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn board() -> FridgeBoard {
        FridgeBoard::new(Storage::new(Arc::new(MemoryStore::new())))
    }

    #[test]
    fn captured_quote_starts_personal_with_equal_timestamps() {
        let mut board = board();
        let id = board.add_item(NewFridgeItem::quote(
            "If fish could walk they'd probably be rude about it",
            "wyatt",
            "dad",
            "😂",
        ));
        let item = board.item(&id).unwrap();
        assert!(!item.id.is_empty());
        assert_eq!(item.item_type, FridgeItemType::Quote);
        assert_eq!(item.status, FridgeStatus::Personal);
        assert_eq!(item.said_by.as_deref(), Some("wyatt"));
        assert_eq!(item.captured_by, "dad");
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn newest_item_comes_first() {
        let mut board = board();
        board.add_item(NewFridgeItem::note("first", "dad"));
        board.add_item(NewFridgeItem::note("second", "mom"));
        assert_eq!(board.items()[0].content, "second");
    }

    #[test]
    fn status_changes_only_through_update_status() {
        let mut board = board();
        let id = board.add_item(NewFridgeItem::note("brave thoughts", "wyatt"));

        // unrelated actions leave status alone
        board.add_reaction(&id, "dad".into(), "💪".into()).unwrap();
        board.tag_value(&id, Some("val-1".into())).unwrap();
        assert_eq!(board.item(&id).unwrap().status, FridgeStatus::Personal);

        board.update_status(&id, FridgeStatus::Rotation).unwrap();
        assert_eq!(board.item(&id).unwrap().status, FridgeStatus::Rotation);
        assert_eq!(board.rotation().len(), 1);
        assert!(board.personal().is_empty());
    }

    #[test]
    fn one_reaction_per_member_last_write_wins() {
        let mut board = board();
        let id = board.add_item(NewFridgeItem::note("note", "dad"));
        for emoji in ["😂", "🥹", "💡"] {
            board.add_reaction(&id, "mom".into(), emoji.into()).unwrap();
        }
        let reactions = &board.item(&id).unwrap().reactions;
        assert_eq!(reactions.len(), 1);
        assert_eq!(reactions[0].emoji, "💡");

        board.remove_reaction(&id, "mom").unwrap();
        assert!(board.item(&id).unwrap().reactions.is_empty());
    }

    #[test]
    fn delete_is_hard_and_reports_unknown_ids() {
        let mut board = board();
        let id = board.add_item(NewFridgeItem::note("gone soon", "dad"));
        board.delete_item(&id).unwrap();
        assert!(board.items().is_empty());
        assert!(matches!(board.delete_item(&id), Err(StateError::ItemNotFound(_))));
    }

    #[test]
    fn board_round_trips_through_storage() {
        let storage = Storage::new(Arc::new(MemoryStore::new()));
        let mut board = FridgeBoard::new(storage.clone());
        let id = board.add_item(NewFridgeItem::wisdom(
            "The obstacle is the way.",
            "Marcus Aurelius",
            "mom",
            Some(Pillar::Effort),
        ));
        board.update_status(&id, FridgeStatus::Pinned).unwrap();

        let mut again = FridgeBoard::new(storage);
        again.hydrate();
        assert_eq!(again.items(), board.items());
        assert_eq!(again.pinned().len(), 1);
    }
}
