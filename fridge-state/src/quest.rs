//! The quest library and the weekly quest slot.

use chrono::{Local, Utc};
use tracing::{debug, info, warn};

use fridge_content::Quest;

use crate::error::StateError;
use crate::storage::{keys, Storage};
use crate::time;
use crate::types::{FamilyQuest, FamilyQuestStatus, QuestCompletion, WeeklyQuest, WeeklyStatus};

/// Pack id recorded for quests the family wrote themselves.
const CUSTOM_PACK_ID: &str = "custom";

/// Commands accepted by [`QuestLog::apply`].
#[derive(Debug, Clone)]
pub enum QuestCommand {
    AddToLibrary {
        quest: Quest,
        pack_id: String,
        added_by: String,
    },
    AddCustomQuest { quest: Quest, added_by: String },
    RemoveFromLibrary { family_quest_id: String },
    ToggleFavorite { family_quest_id: String },
    Archive { family_quest_id: String },
    PickWeekly {
        family_quest_id: String,
        picked_by: String,
    },
    CompleteWeekly { note: Option<String> },
    SkipWeekly,
}

/// Owns the `questLibrary`, `weeklyQuest`, and `weeklyHistory` slices.
pub struct QuestLog {
    storage: Storage,
    library: Vec<FamilyQuest>,
    weekly: Option<WeeklyQuest>,
    weekly_history: Vec<WeeklyQuest>,
}

impl QuestLog {
    /// Create an empty log over `storage`.
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            library: Vec::new(),
            weekly: None,
            weekly_history: Vec::new(),
        }
    }

    /// Load persisted slices, keeping defaults for anything absent.
    pub fn hydrate(&mut self) {
        if let Some(library) = self.storage.load(keys::QUEST_LIBRARY) {
            self.library = library;
        }
        if let Some(weekly) = self.storage.load(keys::WEEKLY_QUEST) {
            self.weekly = weekly;
        }
        if let Some(history) = self.storage.load(keys::WEEKLY_HISTORY) {
            self.weekly_history = history;
        }
    }

    fn persist(&self) {
        self.storage.save(keys::QUEST_LIBRARY, &self.library);
        self.storage.save(keys::WEEKLY_QUEST, &self.weekly);
        self.storage.save(keys::WEEKLY_HISTORY, &self.weekly_history);
    }

    /// Dispatch a command to its handler.
    pub fn apply(&mut self, command: QuestCommand) -> Result<(), StateError> {
        match command {
            QuestCommand::AddToLibrary { quest, pack_id, added_by } => {
                self.add_to_library(&quest, pack_id, added_by);
                Ok(())
            }
            QuestCommand::AddCustomQuest { quest, added_by } => {
                self.add_custom_quest(quest, added_by);
                Ok(())
            }
            QuestCommand::RemoveFromLibrary { family_quest_id } => {
                self.remove_from_library(&family_quest_id)
            }
            QuestCommand::ToggleFavorite { family_quest_id } => {
                self.toggle_favorite(&family_quest_id)
            }
            QuestCommand::Archive { family_quest_id } => self.archive(&family_quest_id),
            QuestCommand::PickWeekly { family_quest_id, picked_by } => {
                self.pick_weekly(&family_quest_id, picked_by)
            }
            QuestCommand::CompleteWeekly { note } => self.complete_weekly(note),
            QuestCommand::SkipWeekly => self.skip_weekly(),
        }
    }

    // --- library ---

    /// Adopt a catalog quest into the library. Idempotent: if the underlying
    /// quest is already present, the existing entry's id is returned and
    /// nothing changes. The catalog definition is snapshotted at add time.
    pub fn add_to_library(&mut self, quest: &Quest, pack_id: String, added_by: String) -> String {
        if let Some(existing) = self.library.iter().find(|fq| fq.quest_id == quest.id) {
            debug!(quest_id = %quest.id, "quest already in library");
            return existing.id.clone();
        }
        let family_quest = FamilyQuest {
            id: self.storage.generate_id("fq"),
            quest_id: quest.id.clone(),
            pack_id,
            quest: quest.clone(),
            added_by,
            added_at: Utc::now(),
            status: FamilyQuestStatus::Available,
            completions: Vec::new(),
        };
        info!(quest_id = %quest.id, title = %quest.title, "adding quest to library");
        let id = family_quest.id.clone();
        self.library.push(family_quest);
        self.persist();
        id
    }

    /// Add a quest the family wrote themselves.
    pub fn add_custom_quest(&mut self, quest: Quest, added_by: String) -> String {
        self.add_to_library(&quest, CUSTOM_PACK_ID.to_string(), added_by)
    }

    /// Drop a quest from the library.
    pub fn remove_from_library(&mut self, family_quest_id: &str) -> Result<(), StateError> {
        let before = self.library.len();
        self.library.retain(|fq| fq.id != family_quest_id);
        if self.library.len() == before {
            return Err(StateError::QuestNotFound(family_quest_id.to_string()));
        }
        self.persist();
        Ok(())
    }

    /// Flip a quest between favorite and available. Completed and archived
    /// entries keep their status so completion history stays primary.
    pub fn toggle_favorite(&mut self, family_quest_id: &str) -> Result<(), StateError> {
        let quest = self.library_mut(family_quest_id)?;
        match quest.status {
            FamilyQuestStatus::Available => quest.status = FamilyQuestStatus::Favorite,
            FamilyQuestStatus::Favorite => quest.status = FamilyQuestStatus::Available,
            other => {
                debug!(family_quest_id, status = ?other, "favorite toggle ignored");
                return Ok(());
            }
        }
        self.persist();
        Ok(())
    }

    /// Archive a library quest.
    pub fn archive(&mut self, family_quest_id: &str) -> Result<(), StateError> {
        let quest = self.library_mut(family_quest_id)?;
        quest.status = FamilyQuestStatus::Archived;
        self.persist();
        Ok(())
    }

    // --- weekly slot ---

    /// Install a library quest as this week's pick, unconditionally
    /// replacing any existing active slot.
    pub fn pick_weekly(
        &mut self,
        family_quest_id: &str,
        picked_by: String,
    ) -> Result<(), StateError> {
        if self.library_entry(family_quest_id).is_none() {
            return Err(StateError::QuestNotFound(family_quest_id.to_string()));
        }
        if let Some(current) = &self.weekly {
            warn!(replaced = %current.family_quest_id, "replacing active weekly quest");
        }
        self.weekly = Some(WeeklyQuest {
            id: self.storage.generate_id("wq"),
            family_quest_id: family_quest_id.to_string(),
            picked_by,
            week_start: time::start_of_week(Local::now()),
            status: WeeklyStatus::Active,
            completed_at: None,
            note: None,
        });
        self.persist();
        Ok(())
    }

    /// Finish the weekly quest: move it to history as completed, record a
    /// completion on the library quest, and mark that quest completed unless
    /// it is a favorite (favorites keep their flag).
    pub fn complete_weekly(&mut self, note: Option<String>) -> Result<(), StateError> {
        let mut weekly = self.weekly.take().ok_or(StateError::NoActiveWeeklyQuest)?;
        let now = Utc::now();
        weekly.status = WeeklyStatus::Completed;
        weekly.completed_at = Some(now);
        weekly.note = note.clone();
        let family_quest_id = weekly.family_quest_id.clone();
        self.weekly_history.insert(0, weekly);

        let completion_id = self.storage.generate_id("qc");
        if let Some(quest) = self.library.iter_mut().find(|fq| fq.id == family_quest_id) {
            if quest.status != FamilyQuestStatus::Favorite {
                quest.status = FamilyQuestStatus::Completed;
            }
            quest.completions.push(QuestCompletion {
                id: completion_id,
                completed_at: now,
                note,
            });
        } else {
            // The quest was removed while the weekly slot pointed at it;
            // history still records the completion.
            warn!(family_quest_id = %family_quest_id, "completed weekly quest no longer in library");
        }
        self.persist();
        Ok(())
    }

    /// Skip the weekly quest: move it to history as skipped, leaving the
    /// library quest untouched.
    pub fn skip_weekly(&mut self) -> Result<(), StateError> {
        let mut weekly = self.weekly.take().ok_or(StateError::NoActiveWeeklyQuest)?;
        weekly.status = WeeklyStatus::Skipped;
        self.weekly_history.insert(0, weekly);
        self.persist();
        Ok(())
    }

    fn library_mut(&mut self, family_quest_id: &str) -> Result<&mut FamilyQuest, StateError> {
        self.library
            .iter_mut()
            .find(|fq| fq.id == family_quest_id)
            .ok_or_else(|| StateError::QuestNotFound(family_quest_id.to_string()))
    }

    // --- accessors ---

    /// Look up a library entry by id.
    pub fn library_entry(&self, family_quest_id: &str) -> Option<&FamilyQuest> {
        self.library.iter().find(|fq| fq.id == family_quest_id)
    }

    /// The whole library in adoption order.
    pub fn library(&self) -> &[FamilyQuest] {
        &self.library
    }

    /// This week's pick, if one is installed.
    pub fn weekly(&self) -> Option<&WeeklyQuest> {
        self.weekly.as_ref()
    }

    /// Finished and skipped weeks, newest first.
    pub fn weekly_history(&self) -> &[WeeklyQuest] {
        &self.weekly_history
    }

    /// Quests ready to pick: available or favorite.
    pub fn available(&self) -> Vec<&FamilyQuest> {
        self.library
            .iter()
            .filter(|fq| {
                matches!(
                    fq.status,
                    FamilyQuestStatus::Available | FamilyQuestStatus::Favorite
                )
            })
            .collect()
    }

    /// Favorites only.
    pub fn favorites(&self) -> Vec<&FamilyQuest> {
        self.library
            .iter()
            .filter(|fq| fq.status == FamilyQuestStatus::Favorite)
            .collect()
    }

    /// Quests the family has completed at least once.
    pub fn completed(&self) -> Vec<&FamilyQuest> {
        self.library
            .iter()
            .filter(|fq| fq.status == FamilyQuestStatus::Completed || !fq.completions.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::{Datelike, Weekday};
    use fridge_content::quests;
    use std::sync::Arc;

    fn log() -> QuestLog {
        QuestLog::new(Storage::new(Arc::new(MemoryStore::new())))
    }

    fn catalog_quest(id: &str) -> &'static Quest {
        quests::find_quest(id).unwrap().1
    }

    #[test]
    fn add_to_library_is_idempotent() {
        let mut log = log();
        let quest = catalog_quest("wa-1");
        let first = log.add_to_library(quest, "weekend-adventures".into(), "dad".into());
        let second = log.add_to_library(quest, "weekend-adventures".into(), "mom".into());
        assert_eq!(first, second);
        assert_eq!(log.library().len(), 1);
        assert_eq!(log.library()[0].added_by, "dad");
    }

    #[test]
    fn favorite_toggles_only_between_available_and_favorite() {
        let mut log = log();
        let id = log.add_to_library(catalog_quest("kc-1"), "kindness".into(), "mom".into());

        log.toggle_favorite(&id).unwrap();
        assert_eq!(log.library_entry(&id).unwrap().status, FamilyQuestStatus::Favorite);
        log.toggle_favorite(&id).unwrap();
        assert_eq!(log.library_entry(&id).unwrap().status, FamilyQuestStatus::Available);

        log.archive(&id).unwrap();
        log.toggle_favorite(&id).unwrap();
        assert_eq!(log.library_entry(&id).unwrap().status, FamilyQuestStatus::Archived);
    }

    #[test]
    fn pick_weekly_starts_on_a_sunday() {
        let mut log = log();
        let id = log.add_to_library(catalog_quest("tf-2"), "tech-free".into(), "wyatt".into());
        log.pick_weekly(&id, "wyatt".into()).unwrap();

        let weekly = log.weekly().unwrap();
        assert_eq!(weekly.status, WeeklyStatus::Active);
        assert_eq!(
            weekly.week_start.with_timezone(&Local).weekday(),
            Weekday::Sun
        );
    }

    #[test]
    fn pick_weekly_requires_a_library_quest() {
        let mut log = log();
        assert!(matches!(
            log.pick_weekly("fq-missing", "dad".into()),
            Err(StateError::QuestNotFound(_))
        ));
    }

    #[test]
    fn complete_weekly_clears_slot_and_records_completion() {
        let mut log = log();
        let id = log.add_to_library(catalog_quest("oc-1"), "outdoor".into(), "dad".into());
        log.pick_weekly(&id, "dad".into()).unwrap();

        log.complete_weekly(Some("saw Orion".into())).unwrap();
        assert!(log.weekly().is_none());
        assert_eq!(log.weekly_history().len(), 1);
        assert_eq!(log.weekly_history()[0].status, WeeklyStatus::Completed);

        let quest = log.library_entry(&id).unwrap();
        assert_eq!(quest.status, FamilyQuestStatus::Completed);
        assert_eq!(quest.completions.len(), 1);
        assert_eq!(quest.completions[0].note.as_deref(), Some("saw Orion"));
    }

    #[test]
    fn completing_a_favorite_keeps_it_favorite() {
        let mut log = log();
        let id = log.add_to_library(catalog_quest("gn-2"), "game-night".into(), "mom".into());
        log.toggle_favorite(&id).unwrap();
        log.pick_weekly(&id, "mom".into()).unwrap();
        log.complete_weekly(None).unwrap();

        let quest = log.library_entry(&id).unwrap();
        assert_eq!(quest.status, FamilyQuestStatus::Favorite);
        assert_eq!(quest.completions.len(), 1);
    }

    #[test]
    fn skip_weekly_leaves_library_quest_untouched() {
        let mut log = log();
        let id = log.add_to_library(catalog_quest("kq-1"), "kitchen".into(), "dad".into());
        log.pick_weekly(&id, "dad".into()).unwrap();
        log.skip_weekly().unwrap();

        assert!(log.weekly().is_none());
        assert_eq!(log.weekly_history()[0].status, WeeklyStatus::Skipped);
        let quest = log.library_entry(&id).unwrap();
        assert_eq!(quest.status, FamilyQuestStatus::Available);
        assert!(quest.completions.is_empty());
    }

    #[test]
    fn complete_without_active_weekly_is_an_error() {
        let mut log = log();
        assert!(matches!(log.complete_weekly(None), Err(StateError::NoActiveWeeklyQuest)));
        assert!(matches!(log.skip_weekly(), Err(StateError::NoActiveWeeklyQuest)));
    }

    #[test]
    fn picking_again_replaces_the_active_slot() {
        let mut log = log();
        let first = log.add_to_library(catalog_quest("wa-2"), "weekend-adventures".into(), "dad".into());
        let second = log.add_to_library(catalog_quest("kc-4"), "kindness".into(), "mom".into());
        log.pick_weekly(&first, "dad".into()).unwrap();
        log.pick_weekly(&second, "mom".into()).unwrap();

        assert_eq!(log.weekly().unwrap().family_quest_id, second);
        // the replaced pick vanishes rather than entering history
        assert!(log.weekly_history().is_empty());
    }

    #[test]
    fn quest_log_round_trips_through_storage() {
        let storage = Storage::new(Arc::new(MemoryStore::new()));
        let mut log = QuestLog::new(storage.clone());
        let id = log.add_to_library(catalog_quest("wa-1"), "weekend-adventures".into(), "dad".into());
        log.pick_weekly(&id, "dad".into()).unwrap();

        let mut again = QuestLog::new(storage);
        again.hydrate();
        assert_eq!(again.library().len(), 1);
        assert_eq!(again.weekly().unwrap().family_quest_id, id);
    }
}
