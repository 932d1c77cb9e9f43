//! Time capsules: notes sealed until a future date.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::StateError;
use crate::storage::{keys, Storage};
use crate::types::TimeCapsule;

/// Commands accepted by [`TimeCapsules::apply`].
#[derive(Debug, Clone)]
pub enum CapsuleCommand {
    Create {
        created_by: String,
        unlock_date: DateTime<Utc>,
        note: String,
        item_ids: Vec<String>,
    },
    Unlock { capsule_id: String },
}

/// Owns the `timeCapsules` slice.
pub struct TimeCapsules {
    storage: Storage,
    capsules: Vec<TimeCapsule>,
}

impl TimeCapsules {
    /// Create an empty collection over `storage`.
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            capsules: Vec::new(),
        }
    }

    /// Load the persisted capsule list, if any.
    pub fn hydrate(&mut self) {
        if let Some(capsules) = self.storage.load(keys::TIME_CAPSULES) {
            self.capsules = capsules;
        }
    }

    fn persist(&self) {
        self.storage.save(keys::TIME_CAPSULES, &self.capsules);
    }

    /// Dispatch a command to its handler.
    pub fn apply(&mut self, command: CapsuleCommand) -> Result<(), StateError> {
        match command {
            CapsuleCommand::Create { created_by, unlock_date, note, item_ids } => {
                self.create(created_by, unlock_date, note, item_ids);
                Ok(())
            }
            CapsuleCommand::Unlock { capsule_id } => self.unlock(&capsule_id, Utc::now()),
        }
    }

    /// Seal a new capsule. Returns its id.
    pub fn create(
        &mut self,
        created_by: String,
        unlock_date: DateTime<Utc>,
        note: String,
        item_ids: Vec<String>,
    ) -> String {
        let capsule = TimeCapsule {
            id: self.storage.generate_id("tc"),
            created_by,
            created_at: Utc::now(),
            unlock_date,
            note,
            item_ids,
            is_unlocked: false,
        };
        info!(capsule_id = %capsule.id, unlock_date = %capsule.unlock_date, "sealing time capsule");
        let id = capsule.id.clone();
        self.capsules.push(capsule);
        self.persist();
        id
    }

    /// Open a capsule whose unlock date has arrived. Unlocking an already
    /// open capsule is a no-op.
    pub fn unlock(&mut self, capsule_id: &str, now: DateTime<Utc>) -> Result<(), StateError> {
        let capsule = self
            .capsules
            .iter_mut()
            .find(|c| c.id == capsule_id)
            .ok_or_else(|| StateError::CapsuleNotFound(capsule_id.to_string()))?;
        if capsule.is_unlocked {
            debug!(capsule_id, "capsule already unlocked");
            return Ok(());
        }
        if capsule.unlock_date > now {
            return Err(StateError::CapsuleStillLocked(capsule_id.to_string()));
        }
        capsule.is_unlocked = true;
        self.persist();
        Ok(())
    }

    // --- accessors ---

    /// Look up a capsule by id.
    pub fn capsule(&self, capsule_id: &str) -> Option<&TimeCapsule> {
        self.capsules.iter().find(|c| c.id == capsule_id)
    }

    /// All capsules in creation order.
    pub fn capsules(&self) -> &[TimeCapsule] {
        &self.capsules
    }

    /// Sealed capsules whose unlock date has arrived.
    pub fn unlockable(&self, now: DateTime<Utc>) -> Vec<&TimeCapsule> {
        self.capsules
            .iter()
            .filter(|c| !c.is_unlocked && c.unlock_date <= now)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::Duration;
    use std::sync::Arc;

    fn capsules() -> TimeCapsules {
        TimeCapsules::new(Storage::new(Arc::new(MemoryStore::new())))
    }

    #[test]
    fn unlock_before_date_is_rejected() {
        let mut capsules = capsules();
        let id = capsules.create(
            "dad".into(),
            Utc::now() + Duration::days(365),
            "open on your birthday".into(),
            vec![],
        );
        let err = capsules.unlock(&id, Utc::now()).unwrap_err();
        assert!(matches!(err, StateError::CapsuleStillLocked(_)));
        assert!(!capsules.capsule(&id).unwrap().is_unlocked);
    }

    #[test]
    fn unlock_after_date_opens_and_is_idempotent() {
        let mut capsules = capsules();
        let id = capsules.create(
            "mom".into(),
            Utc::now() - Duration::days(1),
            "from last summer".into(),
            vec!["fridge-1".into()],
        );
        assert_eq!(capsules.unlockable(Utc::now()).len(), 1);

        capsules.unlock(&id, Utc::now()).unwrap();
        assert!(capsules.capsule(&id).unwrap().is_unlocked);
        assert!(capsules.unlockable(Utc::now()).is_empty());

        capsules.unlock(&id, Utc::now()).unwrap();
    }

    #[test]
    fn unknown_capsule_is_reported() {
        let mut capsules = capsules();
        assert!(matches!(
            capsules.unlock("tc-missing", Utc::now()),
            Err(StateError::CapsuleNotFound(_))
        ));
    }

    #[test]
    fn capsules_round_trip_through_storage() {
        let storage = Storage::new(Arc::new(MemoryStore::new()));
        let mut capsules = TimeCapsules::new(storage.clone());
        let id = capsules.create(
            "wyatt".into(),
            Utc::now() + Duration::days(30),
            "note to future me".into(),
            vec![],
        );

        let mut again = TimeCapsules::new(storage);
        again.hydrate();
        assert_eq!(again.capsule(&id).unwrap().note, "note to future me");
    }
}
