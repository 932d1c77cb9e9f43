//! The family directory: roster, values, onboarding, active user.

use chrono::Utc;
use tracing::{debug, info};

use crate::error::StateError;
use crate::storage::{keys, Storage};
use crate::types::{FamilyMember, FamilyValue, OnboardingState};

/// A family keeps at most this many values.
pub const MAX_FAMILY_VALUES: usize = 5;

/// Commands accepted by [`FamilyDirectory::apply`].
#[derive(Debug, Clone)]
pub enum DirectoryCommand {
    AddMember(FamilyMember),
    UpdateMember(FamilyMember),
    RemoveMember { member_id: String },
    SetActiveUser { member_id: String },
    ClearActiveUser,
    AddValue {
        emoji: String,
        title: String,
        description: String,
    },
    RemoveValue { value_id: String },
    SetOnboarding(OnboardingState),
    CompleteOnboarding,
    Reset,
}

/// Owns the `family`, `values`, `onboarding`, and `activeUser` slices.
///
/// Roster order is insertion order and drives deterministic turn ordering.
pub struct FamilyDirectory {
    storage: Storage,
    members: Vec<FamilyMember>,
    values: Vec<FamilyValue>,
    onboarding: OnboardingState,
    active_user: String,
}

impl FamilyDirectory {
    /// Create an empty directory over `storage`.
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            members: Vec::new(),
            values: Vec::new(),
            onboarding: OnboardingState::default(),
            active_user: String::new(),
        }
    }

    /// Load persisted slices, keeping defaults for anything absent.
    pub fn hydrate(&mut self) {
        if let Some(members) = self.storage.load(keys::FAMILY) {
            self.members = members;
        }
        if let Some(values) = self.storage.load(keys::VALUES) {
            self.values = values;
        }
        if let Some(onboarding) = self.storage.load(keys::ONBOARDING) {
            self.onboarding = onboarding;
        }
        if let Some(active_user) = self.storage.load(keys::ACTIVE_USER) {
            self.active_user = active_user;
        }
    }

    fn persist(&self) {
        self.storage.save(keys::FAMILY, &self.members);
        self.storage.save(keys::VALUES, &self.values);
        self.storage.save(keys::ONBOARDING, &self.onboarding);
        self.storage.save(keys::ACTIVE_USER, &self.active_user);
    }

    /// Dispatch a command to its handler.
    pub fn apply(&mut self, command: DirectoryCommand) -> Result<(), StateError> {
        match command {
            DirectoryCommand::AddMember(member) => {
                self.add_member(member);
                Ok(())
            }
            DirectoryCommand::UpdateMember(member) => self.update_member(member),
            DirectoryCommand::RemoveMember { member_id } => self.remove_member(&member_id),
            DirectoryCommand::SetActiveUser { member_id } => self.set_active_user(&member_id),
            DirectoryCommand::ClearActiveUser => {
                self.clear_active_user();
                Ok(())
            }
            DirectoryCommand::AddValue { emoji, title, description } => {
                self.add_value(emoji, title, description).map(|_| ())
            }
            DirectoryCommand::RemoveValue { value_id } => self.remove_value(&value_id),
            DirectoryCommand::SetOnboarding(onboarding) => {
                self.set_onboarding(onboarding);
                Ok(())
            }
            DirectoryCommand::CompleteOnboarding => {
                self.complete_onboarding();
                Ok(())
            }
            DirectoryCommand::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Add a member to the end of the roster.
    pub fn add_member(&mut self, member: FamilyMember) {
        info!(member_id = %member.id, name = %member.name, "adding family member");
        self.members.push(member);
        self.persist();
    }

    /// Replace an existing member's record.
    pub fn update_member(&mut self, member: FamilyMember) -> Result<(), StateError> {
        let slot = self
            .members
            .iter_mut()
            .find(|m| m.id == member.id)
            .ok_or_else(|| StateError::MemberNotFound(member.id.clone()))?;
        *slot = member;
        self.persist();
        Ok(())
    }

    /// Remove a member from the roster.
    pub fn remove_member(&mut self, member_id: &str) -> Result<(), StateError> {
        let before = self.members.len();
        self.members.retain(|m| m.id != member_id);
        if self.members.len() == before {
            return Err(StateError::MemberNotFound(member_id.to_string()));
        }
        if self.active_user == member_id {
            self.active_user.clear();
        }
        self.persist();
        Ok(())
    }

    /// Set which member is operating the app.
    pub fn set_active_user(&mut self, member_id: &str) -> Result<(), StateError> {
        if self.member(member_id).is_none() {
            return Err(StateError::MemberNotFound(member_id.to_string()));
        }
        self.active_user = member_id.to_string();
        self.persist();
        Ok(())
    }

    /// Unset the active user.
    pub fn clear_active_user(&mut self) {
        self.active_user.clear();
        self.persist();
    }

    /// Add a family value, enforcing the five-value limit.
    pub fn add_value(
        &mut self,
        emoji: String,
        title: String,
        description: String,
    ) -> Result<String, StateError> {
        if self.values.len() >= MAX_FAMILY_VALUES {
            return Err(StateError::ValueLimitReached(MAX_FAMILY_VALUES));
        }
        let value = FamilyValue {
            id: self.storage.generate_id("val"),
            emoji,
            title,
            description,
            created_at: Utc::now(),
        };
        let id = value.id.clone();
        self.values.push(value);
        self.persist();
        Ok(id)
    }

    /// Remove a family value.
    pub fn remove_value(&mut self, value_id: &str) -> Result<(), StateError> {
        let before = self.values.len();
        self.values.retain(|v| v.id != value_id);
        if self.values.len() == before {
            return Err(StateError::ValueNotFound(value_id.to_string()));
        }
        self.persist();
        Ok(())
    }

    /// Replace onboarding progress wholesale.
    pub fn set_onboarding(&mut self, onboarding: OnboardingState) {
        self.onboarding = onboarding;
        self.persist();
    }

    /// Mark onboarding finished.
    pub fn complete_onboarding(&mut self) {
        self.onboarding.completed = true;
        self.persist();
    }

    /// Bulk-replace roster and values, for demo-data seeding.
    pub fn replace_all(&mut self, members: Vec<FamilyMember>, values: Vec<FamilyValue>) {
        debug!(members = members.len(), values = values.len(), "bulk-replacing directory");
        self.members = members;
        self.values = values;
        self.persist();
    }

    /// Drop everything back to the empty state.
    pub fn reset(&mut self) {
        self.members.clear();
        self.values.clear();
        self.onboarding = OnboardingState::default();
        self.active_user.clear();
        self.persist();
    }

    // --- accessors ---

    /// Look up a member by id.
    pub fn member(&self, member_id: &str) -> Option<&FamilyMember> {
        self.members.iter().find(|m| m.id == member_id)
    }

    /// The roster in insertion order.
    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    /// Member ids in roster order, for building turn orders.
    pub fn member_ids(&self) -> Vec<String> {
        self.members.iter().map(|m| m.id.clone()).collect()
    }

    /// The family's values.
    pub fn values(&self) -> &[FamilyValue] {
        &self.values
    }

    /// Onboarding progress.
    pub fn onboarding(&self) -> &OnboardingState {
        &self.onboarding
    }

    /// The member operating the app, if one is set.
    pub fn active_user(&self) -> Option<&FamilyMember> {
        if self.active_user.is_empty() {
            None
        } else {
            self.member(&self.active_user)
        }
    }
}
