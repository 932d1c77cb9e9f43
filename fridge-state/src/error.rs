//! Error types for state container operations.

use crate::types::ExperimentStatus;

/// Errors surfaced by the state containers.
///
/// Storage failures never appear here: persistence is best-effort and
/// swallowed with a warning. These errors are reference failures and
/// rejected transitions that callers are expected to handle.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No family member with this id
    #[error("family member not found: {0}")]
    MemberNotFound(String),

    /// No family value with this id
    #[error("family value not found: {0}")]
    ValueNotFound(String),

    /// A family keeps at most five values
    #[error("family value limit reached ({0} max)")]
    ValueLimitReached(usize),

    /// No fridge item with this id
    #[error("fridge item not found: {0}")]
    ItemNotFound(String),

    /// Spotlight pass where `from` is not the current holder
    #[error("spotlight pass from {claimed} rejected, current holder is {holder}")]
    NotSpotlightHolder { claimed: String, holder: String },

    /// No quest in the family library with this id
    #[error("family quest not found: {0}")]
    QuestNotFound(String),

    /// Completing or skipping with no weekly quest installed
    #[error("no active weekly quest")]
    NoActiveWeeklyQuest,

    /// No experiment with this id
    #[error("experiment not found: {0}")]
    ExperimentNotFound(String),

    /// Check-ins are only accepted while an experiment is active
    #[error("experiment {id} is {status:?}, check-ins need an active experiment")]
    ExperimentNotActive { id: String, status: ExperimentStatus },

    /// Transition not allowed by the experiment lifecycle
    #[error("experiment {id} cannot move from {from:?} to {to:?}")]
    InvalidExperimentTransition {
        id: String,
        from: ExperimentStatus,
        to: ExperimentStatus,
    },

    /// No time capsule with this id
    #[error("time capsule not found: {0}")]
    CapsuleNotFound(String),

    /// Unlock attempted before the capsule's unlock date
    #[error("time capsule {0} is still locked")]
    CapsuleStillLocked(String),
}
