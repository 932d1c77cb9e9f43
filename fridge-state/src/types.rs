//! Shared record types for the persisted state slices.
//!
//! Field names serialize in camelCase and enum variants in lowercase to
//! match the persisted key-value layout, so an existing data set loads
//! unchanged.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use fridge_content::{Pillar, Quest, QuestionCategory};

// --- Family ---

/// Parent or child; children get age-gated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Parent,
    Child,
}

/// A member of the family roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    /// Opaque stable id
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar glyph
    pub avatar: String,
    /// Display accent color (hex)
    pub color: String,
    /// Birth date
    pub birthdate: NaiveDate,
    /// Parent or child
    pub role: MemberRole,
}

impl FamilyMember {
    /// Age in whole years at `today`.
    pub fn age_at(&self, today: NaiveDate) -> u32 {
        let mut age = today.years_since(self.birthdate).unwrap_or(0);
        if self.birthdate > today {
            age = 0;
        }
        age
    }
}

/// One of the family's chosen values (at most five per family).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyValue {
    pub id: String,
    pub emoji: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Onboarding progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingState {
    pub completed: bool,
    pub current_step: u8,
    pub total_steps: u8,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            completed: false,
            current_step: 0,
            total_steps: 7,
        }
    }
}

// --- Fridge ---

/// Where a fridge item sits in its lifecycle.
///
/// Items start `Personal` and only move through explicit promotion; nothing
/// changes status automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FridgeStatus {
    /// On the capturer's private board
    Personal,
    /// In the shared rotation
    Rotation,
    /// Pinned to the front of the fridge
    Pinned,
    /// Out of rotation, kept for the archive
    Archived,
}

/// Kind of captured memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FridgeItemType {
    Quote,
    Wisdom,
    Note,
    Photo,
}

/// One member's reaction to an item or experiment.
///
/// A member holds at most one reaction per target; adding a new one replaces
/// the old.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub member_id: String,
    pub emoji: String,
    pub reacted_at: DateTime<Utc>,
}

/// A captured family memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FridgeItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: FridgeItemType,
    /// The captured text
    pub content: String,
    /// Member who said it (quotes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub said_by: Option<String>,
    /// Attribution string (wisdom)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Thematic tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pillar: Option<Pillar>,
    /// Member who recorded it
    pub captured_by: String,
    /// Mood emoji
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    pub status: FridgeStatus,
    /// Linked family value id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_tag: Option<String>,
    pub reactions: Vec<Reaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FridgeItem {
    /// Attribution for display: the speaker when known, else the source.
    pub fn attribution(&self) -> Option<&str> {
        self.said_by.as_deref().or(self.source.as_deref())
    }
}

// --- Rituals ---

/// One spotlight hand-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightPass {
    pub id: String,
    pub from: String,
    pub to: String,
    pub reason: String,
    pub passed_at: DateTime<Utc>,
}

/// Who holds the spotlight, since when, and every pass so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightState {
    /// Current holder's member id, empty before the first pass
    pub current_holder: String,
    pub held_since: DateTime<Utc>,
    /// Newest first, append-only
    pub history: Vec<SpotlightPass>,
}

impl Default for SpotlightState {
    fn default() -> Self {
        Self {
            current_holder: String::new(),
            held_since: Utc::now(),
            history: Vec::new(),
        }
    }
}

/// Two independent round-robin cursors over the roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnState {
    pub question_picker_order: Vec<String>,
    pub question_picker_index: usize,
    pub quest_picker_order: Vec<String>,
    pub quest_picker_index: usize,
}

/// The question picked for tonight's dinner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TonightsQuestion {
    pub question_id: String,
    pub question_text: String,
    pub category: QuestionCategory,
    pub picked_by: String,
    /// Calendar day, not a timestamp
    pub date: NaiveDate,
    /// Flips to true once, never back in normal flow
    pub discussed: bool,
}

// --- Quests ---

/// Family-level status of a library quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyQuestStatus {
    Available,
    Favorite,
    Completed,
    Archived,
}

/// Record of one completion of a library quest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestCompletion {
    pub id: String,
    pub completed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A quest the family adopted into its library.
///
/// `quest` is a snapshot of the catalog definition taken at add time and is
/// intentionally not kept in sync with later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyQuest {
    pub id: String,
    /// Underlying catalog quest id, unique within the library
    pub quest_id: String,
    pub pack_id: String,
    pub quest: Quest,
    pub added_by: String,
    pub added_at: DateTime<Utc>,
    pub status: FamilyQuestStatus,
    /// Append-only
    pub completions: Vec<QuestCompletion>,
}

/// Status of a weekly quest slot or history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeeklyStatus {
    Active,
    Completed,
    Skipped,
}

/// The single active weekly pick, or an immutable history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyQuest {
    pub id: String,
    pub family_quest_id: String,
    pub picked_by: String,
    /// Most recent Sunday at local midnight
    pub week_start: DateTime<Utc>,
    pub status: WeeklyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// --- Experiments ---

/// Experiment lifecycle.
///
/// `Active → {Completed, Paused, Abandoned}`, `Paused → Active`;
/// `Completed` and `Abandoned` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentStatus {
    Active,
    Completed,
    Paused,
    Abandoned,
}

impl ExperimentStatus {
    /// Terminal states accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Abandoned)
    }
}

/// How often the owner intends to check in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInFrequency {
    Daily,
    Weekly,
    None,
}

/// How a check-in felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInStatus {
    Going,
    Struggling,
    Break,
}

/// One experiment check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentCheckIn {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub status: CheckInStatus,
}

/// A time-boxed personal or family challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    pub id: String,
    /// Owning member
    pub member_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration_days: u32,
    pub start_date: DateTime<Utc>,
    pub check_in_frequency: CheckInFrequency,
    pub status: ExperimentStatus,
    /// Append-only, accepted only while active
    pub check_ins: Vec<ExperimentCheckIn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    /// Visible on the family board
    pub family_visible: bool,
    /// Shared family experiment rather than personal
    pub is_family: bool,
    pub reactions: Vec<Reaction>,
}

// --- Time capsules ---

/// A sealed note that unlocks on a future date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeCapsule {
    pub id: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub unlock_date: DateTime<Utc>,
    pub note: String,
    /// Fridge items sealed alongside the note
    pub item_ids: Vec<String>,
    pub is_unlocked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fridge_item_serializes_with_original_field_names() {
        let item = FridgeItem {
            id: "item-1".into(),
            item_type: FridgeItemType::Quote,
            content: "hi".into(),
            said_by: Some("wyatt".into()),
            source: None,
            pillar: None,
            captured_by: "dad".into(),
            emoji: Some("😂".into()),
            status: FridgeStatus::Personal,
            value_tag: None,
            reactions: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "quote");
        assert_eq!(json["saidBy"], "wyatt");
        assert_eq!(json["capturedBy"], "dad");
        assert_eq!(json["status"], "personal");
        assert!(json.get("source").is_none());
    }

    #[test]
    fn attribution_prefers_speaker_over_source() {
        let mut item = FridgeItem {
            id: "item-2".into(),
            item_type: FridgeItemType::Wisdom,
            content: "walk slowly".into(),
            said_by: Some("eleanor".into()),
            source: Some("Grandmother".into()),
            pillar: Some(Pillar::Delight),
            captured_by: "mom".into(),
            emoji: None,
            status: FridgeStatus::Personal,
            value_tag: None,
            reactions: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(item.attribution(), Some("eleanor"));
        item.said_by = None;
        assert_eq!(item.attribution(), Some("Grandmother"));
    }

    #[test]
    fn terminal_statuses() {
        assert!(ExperimentStatus::Completed.is_terminal());
        assert!(ExperimentStatus::Abandoned.is_terminal());
        assert!(!ExperimentStatus::Paused.is_terminal());
        assert!(!ExperimentStatus::Active.is_terminal());
    }
}
