//! Family rituals: the spotlight, tonight's question, and turn cursors.

use chrono::{Local, Utc};
use tracing::{debug, warn};

use fridge_content::Question;

use crate::error::StateError;
use crate::storage::{keys, Storage};
use crate::time;
use crate::types::{SpotlightPass, SpotlightState, TonightsQuestion, TurnState};

/// Commands accepted by [`Rituals::apply`].
#[derive(Debug, Clone)]
pub enum RitualCommand {
    PassSpotlight {
        from: String,
        to: String,
        reason: String,
    },
    PickQuestion { question: Question, picked_by: String },
    MarkDiscussed,
    AdvanceQuestionPicker,
    AdvanceQuestPicker,
    SetTurnOrder {
        question_picker_order: Vec<String>,
        quest_picker_order: Vec<String>,
    },
}

/// Owns the `spotlight`, `turns`, `tonightsQuestion`, and `questionHistory`
/// slices.
pub struct Rituals {
    storage: Storage,
    spotlight: SpotlightState,
    turns: TurnState,
    tonights_question: Option<TonightsQuestion>,
    question_history: Vec<String>,
}

impl Rituals {
    /// Create empty ritual state over `storage`.
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            spotlight: SpotlightState::default(),
            turns: TurnState::default(),
            tonights_question: None,
            question_history: Vec::new(),
        }
    }

    /// Load persisted slices, keeping defaults for anything absent.
    pub fn hydrate(&mut self) {
        if let Some(spotlight) = self.storage.load(keys::SPOTLIGHT) {
            self.spotlight = spotlight;
        }
        if let Some(turns) = self.storage.load(keys::TURNS) {
            self.turns = turns;
        }
        if let Some(question) = self.storage.load(keys::TONIGHTS_QUESTION) {
            self.tonights_question = question;
        }
        if let Some(history) = self.storage.load(keys::QUESTION_HISTORY) {
            self.question_history = history;
        }
    }

    fn persist(&self) {
        self.storage.save(keys::SPOTLIGHT, &self.spotlight);
        self.storage.save(keys::TURNS, &self.turns);
        self.storage.save(keys::TONIGHTS_QUESTION, &self.tonights_question);
        self.storage.save(keys::QUESTION_HISTORY, &self.question_history);
    }

    /// Dispatch a command to its handler.
    pub fn apply(&mut self, command: RitualCommand) -> Result<(), StateError> {
        match command {
            RitualCommand::PassSpotlight { from, to, reason } => {
                self.pass_spotlight(&from, to, reason)
            }
            RitualCommand::PickQuestion { question, picked_by } => {
                self.pick_question(&question, picked_by);
                Ok(())
            }
            RitualCommand::MarkDiscussed => {
                self.mark_discussed();
                Ok(())
            }
            RitualCommand::AdvanceQuestionPicker => {
                self.advance_question_picker();
                Ok(())
            }
            RitualCommand::AdvanceQuestPicker => {
                self.advance_quest_picker();
                Ok(())
            }
            RitualCommand::SetTurnOrder { question_picker_order, quest_picker_order } => {
                self.set_turn_order(question_picker_order, quest_picker_order);
                Ok(())
            }
        }
    }

    // --- spotlight ---

    /// Pass the spotlight, atomically replacing holder and held-since and
    /// prepending exactly one history entry.
    ///
    /// `from` must name the current holder; the very first pass (no holder
    /// yet) accepts any `from`.
    pub fn pass_spotlight(
        &mut self,
        from: &str,
        to: String,
        reason: String,
    ) -> Result<(), StateError> {
        if !self.spotlight.current_holder.is_empty() && self.spotlight.current_holder != from {
            return Err(StateError::NotSpotlightHolder {
                claimed: from.to_string(),
                holder: self.spotlight.current_holder.clone(),
            });
        }
        let now = Utc::now();
        self.spotlight.history.insert(
            0,
            SpotlightPass {
                id: self.storage.generate_id("sp"),
                from: from.to_string(),
                to: to.clone(),
                reason,
                passed_at: now,
            },
        );
        self.spotlight.current_holder = to;
        self.spotlight.held_since = now;
        self.persist();
        Ok(())
    }

    /// Seed the spotlight without recording a pass, for demo data.
    pub fn set_spotlight(&mut self, spotlight: SpotlightState) {
        self.spotlight = spotlight;
        self.persist();
    }

    /// Seed tonight's question directly, for demo data.
    pub fn set_tonights_question(&mut self, question: TonightsQuestion) {
        self.question_history.push(question.question_id.clone());
        self.tonights_question = Some(question);
        self.persist();
    }

    /// Current spotlight state.
    pub fn spotlight(&self) -> &SpotlightState {
        &self.spotlight
    }

    /// Whole days the current holder has held the spotlight.
    pub fn days_held(&self) -> i64 {
        time::days_since(self.spotlight.held_since)
    }

    // --- tonight's question ---

    /// Install tonight's question, replacing any previous one, and remember
    /// the question id so future picks can avoid repeats.
    pub fn pick_question(&mut self, question: &Question, picked_by: String) {
        self.tonights_question = Some(TonightsQuestion {
            question_id: question.id.clone(),
            question_text: question.text.clone(),
            category: question.category,
            picked_by,
            date: Local::now().date_naive(),
            discussed: false,
        });
        self.question_history.push(question.id.clone());
        self.persist();
    }

    /// Mark tonight's question discussed. No-op when no question is set.
    pub fn mark_discussed(&mut self) {
        match self.tonights_question.as_mut() {
            Some(question) => {
                question.discussed = true;
                self.persist();
            }
            None => debug!("mark_discussed with no question set"),
        }
    }

    /// Tonight's question, if one has been picked.
    pub fn tonights_question(&self) -> Option<&TonightsQuestion> {
        self.tonights_question.as_ref()
    }

    /// Ids of every question picked so far.
    pub fn question_history(&self) -> &[String] {
        &self.question_history
    }

    // --- turn cursors ---

    /// Replace both turn orders. Cursors out of range after the change are
    /// reset to the front.
    pub fn set_turn_order(
        &mut self,
        question_picker_order: Vec<String>,
        quest_picker_order: Vec<String>,
    ) {
        self.turns.question_picker_order = question_picker_order;
        self.turns.quest_picker_order = quest_picker_order;
        if self.turns.question_picker_index >= self.turns.question_picker_order.len() {
            self.turns.question_picker_index = 0;
        }
        if self.turns.quest_picker_index >= self.turns.quest_picker_order.len() {
            self.turns.quest_picker_index = 0;
        }
        self.persist();
    }

    /// Seed the turn state wholesale, for demo data.
    pub fn set_turns(&mut self, turns: TurnState) {
        self.turns = turns;
        self.persist();
    }

    /// Move the question-picker cursor to the next member, wrapping.
    pub fn advance_question_picker(&mut self) {
        let len = self.turns.question_picker_order.len();
        if len == 0 {
            warn!("advance_question_picker with empty turn order");
            return;
        }
        self.turns.question_picker_index = (self.turns.question_picker_index + 1) % len;
        self.persist();
    }

    /// Move the quest-picker cursor to the next member, wrapping.
    pub fn advance_quest_picker(&mut self) {
        let len = self.turns.quest_picker_order.len();
        if len == 0 {
            warn!("advance_quest_picker with empty turn order");
            return;
        }
        self.turns.quest_picker_index = (self.turns.quest_picker_index + 1) % len;
        self.persist();
    }

    /// Member whose turn it is to pick tonight's question.
    pub fn current_question_picker(&self) -> Option<&str> {
        self.turns
            .question_picker_order
            .get(self.turns.question_picker_index)
            .map(String::as_str)
    }

    /// Member whose turn it is to pick the weekly quest.
    pub fn current_quest_picker(&self) -> Option<&str> {
        self.turns
            .quest_picker_order
            .get(self.turns.quest_picker_index)
            .map(String::as_str)
    }

    /// Raw turn state.
    pub fn turns(&self) -> &TurnState {
        &self.turns
    }
}
