//! Personal and family experiments: time-boxed challenges with check-ins.

use chrono::Utc;
use tracing::{debug, info};

use crate::error::StateError;
use crate::storage::{keys, Storage};
use crate::types::{
    CheckInFrequency, CheckInStatus, Experiment, ExperimentCheckIn, ExperimentStatus, Reaction,
};

/// Everything needed to start an experiment; id, start date, status, and the
/// empty check-in and reaction lists are filled in by the tracker.
#[derive(Debug, Clone)]
pub struct NewExperiment {
    pub member_id: String,
    pub title: String,
    pub description: Option<String>,
    pub duration_days: u32,
    pub check_in_frequency: CheckInFrequency,
    pub is_family: bool,
}

/// Commands accepted by [`ExperimentTracker::apply`].
#[derive(Debug, Clone)]
pub enum ExperimentCommand {
    Create(NewExperiment),
    CheckIn {
        experiment_id: String,
        status: CheckInStatus,
        note: Option<String>,
    },
    Complete {
        experiment_id: String,
        reflection: Option<String>,
    },
    Abandon {
        experiment_id: String,
        reflection: Option<String>,
    },
    Pause { experiment_id: String },
    Resume { experiment_id: String },
    ToggleVisibility { experiment_id: String },
    AddReaction {
        experiment_id: String,
        member_id: String,
        emoji: String,
    },
}

/// Owns the `experiments` slice.
pub struct ExperimentTracker {
    storage: Storage,
    experiments: Vec<Experiment>,
}

impl ExperimentTracker {
    /// Create an empty tracker over `storage`.
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            experiments: Vec::new(),
        }
    }

    /// Load the persisted experiment list, if any.
    pub fn hydrate(&mut self) {
        if let Some(experiments) = self.storage.load(keys::EXPERIMENTS) {
            self.experiments = experiments;
        }
    }

    fn persist(&self) {
        self.storage.save(keys::EXPERIMENTS, &self.experiments);
    }

    /// Dispatch a command to its handler.
    pub fn apply(&mut self, command: ExperimentCommand) -> Result<(), StateError> {
        match command {
            ExperimentCommand::Create(draft) => {
                self.create(draft);
                Ok(())
            }
            ExperimentCommand::CheckIn { experiment_id, status, note } => {
                self.check_in(&experiment_id, status, note)
            }
            ExperimentCommand::Complete { experiment_id, reflection } => {
                self.complete(&experiment_id, reflection)
            }
            ExperimentCommand::Abandon { experiment_id, reflection } => {
                self.abandon(&experiment_id, reflection)
            }
            ExperimentCommand::Pause { experiment_id } => self.pause(&experiment_id),
            ExperimentCommand::Resume { experiment_id } => self.resume(&experiment_id),
            ExperimentCommand::ToggleVisibility { experiment_id } => {
                self.toggle_visibility(&experiment_id)
            }
            ExperimentCommand::AddReaction { experiment_id, member_id, emoji } => {
                self.add_reaction(&experiment_id, member_id, emoji)
            }
        }
    }

    /// Start a new experiment. It begins active immediately, and family
    /// experiments start out visible on the family board. Returns the id.
    pub fn create(&mut self, draft: NewExperiment) -> String {
        let experiment = Experiment {
            id: self.storage.generate_id("exp"),
            member_id: draft.member_id,
            title: draft.title,
            description: draft.description,
            duration_days: draft.duration_days,
            start_date: Utc::now(),
            check_in_frequency: draft.check_in_frequency,
            status: ExperimentStatus::Active,
            check_ins: Vec::new(),
            completed_at: None,
            reflection: None,
            family_visible: draft.is_family,
            is_family: draft.is_family,
            reactions: Vec::new(),
        };
        info!(experiment_id = %experiment.id, title = %experiment.title, "starting experiment");
        let id = experiment.id.clone();
        self.experiments.push(experiment);
        self.persist();
        id
    }

    /// Record a check-in. Only active experiments accept them.
    pub fn check_in(
        &mut self,
        experiment_id: &str,
        status: CheckInStatus,
        note: Option<String>,
    ) -> Result<(), StateError> {
        let check_in_id = self.storage.generate_id("ci");
        let experiment = self.experiment_mut(experiment_id)?;
        if experiment.status != ExperimentStatus::Active {
            return Err(StateError::ExperimentNotActive {
                id: experiment_id.to_string(),
                status: experiment.status,
            });
        }
        experiment.check_ins.push(ExperimentCheckIn {
            id: check_in_id,
            date: Utc::now(),
            note,
            status,
        });
        self.persist();
        Ok(())
    }

    /// Finish an experiment, stamping the completion time and keeping the
    /// reflection if one was written. Only active experiments can finish.
    pub fn complete(
        &mut self,
        experiment_id: &str,
        reflection: Option<String>,
    ) -> Result<(), StateError> {
        let experiment = self.transition(experiment_id, ExperimentStatus::Completed)?;
        experiment.completed_at = Some(Utc::now());
        experiment.reflection = reflection;
        self.persist();
        Ok(())
    }

    /// Give up on an experiment. Only active experiments can be abandoned.
    pub fn abandon(
        &mut self,
        experiment_id: &str,
        reflection: Option<String>,
    ) -> Result<(), StateError> {
        let experiment = self.transition(experiment_id, ExperimentStatus::Abandoned)?;
        experiment.reflection = reflection;
        self.persist();
        Ok(())
    }

    /// Pause an active experiment. Pausing a paused experiment is a no-op.
    pub fn pause(&mut self, experiment_id: &str) -> Result<(), StateError> {
        self.transition(experiment_id, ExperimentStatus::Paused)?;
        self.persist();
        Ok(())
    }

    /// Resume a paused experiment. Resuming an active experiment is a no-op.
    pub fn resume(&mut self, experiment_id: &str) -> Result<(), StateError> {
        self.transition(experiment_id, ExperimentStatus::Active)?;
        self.persist();
        Ok(())
    }

    /// Flip whether the experiment shows on the family board.
    pub fn toggle_visibility(&mut self, experiment_id: &str) -> Result<(), StateError> {
        let experiment = self.experiment_mut(experiment_id)?;
        experiment.family_visible = !experiment.family_visible;
        debug!(experiment_id, visible = experiment.family_visible, "toggled visibility");
        self.persist();
        Ok(())
    }

    /// Add a member's reaction, replacing any earlier reaction from the
    /// same member.
    pub fn add_reaction(
        &mut self,
        experiment_id: &str,
        member_id: String,
        emoji: String,
    ) -> Result<(), StateError> {
        let experiment = self.experiment_mut(experiment_id)?;
        experiment.reactions.retain(|r| r.member_id != member_id);
        experiment.reactions.push(Reaction {
            member_id,
            emoji,
            reacted_at: Utc::now(),
        });
        self.persist();
        Ok(())
    }

    /// Validate a lifecycle move and return the experiment for stamping.
    ///
    /// `Active → {Completed, Paused, Abandoned}` and `Paused → Active` are
    /// the real moves; pause-while-paused and resume-while-active pass
    /// through as idempotent overwrites.
    fn transition(
        &mut self,
        experiment_id: &str,
        to: ExperimentStatus,
    ) -> Result<&mut Experiment, StateError> {
        let experiment = self.experiment_mut(experiment_id)?;
        let from = experiment.status;
        let allowed = match (from, to) {
            (ExperimentStatus::Active, _) => true,
            (ExperimentStatus::Paused, ExperimentStatus::Active) => true,
            (ExperimentStatus::Paused, ExperimentStatus::Paused) => true,
            _ => false,
        };
        if !allowed {
            return Err(StateError::InvalidExperimentTransition {
                id: experiment_id.to_string(),
                from,
                to,
            });
        }
        experiment.status = to;
        Ok(experiment)
    }

    fn experiment_mut(&mut self, experiment_id: &str) -> Result<&mut Experiment, StateError> {
        self.experiments
            .iter_mut()
            .find(|e| e.id == experiment_id)
            .ok_or_else(|| StateError::ExperimentNotFound(experiment_id.to_string()))
    }

    // --- accessors ---

    /// Look up an experiment by id.
    pub fn experiment(&self, experiment_id: &str) -> Option<&Experiment> {
        self.experiments.iter().find(|e| e.id == experiment_id)
    }

    /// All experiments in creation order.
    pub fn experiments(&self) -> &[Experiment] {
        &self.experiments
    }

    /// Experiments still running.
    pub fn active(&self) -> Vec<&Experiment> {
        self.experiments
            .iter()
            .filter(|e| e.status == ExperimentStatus::Active)
            .collect()
    }

    /// Experiments that finished.
    pub fn completed(&self) -> Vec<&Experiment> {
        self.experiments
            .iter()
            .filter(|e| e.status == ExperimentStatus::Completed)
            .collect()
    }

    /// Active experiments shown on the family board.
    pub fn family_visible(&self) -> Vec<&Experiment> {
        self.experiments
            .iter()
            .filter(|e| e.family_visible && e.status == ExperimentStatus::Active)
            .collect()
    }

    /// Every experiment owned by one member.
    pub fn member_experiments(&self, member_id: &str) -> Vec<&Experiment> {
        self.experiments
            .iter()
            .filter(|e| e.member_id == member_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn tracker() -> ExperimentTracker {
        ExperimentTracker::new(Storage::new(Arc::new(MemoryStore::new())))
    }

    fn draft(member_id: &str, is_family: bool) -> NewExperiment {
        NewExperiment {
            member_id: member_id.to_string(),
            title: "30 days of drawing".to_string(),
            description: Some("one sketch a day".to_string()),
            duration_days: 30,
            check_in_frequency: CheckInFrequency::Daily,
            is_family,
        }
    }

    #[test]
    fn create_starts_active_with_family_visibility_from_flag() {
        let mut tracker = tracker();
        let personal = tracker.create(draft("wyatt", false));
        let family = tracker.create(draft("dad", true));

        assert_eq!(tracker.experiment(&personal).unwrap().status, ExperimentStatus::Active);
        assert!(!tracker.experiment(&personal).unwrap().family_visible);
        assert!(tracker.experiment(&family).unwrap().family_visible);
        assert_eq!(tracker.family_visible().len(), 1);
    }

    #[test]
    fn check_in_requires_active_status() {
        let mut tracker = tracker();
        let id = tracker.create(draft("mom", false));
        tracker.check_in(&id, CheckInStatus::Going, Some("easy so far".into())).unwrap();

        tracker.pause(&id).unwrap();
        let err = tracker.check_in(&id, CheckInStatus::Struggling, None).unwrap_err();
        assert!(matches!(err, StateError::ExperimentNotActive { .. }));
        assert_eq!(tracker.experiment(&id).unwrap().check_ins.len(), 1);
    }

    #[test]
    fn pause_and_resume_round_trip_without_losing_check_ins() {
        let mut tracker = tracker();
        let id = tracker.create(draft("eleanor", false));
        tracker.check_in(&id, CheckInStatus::Going, None).unwrap();

        tracker.pause(&id).unwrap();
        tracker.pause(&id).unwrap();
        assert_eq!(tracker.experiment(&id).unwrap().status, ExperimentStatus::Paused);

        tracker.resume(&id).unwrap();
        tracker.resume(&id).unwrap();
        let experiment = tracker.experiment(&id).unwrap();
        assert_eq!(experiment.status, ExperimentStatus::Active);
        assert_eq!(experiment.check_ins.len(), 1);
    }

    #[test]
    fn complete_stamps_time_and_keeps_reflection() {
        let mut tracker = tracker();
        let id = tracker.create(draft("dad", false));
        tracker.complete(&id, Some("harder than it looked".into())).unwrap();

        let experiment = tracker.experiment(&id).unwrap();
        assert_eq!(experiment.status, ExperimentStatus::Completed);
        assert!(experiment.completed_at.is_some());
        assert_eq!(experiment.reflection.as_deref(), Some("harder than it looked"));
        assert_eq!(tracker.completed().len(), 1);
        assert!(tracker.active().is_empty());
    }

    #[test]
    fn terminal_experiments_reject_further_transitions() {
        let mut tracker = tracker();
        let id = tracker.create(draft("mom", false));
        tracker.abandon(&id, None).unwrap();

        assert!(matches!(
            tracker.resume(&id),
            Err(StateError::InvalidExperimentTransition { .. })
        ));
        assert!(matches!(
            tracker.complete(&id, None),
            Err(StateError::InvalidExperimentTransition { .. })
        ));
        assert_eq!(tracker.experiment(&id).unwrap().status, ExperimentStatus::Abandoned);
    }

    #[test]
    fn one_reaction_per_member_last_write_wins() {
        let mut tracker = tracker();
        let id = tracker.create(draft("wyatt", true));
        tracker.add_reaction(&id, "mom".into(), "🎉".into()).unwrap();
        tracker.add_reaction(&id, "mom".into(), "💪".into()).unwrap();
        tracker.add_reaction(&id, "dad".into(), "🔥".into()).unwrap();

        let reactions = &tracker.experiment(&id).unwrap().reactions;
        assert_eq!(reactions.len(), 2);
        assert_eq!(reactions[0].emoji, "💪");
    }

    #[test]
    fn paused_family_experiment_leaves_the_family_board() {
        let mut tracker = tracker();
        let id = tracker.create(draft("dad", true));
        assert_eq!(tracker.family_visible().len(), 1);
        tracker.pause(&id).unwrap();
        assert!(tracker.family_visible().is_empty());
    }

    #[test]
    fn tracker_round_trips_through_storage() {
        let storage = Storage::new(Arc::new(MemoryStore::new()));
        let mut tracker = ExperimentTracker::new(storage.clone());
        let id = tracker.create(draft("eleanor", false));
        tracker.check_in(&id, CheckInStatus::Going, None).unwrap();

        let mut again = ExperimentTracker::new(storage);
        again.hydrate();
        assert_eq!(again.experiments(), tracker.experiments());
        assert_eq!(again.member_experiments("eleanor").len(), 1);
    }
}
