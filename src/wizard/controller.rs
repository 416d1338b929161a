//! Registration wizard controller — owns the in-progress record and the
//! current step.
//!
//! Single-writer, synchronous core: each operation runs to completion as one
//! state transition. The async façade around it lives in
//! [`manager`](super::manager).

use std::sync::Arc;

use uuid::Uuid;

use crate::catalog::Catalogs;
use crate::error::WizardError;

use super::gate;
use super::merge::apply_patch;
use super::model::{RecordPatch, RegistrationRecord};
use super::step::Step;

/// The wizard state machine: current step plus the mutable record.
#[derive(Debug, Clone)]
pub struct WizardController {
    step: Step,
    record: RegistrationRecord,
    catalogs: Arc<Catalogs>,
}

impl WizardController {
    /// Start a fresh wizard at step 1 with an empty record.
    pub fn new(catalogs: Arc<Catalogs>) -> Self {
        Self {
            step: Step::default(),
            record: RegistrationRecord::default(),
            catalogs,
        }
    }

    /// The step currently shown.
    pub fn step(&self) -> Step {
        self.step
    }

    /// The current record snapshot.
    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    /// The reference catalogs this wizard validates against.
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Whether `step` is reachable given the current record.
    ///
    /// Pure read; gating is advisory and checked by the caller before a
    /// forward [`go_to_step`](Self::go_to_step).
    pub fn can_reach(&self, step: Step) -> bool {
        gate::can_reach(&self.record, step)
    }

    /// Navigate to a 1-based step number.
    ///
    /// Out-of-range targets are a no-op signaled with
    /// [`WizardError::InvalidStep`]. In-range targets are taken
    /// unconditionally — moving backward is always allowed, and forward
    /// moves are expected to have been confirmed via
    /// [`can_reach`](Self::can_reach) first.
    pub fn go_to_step(&mut self, target: usize) -> Result<Step, WizardError> {
        let step = Step::from_index(target)?;
        if step != self.step {
            tracing::debug!(from = %self.step, to = %step, "step change");
        }
        self.step = step;
        Ok(step)
    }

    /// Merge a partial update into the record as one atomic transition,
    /// running the derivation rules (phone auto-fill, schedule seeding,
    /// specialty hygiene). Never fails.
    pub fn merge_update(&mut self, patch: RecordPatch) {
        self.record = apply_patch(&self.record, patch, &self.catalogs);
    }

    /// Remove a location and its paired schedule in one transition.
    ///
    /// Returns whether anything was removed; an unknown id is a no-op.
    pub fn remove_location(&mut self, location_id: Uuid) -> bool {
        let before = self.record.locations.len();
        self.record.locations.retain(|l| l.id != location_id);
        self.record.schedules.retain(|s| s.location_id != location_id);
        let removed = self.record.locations.len() != before;
        if removed {
            tracing::debug!(%location_id, "removed location and its schedule");
        }
        removed
    }

    /// Discard everything and return to step 1 with an empty record.
    pub fn reset(&mut self) {
        tracing::debug!("wizard reset");
        self.step = Step::default();
        self.record = RegistrationRecord::default();
    }
}
