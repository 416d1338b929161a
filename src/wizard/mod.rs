//! The registration wizard: record model, step gating, merge derivations,
//! controller, and the async manager façade.

pub mod controller;
pub mod gate;
pub mod manager;
pub mod merge;
pub mod model;
pub mod step;

pub use controller::WizardController;
pub use gate::can_reach;
pub use manager::{RegistrationManager, StepStatus, WizardStatus};
pub use merge::apply_patch;
pub use model::{
    AttachmentRef, DaySchedule, Location, LocationSchedule, RecordPatch, RegistrationRecord,
    TimeRange,
};
pub use step::Step;
