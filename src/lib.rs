//! medreg — multi-step professional-registration wizard core.

pub mod catalog;
pub mod config;
pub mod error;
pub mod submission;
pub mod verification;
pub mod wizard;
