//! Step gates — pure reachability predicates over the registration record.
//!
//! Each step's gate checks only the fields the *previous* step collects, so
//! the chain is one-hop: forward navigation through consecutive steps walks
//! the full sequence, but a direct jump is not re-verified transitively.
//! Gating is advisory; the controller never raises for an unmet gate.

use rust_decimal::Decimal;

use super::model::RegistrationRecord;
use super::step::Step;

/// Whether `step` is reachable given the current record.
pub fn can_reach(record: &RegistrationRecord, step: Step) -> bool {
    match step {
        Step::PersonalInfo => true,
        Step::ContactInfo => {
            !record.first_name.is_empty()
                && !record.last_name.is_empty()
                && !record.mobile.is_empty()
                && record.mobile_verified
        }
        Step::Education => !record.email.is_empty() && !record.locations.is_empty(),
        Step::Specialization => {
            !record.highest_degree.is_empty()
                && !record.institution.is_empty()
                && !record.license_number.is_empty()
        }
        Step::Availability => !record.specialty.is_empty() && !record.services.is_empty(),
        Step::Charges => record.schedules.iter().any(|s| s.has_available_day()),
        Step::Review => {
            record.visit_charge > Decimal::ZERO
                && record.online_charge > Decimal::ZERO
                && !record.payment_methods.is_empty()
        }
    }
}
