//! Merge-update path: shallow patch application plus derived-field rules.
//!
//! Pure functions over `(old record, patch) -> new record`, decoupled from
//! the controller so the derivation rules are testable in isolation.
//!
//! Three derivations run as part of every merge, in order:
//! 1. phone auto-fill — the first supplied mobile identifier is copied into
//!    the empty phone field, once;
//! 2. schedule seeding — every newly introduced location gets a full week of
//!    unavailable days with default windows; additive, never destructive;
//! 3. specialty hygiene — changing specialty clears the selected services
//!    unless the patch carries its own list, and services are always kept a
//!    subset of the current specialty's catalog entry.

use crate::catalog::Catalogs;

use super::model::{LocationSchedule, RecordPatch, RegistrationRecord};

macro_rules! merge_field {
    ($record:ident, $patch:ident, $($field:ident),+ $(,)?) => {
        $(if let Some(value) = $patch.$field {
            $record.$field = value;
        })+
    };
}

/// Apply a partial update atomically and return the new record snapshot.
///
/// Unknown/absent fields leave the record untouched; set-valued fields are
/// full replacements. Never fails: a patch the record cannot use is simply
/// ignored.
pub fn apply_patch(
    record: &RegistrationRecord,
    patch: RecordPatch,
    catalogs: &Catalogs,
) -> RegistrationRecord {
    let mut next = record.clone();

    let patched_mobile = patch.mobile.is_some();
    let patched_services = patch.services.is_some();

    merge_field!(
        next, patch,
        first_name, last_name, languages, mobile, mobile_verified, bio, awards,
        phone, email, locations,
        highest_degree, institution, license_number, issuing_authority,
        specialty, services,
        schedules,
        visit_charge, online_charge, payment_methods,
    );
    // Option-typed record fields: a patch value replaces, absence keeps.
    if patch.date_of_birth.is_some() {
        next.date_of_birth = patch.date_of_birth;
    }
    if patch.resume.is_some() {
        next.resume = patch.resume;
    }
    if patch.profile_picture.is_some() {
        next.profile_picture = patch.profile_picture;
    }
    if patch.license_document.is_some() {
        next.license_document = patch.license_document;
    }
    if patch.license_expiry.is_some() {
        next.license_expiry = patch.license_expiry;
    }

    autofill_phone(record, &mut next, patched_mobile);
    seed_schedules(&mut next);
    reconcile_services(record, &mut next, patched_services, catalogs);

    next
}

/// Rule 1: copy a newly supplied mobile identifier into the phone field,
/// only while the phone field is still empty. Fires at most once; later
/// mobile changes never override an existing phone value.
fn autofill_phone(old: &RegistrationRecord, next: &mut RegistrationRecord, patched_mobile: bool) {
    if patched_mobile && old.phone.is_empty() && next.phone.is_empty() && !next.mobile.is_empty() {
        next.phone = next.mobile.clone();
        tracing::debug!(phone = %next.phone, "auto-filled phone from mobile identifier");
    }
}

/// Rule 2: append a freshly seeded weekly schedule for every location id
/// that has none yet. Existing schedules are left untouched.
fn seed_schedules(next: &mut RegistrationRecord) {
    let missing: Vec<_> = next
        .locations
        .iter()
        .filter(|loc| next.schedule_for(loc.id).is_none())
        .map(|loc| loc.id)
        .collect();
    for location_id in missing {
        tracing::debug!(%location_id, "seeding default weekly schedule");
        next.schedules.push(LocationSchedule::seeded(location_id));
    }
}

/// Rule 3: keep selected services consistent with the selected specialty.
///
/// A specialty change clears the services unless the same patch supplied a
/// replacement list. Either way the surviving list is filtered down to the
/// current specialty's catalog entry.
fn reconcile_services(
    old: &RegistrationRecord,
    next: &mut RegistrationRecord,
    patched_services: bool,
    catalogs: &Catalogs,
) {
    if next.specialty != old.specialty && !patched_services {
        next.services.clear();
    }
    if next.services.is_empty() {
        return;
    }
    match catalogs.services_for(&next.specialty) {
        Some(available) => next.services.retain(|s| available.contains(s)),
        None => next.services.clear(),
    }
}
