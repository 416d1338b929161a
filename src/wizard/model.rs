//! Registration record and schedule data models.

use chrono::{NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::WEEK;

/// Reference to an uploaded attachment (resume, profile picture, license
/// document). The wizard only tracks the reference; storage is external.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttachmentRef {
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// A named place of practice.
///
/// The id is assigned once at creation and never reused; schedules reference
/// locations by this id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub address: String,
}

impl Location {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
        }
    }
}

/// A wall-clock time window.
///
/// No start < end ordering is enforced; overnight or inverted windows are
/// accepted as entered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Build a range from hour/minute literals.
    pub fn from_hm(start: (u32, u32), end: (u32, u32)) -> Self {
        Self {
            start: hm(start.0, start.1),
            end: hm(end.0, end.1),
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid wall-clock time")
}

/// Availability and working windows for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Weekday,
    pub available: bool,
    pub work_hours: TimeRange,
    pub break_time: TimeRange,
    pub online_consult_hours: TimeRange,
}

impl DaySchedule {
    /// The default entry seeded for a freshly added location: unavailable,
    /// work 09:00–17:00, break 13:00–14:00, online consult 18:00–20:00.
    pub fn seeded(day: Weekday) -> Self {
        Self {
            day,
            available: false,
            work_hours: TimeRange::from_hm((9, 0), (17, 0)),
            break_time: TimeRange::from_hm((13, 0), (14, 0)),
            online_consult_hours: TimeRange::from_hm((18, 0), (20, 0)),
        }
    }
}

/// Weekly availability for one location: exactly one entry per calendar day,
/// Monday first, present regardless of the availability flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationSchedule {
    pub location_id: Uuid,
    pub days: [DaySchedule; 7],
}

impl LocationSchedule {
    /// Seed a full week of unavailable days for a new location.
    pub fn seeded(location_id: Uuid) -> Self {
        Self {
            location_id,
            days: WEEK.map(DaySchedule::seeded),
        }
    }

    /// Whether any day of the week is marked available.
    pub fn has_available_day(&self) -> bool {
        self.days.iter().any(|d| d.available)
    }

    /// Mutable access to one day's entry.
    pub fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        // WEEK covers every weekday exactly once, so the entry exists.
        self.days
            .iter_mut()
            .find(|d| d.day == day)
            .expect("schedule holds all seven days")
    }
}

/// The in-progress registration record, grouped by wizard step.
///
/// Created empty at wizard start, mutated only through the merge-update
/// path, discarded on reset or successful submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationRecord {
    // Step 1: personal information
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub languages: Vec<String>,
    pub mobile: String,
    pub mobile_verified: bool,
    pub resume: Option<AttachmentRef>,
    pub profile_picture: Option<AttachmentRef>,
    pub bio: String,
    pub awards: Vec<String>,

    // Step 2: contact information
    /// Auto-filled from `mobile` the first time one is supplied; user edits
    /// afterwards are never overridden.
    pub phone: String,
    pub email: String,
    pub locations: Vec<Location>,

    // Step 3: education and credentials
    pub highest_degree: String,
    pub institution: String,
    pub license_number: String,
    pub issuing_authority: String,
    pub license_document: Option<AttachmentRef>,
    pub license_expiry: Option<NaiveDate>,

    // Step 4: specialization
    pub specialty: String,
    pub services: Vec<String>,

    // Step 5: availability, one schedule per location
    pub schedules: Vec<LocationSchedule>,

    // Step 6: charges and payment
    pub visit_charge: Decimal,
    pub online_charge: Decimal,
    pub payment_methods: Vec<String>,
}

impl RegistrationRecord {
    /// The schedule paired with a location, if present.
    pub fn schedule_for(&self, location_id: Uuid) -> Option<&LocationSchedule> {
        self.schedules.iter().find(|s| s.location_id == location_id)
    }

    /// Mutable counterpart of [`schedule_for`](Self::schedule_for).
    pub fn schedule_for_mut(&mut self, location_id: Uuid) -> Option<&mut LocationSchedule> {
        self.schedules
            .iter_mut()
            .find(|s| s.location_id == location_id)
    }
}

/// A partial update to the registration record.
///
/// Every field is optional; `None` means "leave untouched". Set-valued
/// fields are full replacements, not unions. Unknown fields in incoming
/// JSON are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<AttachmentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<AttachmentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awards: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuing_authority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_document: Option<AttachmentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_expiry: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedules: Option<Vec<LocationSchedule>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_charge: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_charge: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<String>>,
}
