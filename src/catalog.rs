//! Static reference catalogs consumed by the wizard.
//!
//! The wizard never mutates these; they are externally supplied data the
//! specialty/service invariant is enforced against. [`Catalogs::default`]
//! ships the production data set.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// The calendar week in display order, Monday first.
///
/// Every [`LocationSchedule`](crate::wizard::LocationSchedule) carries exactly
/// one day entry per element of this list, in this order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One specialty and the services that may be offered under it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Specialty {
    pub name: String,
    pub services: Vec<String>,
}

/// Read-only reference data for the registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogs {
    pub languages: Vec<String>,
    pub specialties: Vec<Specialty>,
    pub payment_methods: Vec<String>,
}

impl Catalogs {
    /// Look up the service list for a specialty name, if it exists.
    pub fn services_for(&self, specialty: &str) -> Option<&[String]> {
        self.specialties
            .iter()
            .find(|s| s.name == specialty)
            .map(|s| s.services.as_slice())
    }

    /// Whether `name` is a known specialty.
    pub fn has_specialty(&self, name: &str) -> bool {
        self.specialties.iter().any(|s| s.name == name)
    }
}

fn specialty(name: &str, services: &[&str]) -> Specialty {
    Specialty {
        name: name.to_string(),
        services: services.iter().map(|s| s.to_string()).collect(),
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self {
            languages: [
                "English",
                "Hindi",
                "Bengali",
                "Telugu",
                "Marathi",
                "Tamil",
                "Gujarati",
                "Urdu",
                "Kannada",
                "Odia",
                "Malayalam",
                "Punjabi",
                "Assamese",
                "Sanskrit",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            specialties: vec![
                specialty(
                    "Cardiology",
                    &[
                        "ECG/EKG",
                        "Echocardiogram",
                        "Stress Testing",
                        "Cardiac Catheterization",
                        "Angioplasty",
                        "Pacemaker Insertion",
                        "Heart Surgery Consultation",
                    ],
                ),
                specialty(
                    "Dermatology",
                    &[
                        "Skin Cancer Screening",
                        "Acne Treatment",
                        "Eczema Treatment",
                        "Psoriasis Treatment",
                        "Cosmetic Procedures",
                        "Mole Removal",
                        "Chemical Peels",
                    ],
                ),
                specialty(
                    "Endocrinology",
                    &[
                        "Diabetes Management",
                        "Thyroid Disorders",
                        "Hormone Therapy",
                        "Osteoporosis Treatment",
                        "Adrenal Disorders",
                        "Metabolic Disorders",
                    ],
                ),
                specialty(
                    "Gastroenterology",
                    &[
                        "Endoscopy",
                        "Colonoscopy",
                        "IBS Treatment",
                        "Liver Disease Management",
                        "Acid Reflux Treatment",
                        "Inflammatory Bowel Disease",
                        "Hepatitis Treatment",
                    ],
                ),
                specialty(
                    "General Medicine",
                    &[
                        "General Checkup",
                        "Vaccination",
                        "Health Screening",
                        "Chronic Disease Management",
                        "Preventive Care",
                        "Minor Surgery",
                        "Health Counseling",
                    ],
                ),
                specialty(
                    "Neurology",
                    &[
                        "EEG",
                        "MRI Interpretation",
                        "Stroke Treatment",
                        "Epilepsy Management",
                        "Headache Treatment",
                        "Parkinson's Disease",
                        "Multiple Sclerosis",
                    ],
                ),
                specialty(
                    "Oncology",
                    &[
                        "Cancer Screening",
                        "Chemotherapy",
                        "Radiation Therapy Consultation",
                        "Tumor Biopsy",
                        "Cancer Surgery Consultation",
                        "Palliative Care",
                    ],
                ),
                specialty(
                    "Orthopedics",
                    &[
                        "Joint Replacement",
                        "Fracture Treatment",
                        "Sports Injury",
                        "Arthritis Treatment",
                        "Spine Surgery",
                        "Physical Therapy",
                        "Bone Surgery",
                    ],
                ),
                specialty(
                    "Pediatrics",
                    &[
                        "Child Health Checkup",
                        "Vaccination",
                        "Growth Monitoring",
                        "Developmental Assessment",
                        "Pediatric Surgery Consultation",
                        "Allergy Testing",
                        "Behavioral Assessment",
                    ],
                ),
                specialty(
                    "Psychiatry",
                    &[
                        "Mental Health Assessment",
                        "Therapy Sessions",
                        "Medication Management",
                        "Addiction Treatment",
                        "Anxiety Treatment",
                        "Depression Treatment",
                        "PTSD Treatment",
                    ],
                ),
                specialty(
                    "Pulmonology",
                    &[
                        "Pulmonary Function Test",
                        "Bronchoscopy",
                        "Asthma Treatment",
                        "COPD Management",
                        "Sleep Study",
                        "Lung Cancer Screening",
                        "Respiratory Therapy",
                    ],
                ),
                specialty(
                    "Radiology",
                    &[
                        "X-Ray",
                        "CT Scan",
                        "MRI",
                        "Ultrasound",
                        "Mammography",
                        "PET Scan",
                        "Image Interpretation",
                    ],
                ),
                specialty(
                    "Surgery",
                    &[
                        "General Surgery",
                        "Laparoscopic Surgery",
                        "Emergency Surgery",
                        "Surgical Consultation",
                        "Pre-operative Assessment",
                        "Post-operative Care",
                        "Minimally Invasive Surgery",
                    ],
                ),
            ],
            payment_methods: ["GPay", "Paytm", "PhonePe", "Net Banking", "UPI"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalogs_are_populated() {
        let c = Catalogs::default();
        assert_eq!(c.languages.len(), 14);
        assert_eq!(c.specialties.len(), 13);
        assert_eq!(c.payment_methods.len(), 5);
    }

    #[test]
    fn services_lookup() {
        let c = Catalogs::default();
        let cardio = c.services_for("Cardiology").unwrap();
        assert!(cardio.contains(&"ECG/EKG".to_string()));
        assert!(c.services_for("Alchemy").is_none());
        assert!(c.has_specialty("Dermatology"));
        assert!(!c.has_specialty(""));
    }

    #[test]
    fn week_is_monday_first_and_complete() {
        assert_eq!(WEEK.len(), 7);
        assert_eq!(WEEK[0], Weekday::Mon);
        assert_eq!(WEEK[6], Weekday::Sun);
        // No duplicates
        for (i, a) in WEEK.iter().enumerate() {
            for b in &WEEK[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
