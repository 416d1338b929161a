//! Wizard step enumeration — the seven ordered stages of registration.

use serde::{Deserialize, Serialize};

use crate::error::WizardError;

/// The ordered steps of the registration wizard.
///
/// Progresses linearly: PersonalInfo → ContactInfo → Education →
/// Specialization → Availability → Charges → Review. Steps are numbered
/// 1-based for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    PersonalInfo,
    ContactInfo,
    Education,
    Specialization,
    Availability,
    Charges,
    Review,
}

impl Step {
    /// All steps in wizard order.
    pub const ALL: [Step; 7] = [
        Step::PersonalInfo,
        Step::ContactInfo,
        Step::Education,
        Step::Specialization,
        Step::Availability,
        Step::Charges,
        Step::Review,
    ];

    /// Number of steps in the wizard.
    pub const COUNT: usize = Self::ALL.len();

    /// 1-based index of this step.
    pub fn index(&self) -> usize {
        *self as usize + 1
    }

    /// Resolve a 1-based index; out-of-range indices are signaled.
    pub fn from_index(index: usize) -> Result<Step, WizardError> {
        if index == 0 || index > Self::COUNT {
            return Err(WizardError::InvalidStep {
                target: index,
                max: Self::COUNT,
            });
        }
        Ok(Self::ALL[index - 1])
    }

    /// The next step in the linear progression, if any.
    pub fn next(&self) -> Option<Step> {
        Self::ALL.get(self.index()).copied()
    }

    /// The previous step, if any.
    pub fn prev(&self) -> Option<Step> {
        let i = self.index();
        if i > 1 { Some(Self::ALL[i - 2]) } else { None }
    }

    /// Whether this step is the terminal review step.
    pub fn is_review(&self) -> bool {
        matches!(self, Self::Review)
    }

    /// Human-readable title shown in the progress sidebar.
    pub fn title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::ContactInfo => "Contact Information",
            Self::Education => "Education & Qualifications",
            Self::Specialization => "Specialization",
            Self::Availability => "Availability",
            Self::Charges => "Charges & Payment",
            Self::Review => "Review & Submit",
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::PersonalInfo
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PersonalInfo => "personal_info",
            Self::ContactInfo => "contact_info",
            Self::Education => "education",
            Self::Specialization => "specialization",
            Self::Availability => "availability",
            Self::Charges => "charges",
            Self::Review => "review",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_one_based_and_stable() {
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.index(), i + 1);
            assert_eq!(Step::from_index(i + 1).unwrap(), *step);
        }
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        assert!(matches!(
            Step::from_index(0),
            Err(WizardError::InvalidStep { target: 0, max: 7 })
        ));
        assert!(matches!(
            Step::from_index(8),
            Err(WizardError::InvalidStep { target: 8, max: 7 })
        ));
        assert!(Step::from_index(99).is_err());
    }

    #[test]
    fn next_walks_all_steps() {
        let mut current = Step::PersonalInfo;
        for expected in &Step::ALL[1..] {
            let next = current.next().unwrap();
            assert_eq!(next, *expected);
            current = next;
        }
        assert!(current.next().is_none());
        assert!(current.is_review());
    }

    #[test]
    fn prev_walks_backward() {
        assert!(Step::PersonalInfo.prev().is_none());
        assert_eq!(Step::Review.prev(), Some(Step::Charges));
        assert_eq!(Step::ContactInfo.prev(), Some(Step::PersonalInfo));
    }

    #[test]
    fn display_matches_serde() {
        for step in Step::ALL {
            let display = format!("{step}");
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(format!("\"{display}\""), json);
        }
    }

    #[test]
    fn ordering_follows_wizard_order() {
        assert!(Step::PersonalInfo < Step::Review);
        assert!(Step::Availability < Step::Charges);
    }
}
