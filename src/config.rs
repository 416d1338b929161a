//! Configuration types.

/// Wizard configuration.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// Required length of a mobile identifier before a code can be sent.
    pub mobile_digits: usize,
    /// Required length of a one-time verification code.
    pub code_digits: usize,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            mobile_digits: 10,
            code_digits: 6,
        }
    }
}
