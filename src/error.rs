//! Error types for the registration wizard core.

/// Top-level error type for the wizard.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("Verification error: {0}")]
    Verification(#[from] VerificationError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}

/// Navigation and state errors.
///
/// Step gating is deliberately *not* an error: "not ready yet" is reported
/// through the `can_reach` predicate, never raised.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Invalid step {target}: steps are numbered 1 through {max}")]
    InvalidStep { target: usize, max: usize },
}

/// Mobile-verification errors.
#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("Mobile identifier {mobile:?} is not a {expected}-digit number")]
    InvalidMobile { mobile: String, expected: usize },

    #[error("Code must be exactly {expected} digits, got {got}")]
    InvalidCodeLength { got: usize, expected: usize },

    #[error("No code has been sent for this identifier")]
    CodeNotSent,

    #[error("Verification service failed: {0}")]
    ServiceFailed(String),
}

/// Submission errors.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Submission is only allowed from the review step")]
    NotAtReview,

    #[error("Submission rejected: {reason}")]
    Rejected { reason: String },

    #[error("Submission service failed: {0}")]
    ServiceFailed(String),
}

/// Result type alias for the wizard.
pub type Result<T> = std::result::Result<T, Error>;
