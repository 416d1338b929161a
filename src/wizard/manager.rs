//! RegistrationManager — async façade over the wizard controller plus the
//! verification and submission service boundaries.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::catalog::Catalogs;
use crate::config::WizardConfig;
use crate::error::{SubmissionError, VerificationError, WizardError};
use crate::submission::{SubmissionReceipt, SubmissionService};
use crate::verification::VerificationService;

use super::controller::WizardController;
use super::model::{RecordPatch, RegistrationRecord};
use super::step::Step;

/// Per-step reachability, for the progress sidebar.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StepStatus {
    pub step: Step,
    pub title: &'static str,
    pub reachable: bool,
    pub current: bool,
}

/// Snapshot of the whole wizard for the presentation layer.
#[derive(Debug, Clone, serde::Serialize)]
pub struct WizardStatus {
    pub step: Step,
    pub steps: Vec<StepStatus>,
    pub record: RegistrationRecord,
}

/// Coordinates the wizard state machine with the external verification and
/// submission services. One instance per registration session; injected
/// explicitly into the presentation layer, never a global.
pub struct RegistrationManager {
    controller: Arc<RwLock<WizardController>>,
    verifier: Arc<dyn VerificationService>,
    gateway: Arc<dyn SubmissionService>,
    config: WizardConfig,
    /// Phase flag of the two-phase verification handshake.
    code_sent: RwLock<bool>,
}

impl RegistrationManager {
    pub fn new(
        catalogs: Arc<Catalogs>,
        config: WizardConfig,
        verifier: Arc<dyn VerificationService>,
        gateway: Arc<dyn SubmissionService>,
    ) -> Self {
        Self {
            controller: Arc::new(RwLock::new(WizardController::new(catalogs))),
            verifier,
            gateway,
            config,
            code_sent: RwLock::new(false),
        }
    }

    /// The step currently shown.
    pub async fn current_step(&self) -> Step {
        self.controller.read().await.step()
    }

    /// Snapshot of the current record.
    pub async fn record(&self) -> RegistrationRecord {
        self.controller.read().await.record().clone()
    }

    /// Whether `step` is reachable right now.
    pub async fn can_reach(&self, step: Step) -> bool {
        self.controller.read().await.can_reach(step)
    }

    /// Full wizard snapshot for rendering.
    pub async fn status(&self) -> WizardStatus {
        let controller = self.controller.read().await;
        let current = controller.step();
        WizardStatus {
            step: current,
            steps: Step::ALL
                .iter()
                .map(|&step| StepStatus {
                    step,
                    title: step.title(),
                    reachable: controller.can_reach(step),
                    current: step == current,
                })
                .collect(),
            record: controller.record().clone(),
        }
    }

    /// Navigate to a 1-based step number. See
    /// [`WizardController::go_to_step`] for the gating contract.
    pub async fn go_to_step(&self, target: usize) -> Result<Step, WizardError> {
        self.controller.write().await.go_to_step(target)
    }

    /// Merge a partial update into the record.
    pub async fn merge_update(&self, patch: RecordPatch) {
        self.controller.write().await.merge_update(patch);
    }

    /// Remove a location and its schedule atomically.
    pub async fn remove_location(&self, location_id: Uuid) -> bool {
        self.controller.write().await.remove_location(location_id)
    }

    /// Discard the session: empty record, back to step 1, handshake cleared.
    pub async fn reset(&self) {
        self.controller.write().await.reset();
        *self.code_sent.write().await = false;
    }

    /// Phase 1 of the verification handshake: send a one-time code to the
    /// record's mobile identifier.
    pub async fn send_verification_code(&self) -> Result<(), VerificationError> {
        let mobile = self.controller.read().await.record().mobile.clone();
        if mobile.len() != self.config.mobile_digits || !mobile.chars().all(|c| c.is_ascii_digit())
        {
            return Err(VerificationError::InvalidMobile {
                mobile,
                expected: self.config.mobile_digits,
            });
        }
        self.verifier.send_code(&mobile).await.map_err(|e| {
            tracing::warn!(%mobile, error = %e, "failed to send verification code");
            e
        })?;
        *self.code_sent.write().await = true;
        tracing::info!(%mobile, "verification code sent");
        Ok(())
    }

    /// Phase 2: check an entered code and, on a match, mark the mobile
    /// identifier verified on the record.
    ///
    /// `Ok(false)` means the service rejected the code; the handshake stays
    /// open for another attempt.
    pub async fn verify_code(&self, code: &str) -> Result<bool, VerificationError> {
        if code.len() != self.config.code_digits || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(VerificationError::InvalidCodeLength {
                got: code.len(),
                expected: self.config.code_digits,
            });
        }
        if !*self.code_sent.read().await {
            return Err(VerificationError::CodeNotSent);
        }
        let mobile = self.controller.read().await.record().mobile.clone();
        let matched = self.verifier.check_code(&mobile, code).await?;
        if matched {
            self.merge_update(RecordPatch {
                mobile_verified: Some(true),
                ..Default::default()
            })
            .await;
            *self.code_sent.write().await = false;
            tracing::info!(%mobile, "mobile identifier verified");
        }
        Ok(matched)
    }

    /// Submit the registration from the review step.
    ///
    /// On success the session is reset; on failure the record is left intact
    /// so the user can retry without re-entering data.
    pub async fn submit(&self) -> Result<SubmissionReceipt, SubmissionError> {
        let record = {
            let controller = self.controller.read().await;
            if !controller.step().is_review() {
                return Err(SubmissionError::NotAtReview);
            }
            controller.record().clone()
        };
        match self.gateway.submit(&record).await {
            Ok(receipt) => {
                tracing::info!(reference = %receipt.reference, "registration submitted");
                self.reset().await;
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(error = %e, "submission failed; record retained for retry");
                Err(e)
            }
        }
    }
}
