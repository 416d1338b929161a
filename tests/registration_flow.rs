//! End-to-end wizard flow through the manager with simulated services.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Utc, Weekday};
use rust_decimal_macros::dec;
use uuid::Uuid;

use medreg::catalog::Catalogs;
use medreg::config::WizardConfig;
use medreg::error::{SubmissionError, VerificationError};
use medreg::submission::{SimulatedGateway, SubmissionReceipt, SubmissionService};
use medreg::verification::{SimulatedVerifier, VerificationService};
use medreg::wizard::{Location, RecordPatch, RegistrationManager, RegistrationRecord, Step};

fn manager_with(
    verifier: Arc<dyn VerificationService>,
    gateway: Arc<dyn SubmissionService>,
) -> RegistrationManager {
    RegistrationManager::new(
        Arc::new(Catalogs::default()),
        WizardConfig::default(),
        verifier,
        gateway,
    )
}

/// Drive a fresh manager through steps 1–6 so it is ready for review.
async fn fill_to_review(manager: &RegistrationManager, verifier: &SimulatedVerifier) {
    manager
        .merge_update(RecordPatch {
            first_name: Some("Asha".into()),
            last_name: Some("Rao".into()),
            mobile: Some("9000000001".into()),
            ..Default::default()
        })
        .await;
    manager.send_verification_code().await.unwrap();
    let code = verifier.last_code().await.unwrap();
    assert!(manager.verify_code(&code).await.unwrap());
    assert!(manager.can_reach(Step::ContactInfo).await);
    manager.go_to_step(2).await.unwrap();

    let clinic = Location::new("City Clinic", "12 Main St");
    manager
        .merge_update(RecordPatch {
            email: Some("asha@example.com".into()),
            locations: Some(vec![clinic]),
            ..Default::default()
        })
        .await;
    assert!(manager.can_reach(Step::Education).await);
    manager.go_to_step(3).await.unwrap();

    manager
        .merge_update(RecordPatch {
            highest_degree: Some("DM Cardiology".into()),
            institution: Some("AIIMS New Delhi".into()),
            license_number: Some("MH-2013-48291".into()),
            ..Default::default()
        })
        .await;
    assert!(manager.can_reach(Step::Specialization).await);
    manager.go_to_step(4).await.unwrap();

    manager
        .merge_update(RecordPatch {
            specialty: Some("Cardiology".into()),
            services: Some(vec!["ECG/EKG".into()]),
            ..Default::default()
        })
        .await;
    assert!(manager.can_reach(Step::Availability).await);
    manager.go_to_step(5).await.unwrap();

    let mut schedules = manager.record().await.schedules;
    schedules[0].day_mut(Weekday::Mon).available = true;
    manager
        .merge_update(RecordPatch {
            schedules: Some(schedules),
            ..Default::default()
        })
        .await;
    assert!(manager.can_reach(Step::Charges).await);
    manager.go_to_step(6).await.unwrap();

    manager
        .merge_update(RecordPatch {
            visit_charge: Some(dec!(800)),
            online_charge: Some(dec!(500)),
            payment_methods: Some(vec!["UPI".into()]),
            ..Default::default()
        })
        .await;
    assert!(manager.can_reach(Step::Review).await);
    manager.go_to_step(7).await.unwrap();
}

#[tokio::test]
async fn happy_path_submits_and_resets() {
    let verifier = Arc::new(SimulatedVerifier::new());
    let manager = manager_with(
        verifier.clone(),
        Arc::new(SimulatedGateway::new(Duration::from_millis(10))),
    );

    fill_to_review(&manager, &verifier).await;

    // Phone was auto-filled from the verified mobile identifier.
    let record = manager.record().await;
    assert_eq!(record.phone, "9000000001");
    assert!(record.mobile_verified);

    let receipt = manager.submit().await.unwrap();
    assert!(receipt.submitted_at <= Utc::now());

    // Success clears the session.
    assert_eq!(manager.current_step().await, Step::PersonalInfo);
    let record = manager.record().await;
    assert!(record.first_name.is_empty());
    assert!(record.locations.is_empty());
}

/// Gateway that fails until released.
struct FlakyGateway {
    healthy: AtomicBool,
}

#[async_trait]
impl SubmissionService for FlakyGateway {
    async fn submit(
        &self,
        _record: &RegistrationRecord,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        if self.healthy.load(Ordering::SeqCst) {
            Ok(SubmissionReceipt {
                reference: Uuid::new_v4(),
                submitted_at: Utc::now(),
            })
        } else {
            Err(SubmissionError::ServiceFailed("upstream timeout".into()))
        }
    }
}

#[tokio::test]
async fn failed_submission_keeps_the_record_for_retry() {
    let verifier = Arc::new(SimulatedVerifier::new());
    let gateway = Arc::new(FlakyGateway {
        healthy: AtomicBool::new(false),
    });
    let manager = manager_with(verifier.clone(), gateway.clone());

    fill_to_review(&manager, &verifier).await;

    let err = manager.submit().await.unwrap_err();
    assert!(matches!(err, SubmissionError::ServiceFailed(_)));

    // Nothing was discarded: still at review, record intact.
    assert_eq!(manager.current_step().await, Step::Review);
    assert_eq!(manager.record().await.first_name, "Asha");

    // Retry succeeds once the gateway recovers.
    gateway.healthy.store(true, Ordering::SeqCst);
    manager.submit().await.unwrap();
    assert_eq!(manager.current_step().await, Step::PersonalInfo);
}

#[tokio::test]
async fn submit_is_rejected_away_from_review() {
    let verifier = Arc::new(SimulatedVerifier::new());
    let manager = manager_with(verifier, Arc::new(SimulatedGateway::default()));
    let err = manager.submit().await.unwrap_err();
    assert!(matches!(err, SubmissionError::NotAtReview));
}

#[tokio::test]
async fn verification_handshake_enforces_lengths_and_order() {
    let verifier = Arc::new(SimulatedVerifier::new());
    let manager = manager_with(verifier.clone(), Arc::new(SimulatedGateway::default()));

    // No mobile on record yet.
    assert!(matches!(
        manager.send_verification_code().await.unwrap_err(),
        VerificationError::InvalidMobile { .. }
    ));

    manager
        .merge_update(RecordPatch {
            mobile: Some("90000".into()),
            ..Default::default()
        })
        .await;
    assert!(matches!(
        manager.send_verification_code().await.unwrap_err(),
        VerificationError::InvalidMobile { .. }
    ));

    manager
        .merge_update(RecordPatch {
            mobile: Some("9000000001".into()),
            ..Default::default()
        })
        .await;

    // Checking before a code was sent is an error, not a mismatch.
    assert!(matches!(
        manager.verify_code("123456").await.unwrap_err(),
        VerificationError::CodeNotSent
    ));

    manager.send_verification_code().await.unwrap();

    // Malformed codes are rejected before reaching the service.
    assert!(matches!(
        manager.verify_code("12345").await.unwrap_err(),
        VerificationError::InvalidCodeLength { got: 5, .. }
    ));
    assert!(matches!(
        manager.verify_code("12a456").await.unwrap_err(),
        VerificationError::InvalidCodeLength { .. }
    ));

    // A wrong (but well-formed) code is a mismatch, and the handshake stays
    // open for the right one.
    let code = verifier.last_code().await.unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };
    assert!(!manager.verify_code(wrong).await.unwrap());
    assert!(manager.verify_code(&code).await.unwrap());
    assert!(manager.record().await.mobile_verified);
}

#[tokio::test]
async fn remove_location_through_the_manager() {
    let verifier = Arc::new(SimulatedVerifier::new());
    let manager = manager_with(verifier, Arc::new(SimulatedGateway::default()));

    let a = Location::new("City Clinic", "12 Main St");
    let b = Location::new("Lake Hospital", "3 Shore Rd");
    manager
        .merge_update(RecordPatch {
            locations: Some(vec![a.clone(), b.clone()]),
            ..Default::default()
        })
        .await;
    assert_eq!(manager.record().await.schedules.len(), 2);

    assert!(manager.remove_location(a.id).await);
    let record = manager.record().await;
    assert_eq!(record.locations.len(), 1);
    assert!(record.schedule_for(a.id).is_none());
    assert!(!manager.remove_location(a.id).await);
}

#[tokio::test]
async fn status_snapshot_reflects_gates() {
    let verifier = Arc::new(SimulatedVerifier::new());
    let manager = manager_with(verifier, Arc::new(SimulatedGateway::default()));

    let status = manager.status().await;
    assert_eq!(status.step, Step::PersonalInfo);
    assert_eq!(status.steps.len(), 7);
    assert!(status.steps[0].reachable && status.steps[0].current);
    assert!(status.steps[1..].iter().all(|s| !s.reachable));
}
