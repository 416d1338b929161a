use std::sync::Arc;
use std::time::Duration;

use rust_decimal_macros::dec;

use medreg::catalog::Catalogs;
use medreg::config::WizardConfig;
use medreg::submission::SimulatedGateway;
use medreg::verification::SimulatedVerifier;
use medreg::wizard::{Location, RecordPatch, RegistrationManager, Step};

/// Walk a complete scripted registration through all seven steps with the
/// simulated service boundaries, printing gate state along the way.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    eprintln!("medreg v{} — registration wizard demo", env!("CARGO_PKG_VERSION"));

    let verifier = Arc::new(SimulatedVerifier::new());
    let manager = RegistrationManager::new(
        Arc::new(Catalogs::default()),
        WizardConfig::default(),
        verifier.clone(),
        Arc::new(SimulatedGateway::new(Duration::from_secs(2))),
    );

    // Step 1: personal information + mobile verification handshake.
    manager
        .merge_update(RecordPatch {
            first_name: Some("Asha".into()),
            last_name: Some("Rao".into()),
            languages: Some(vec!["English".into(), "Hindi".into()]),
            mobile: Some("9000000001".into()),
            bio: Some("Consultant cardiologist, 12 years of practice.".into()),
            ..Default::default()
        })
        .await;
    manager.send_verification_code().await?;
    let code = verifier
        .last_code()
        .await
        .ok_or_else(|| anyhow::anyhow!("verifier issued no code"))?;
    anyhow::ensure!(manager.verify_code(&code).await?, "code rejected");
    advance(&manager, Step::ContactInfo).await?;

    // Step 2: contact details; the phone field was auto-filled already.
    let clinic = Location::new("City Clinic", "12 Main St");
    manager
        .merge_update(RecordPatch {
            email: Some("asha.rao@example.com".into()),
            locations: Some(vec![clinic.clone()]),
            ..Default::default()
        })
        .await;
    advance(&manager, Step::Education).await?;

    // Step 3: credentials.
    manager
        .merge_update(RecordPatch {
            highest_degree: Some("DM Cardiology".into()),
            institution: Some("AIIMS New Delhi".into()),
            license_number: Some("MH-2013-48291".into()),
            issuing_authority: Some("Maharashtra Medical Council".into()),
            ..Default::default()
        })
        .await;
    advance(&manager, Step::Specialization).await?;

    // Step 4: specialty and services.
    manager
        .merge_update(RecordPatch {
            specialty: Some("Cardiology".into()),
            services: Some(vec!["ECG/EKG".into(), "Echocardiogram".into()]),
            ..Default::default()
        })
        .await;
    advance(&manager, Step::Availability).await?;

    // Step 5: open Monday at the seeded clinic schedule.
    let mut schedules = manager.record().await.schedules;
    schedules[0].day_mut(chrono::Weekday::Mon).available = true;
    manager
        .merge_update(RecordPatch {
            schedules: Some(schedules),
            ..Default::default()
        })
        .await;
    advance(&manager, Step::Charges).await?;

    // Step 6: charges and payment.
    manager
        .merge_update(RecordPatch {
            visit_charge: Some(dec!(800)),
            online_charge: Some(dec!(500)),
            payment_methods: Some(vec!["UPI".into(), "Net Banking".into()]),
            ..Default::default()
        })
        .await;
    advance(&manager, Step::Review).await?;

    // Step 7: review and submit.
    let receipt = manager.submit().await?;
    eprintln!(
        "submitted: reference {} at {}",
        receipt.reference, receipt.submitted_at
    );
    assert_eq!(manager.current_step().await, Step::PersonalInfo);

    Ok(())
}

/// Confirm the gate for `next` and navigate to it.
async fn advance(manager: &RegistrationManager, next: Step) -> anyhow::Result<()> {
    anyhow::ensure!(
        manager.can_reach(next).await,
        "gate for {next} not satisfied"
    );
    manager.go_to_step(next.index()).await?;
    eprintln!("→ {} ({})", next.title(), next.index());
    Ok(())
}
