//! Final-submission service boundary.
//!
//! Submission is invoked only from the review step. The wizard's sole
//! responsibility around it is to keep the record intact until a success
//! result is observed, so a failed submission can be retried without
//! re-entering data.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SubmissionError;
use crate::wizard::RegistrationRecord;

/// Acknowledgement returned by a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
}

/// External registration-submission service.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    async fn submit(&self, record: &RegistrationRecord)
        -> Result<SubmissionReceipt, SubmissionError>;
}

/// In-memory gateway for demos and tests: accepts every record after an
/// artificial processing delay.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(0))
    }
}

#[async_trait]
impl SubmissionService for SimulatedGateway {
    async fn submit(
        &self,
        record: &RegistrationRecord,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let receipt = SubmissionReceipt {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
        };
        tracing::info!(
            reference = %receipt.reference,
            name = %format!("{} {}", record.first_name, record.last_name),
            "simulated submission accepted"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simulated_gateway_returns_a_receipt() {
        let gw = SimulatedGateway::default();
        let receipt = gw.submit(&RegistrationRecord::default()).await.unwrap();
        assert!(receipt.submitted_at <= Utc::now());
    }
}
