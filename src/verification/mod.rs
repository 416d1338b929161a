//! Mobile-verification service boundary.
//!
//! The wizard drives a two-phase handshake: phase 1 sends a one-time code to
//! the supplied identifier, phase 2 checks a code the user entered. Code
//! generation, delivery, retry limits, and expiry all belong to the service
//! behind the trait; the wizard only enforces the length constraints and
//! flips the record's verification flag on success.

use async_trait::async_trait;
use rand::Rng;
use tokio::sync::RwLock;

use crate::error::VerificationError;

/// External identity-verification service.
#[async_trait]
pub trait VerificationService: Send + Sync {
    /// Send a one-time code to `mobile`.
    async fn send_code(&self, mobile: &str) -> Result<(), VerificationError>;

    /// Check a code previously sent to `mobile`. `Ok(false)` means the code
    /// did not match; errors are service failures.
    async fn check_code(&self, mobile: &str, code: &str) -> Result<bool, VerificationError>;
}

/// In-memory verifier for demos and tests.
///
/// Generates a random six-digit code per `send_code` call, remembers the
/// last one, and matches against it. Stands in for the SMS gateway the same
/// way production stubs do.
#[derive(Debug, Default)]
pub struct SimulatedVerifier {
    last: RwLock<Option<(String, String)>>,
}

impl SimulatedVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently issued code, if any. Test hook.
    pub async fn last_code(&self) -> Option<String> {
        self.last.read().await.as_ref().map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl VerificationService for SimulatedVerifier {
    async fn send_code(&self, mobile: &str) -> Result<(), VerificationError> {
        let code = format!("{:06}", rand::thread_rng().gen_range(0..1_000_000u32));
        tracing::info!(%mobile, %code, "simulated one-time code issued");
        *self.last.write().await = Some((mobile.to_string(), code));
        Ok(())
    }

    async fn check_code(&self, mobile: &str, code: &str) -> Result<bool, VerificationError> {
        let last = self.last.read().await;
        Ok(matches!(
            last.as_ref(),
            Some((m, c)) if m == mobile && c == code
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simulated_verifier_matches_issued_code() {
        let v = SimulatedVerifier::new();
        v.send_code("9000000001").await.unwrap();
        let code = v.last_code().await.unwrap();
        assert_eq!(code.len(), 6);
        assert!(v.check_code("9000000001", &code).await.unwrap());
        assert!(!v.check_code("9000000001", "000000").await.unwrap() || code == "000000");
        // Wrong identifier never matches.
        assert!(!v.check_code("9000000002", &code).await.unwrap());
    }

    #[tokio::test]
    async fn check_without_send_fails_to_match() {
        let v = SimulatedVerifier::new();
        assert!(!v.check_code("9000000001", "123456").await.unwrap());
    }
}
