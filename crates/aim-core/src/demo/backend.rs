//! Submission transport seam

use async_trait::async_trait;
use std::time::Duration;

use super::DemoRequest;
use crate::CoreResult;

/// Simulated round trip of the demo request submission
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Something that accepts a demo request and answers within bounded time
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &str;

    async fn submit(&self, request: &DemoRequest) -> CoreResult<()>;
}

/// Stand-in transport: waits out a fixed delay and always succeeds
#[cfg(feature = "runtime")]
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

#[cfg(feature = "runtime")]
impl SimulatedBackend {
    pub fn new() -> Self {
        Self { delay: SUBMIT_DELAY }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(feature = "runtime")]
impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "runtime")]
#[async_trait]
impl SubmissionBackend for SimulatedBackend {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn submit(&self, request: &DemoRequest) -> CoreResult<()> {
        tracing::debug!(
            company = %request.company,
            delay_ms = self.delay.as_millis() as u64,
            "Simulating demo request submission"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(all(test, feature = "runtime"))]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_backend_waits_full_delay() {
        let backend = SimulatedBackend::new();
        let start = Instant::now();
        backend.submit(&DemoRequest::default()).await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= SUBMIT_DELAY && elapsed < SUBMIT_DELAY + Duration::from_millis(5));
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedBackend::default().delay(), Duration::from_millis(1500));
        assert_eq!(SimulatedBackend::new().name(), "simulated");
    }
}
