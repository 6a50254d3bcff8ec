//! Browser-side submission backend

use aim_core::{CoreError, CoreResult, DemoRequest, SubmissionBackend, SUBMIT_DELAY};
use async_trait::async_trait;
use futures::channel::oneshot;
use std::time::Duration;

/// Waits out the simulated round trip on the browser's timer.
///
/// Stands in for a real transport until one exists; always succeeds.
#[derive(Debug, Clone)]
pub struct TimerBackend {
    delay: Duration,
}

impl TimerBackend {
    pub fn new() -> Self {
        Self { delay: SUBMIT_DELAY }
    }
}

impl Default for TimerBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionBackend for TimerBackend {
    fn name(&self) -> &str {
        "browser-timer"
    }

    async fn submit(&self, request: &DemoRequest) -> CoreResult<()> {
        tracing::debug!(company = %request.company, "Submitting demo request");
        let (tx, rx) = oneshot::channel();
        leptos::set_timeout(
            move || {
                let _ = tx.send(());
            },
            self.delay,
        );
        rx.await
            .map_err(|_| CoreError::Submission("submission timer was dropped".to_string()))
    }
}
