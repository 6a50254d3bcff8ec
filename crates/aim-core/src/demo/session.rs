//! Native form driver on the tokio runtime

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;

use super::{DemoRequest, DemoRequestForm, FieldUpdate, SubmissionBackend, SubmissionStatus};

/// One form session: the state machine plus the submission it may have
/// in flight. Dropping the session aborts a pending completion so nothing
/// writes to the form after its owner is gone.
pub struct FormSession<B: SubmissionBackend + 'static> {
    form: Arc<Mutex<DemoRequestForm>>,
    backend: Arc<B>,
    pending: Option<JoinHandle<()>>,
}

impl<B: SubmissionBackend + 'static> FormSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            form: Arc::new(Mutex::new(DemoRequestForm::new())),
            backend: Arc::new(backend),
            pending: None,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        lock(&self.form).status()
    }

    pub fn request(&self) -> DemoRequest {
        lock(&self.form).request().clone()
    }

    pub fn update_field(&self, update: FieldUpdate) {
        lock(&self.form).update_field(update);
    }

    /// Start the submission if the form is idle.
    ///
    /// Must be called from within a tokio runtime. Returns `false` when the
    /// call was a no-op because a submission already started.
    pub fn submit(&mut self) -> bool {
        let Some(snapshot) = lock(&self.form).begin_submit() else {
            return false;
        };

        let form = Arc::clone(&self.form);
        let backend = Arc::clone(&self.backend);
        tracing::debug!(backend = backend.name(), "Scheduling demo request submission");
        self.pending = Some(tokio::spawn(async move {
            let outcome = backend.submit(&snapshot).await;
            lock(&form).finish_submit(outcome);
        }));
        true
    }

    /// Wait for the submission in flight, if any, to settle.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Err(err) = handle.await {
                tracing::warn!(error = %err, "Demo request submission task ended abnormally");
            }
        }
    }
}

impl<B: SubmissionBackend + 'static> Drop for FormSession<B> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

fn lock(form: &Mutex<DemoRequestForm>) -> MutexGuard<'_, DemoRequestForm> {
    form.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{ProductionLines, SimulatedBackend, SUBMIT_DELAY};
    use crate::CoreResult;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::Instant;

    /// Counts calls and completions; otherwise behaves like the simulated backend
    struct CountingBackend {
        calls: Arc<AtomicUsize>,
        completed: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SubmissionBackend for CountingBackend {
        fn name(&self) -> &str {
            "counting"
        }

        async fn submit(&self, _request: &DemoRequest) -> CoreResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(SUBMIT_DELAY).await;
            self.completed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn counting() -> (CountingBackend, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let completed = Arc::new(AtomicUsize::new(0));
        let backend = CountingBackend {
            calls: Arc::clone(&calls),
            completed: Arc::clone(&completed),
        };
        (backend, calls, completed)
    }

    fn fill<B: SubmissionBackend + 'static>(session: &FormSession<B>) {
        session.update_field(FieldUpdate::Name("Michael Rodriguez".into()));
        session.update_field(FieldUpdate::Email("michael@techfab.com".into()));
        session.update_field(FieldUpdate::Company("TechFab Industries".into()));
        session.update_field(FieldUpdate::ProductionLines(Some(ProductionLines::UpTo1000)));
    }

    async fn let_tasks_run() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fresh_session_is_idle() {
        let session = FormSession::new(SimulatedBackend::new());
        assert_eq!(session.status(), SubmissionStatus::Idle);
        assert!(session.request().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submitted_exactly_one_delay_later() {
        let mut session = FormSession::new(SimulatedBackend::new());
        fill(&session);

        assert!(session.submit());
        assert_eq!(session.status(), SubmissionStatus::Submitting);

        tokio::time::sleep(SUBMIT_DELAY - Duration::from_millis(1)).await;
        let_tasks_run().await;
        assert_eq!(session.status(), SubmissionStatus::Submitting);

        tokio::time::sleep(Duration::from_millis(1)).await;
        let_tasks_run().await;
        assert_eq!(session.status(), SubmissionStatus::Submitted);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(session.status(), SubmissionStatus::Submitted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_waits_for_delay() {
        let mut session = FormSession::new(SimulatedBackend::new());
        fill(&session);

        let start = Instant::now();
        session.submit();
        session.settled().await;

        let elapsed = start.elapsed();
        assert!(elapsed >= SUBMIT_DELAY && elapsed < SUBMIT_DELAY + Duration::from_millis(5));
        assert_eq!(session.status(), SubmissionStatus::Submitted);
        assert_eq!(session.request().company, "TechFab Industries");
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_submit_schedules_once() {
        let (backend, calls, completed) = counting();
        let mut session = FormSession::new(backend);
        fill(&session);

        assert!(session.submit());
        assert!(!session.submit());
        let_tasks_run().await;
        assert!(!session.submit());

        session.settled().await;
        assert!(!session.submit());
        session.settled().await;

        assert_eq!(session.status(), SubmissionStatus::Submitted);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(completed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_discards_pending_completion() {
        let (backend, calls, completed) = counting();
        let mut session = FormSession::new(backend);
        fill(&session);

        session.submit();
        let_tasks_run().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        drop(session);
        tokio::time::sleep(SUBMIT_DELAY * 2).await;
        let_tasks_run().await;
        assert_eq!(completed.load(Ordering::SeqCst), 0);
    }
}
