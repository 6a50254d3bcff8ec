//! Submission state machine

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DemoRequest, FieldUpdate};
use crate::CoreResult;

/// Lifecycle of one form session: `Idle -> Submitting -> Submitted`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "Idle"),
            SubmissionStatus::Submitting => write!(f, "Submitting"),
            SubmissionStatus::Submitted => write!(f, "Submitted"),
        }
    }
}

/// Demo request being edited plus where its submission stands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoRequestForm {
    request: DemoRequest,
    status: SubmissionStatus,
}

impl DemoRequestForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &DemoRequest {
        &self.request
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// True while the submit action must not be re-entered
    pub fn is_locked(&self) -> bool {
        self.status != SubmissionStatus::Idle
    }

    pub fn update_field(&mut self, update: FieldUpdate) {
        tracing::trace!(field = update.field().as_str(), "Demo form field updated");
        self.request.apply(update);
    }

    /// Move `Idle -> Submitting` and hand back the snapshot to send.
    ///
    /// Returns `None` in any other state; the caller must not start a
    /// second submission in that case.
    pub fn begin_submit(&mut self) -> Option<DemoRequest> {
        if self.status != SubmissionStatus::Idle {
            tracing::debug!(status = %self.status, "Ignoring repeated demo request submit");
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        tracing::debug!("Demo request submitting");
        Some(self.request.clone())
    }

    /// Record the backend's answer for the submission in flight.
    ///
    /// Success moves to `Submitted`. A failure is logged and leaves the
    /// form in `Submitting`; there is no failed state to fall back to.
    pub fn finish_submit(&mut self, outcome: CoreResult<()>) {
        if self.status != SubmissionStatus::Submitting {
            tracing::warn!(status = %self.status, "Submission completed with no submission in flight");
            return;
        }
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Submitted;
                tracing::info!("Demo request submitted");
            }
            Err(err) => {
                tracing::error!(error = %err, "Demo request submission failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::ProductionLines;
    use crate::CoreError;

    fn filled_form() -> DemoRequestForm {
        let mut form = DemoRequestForm::new();
        form.update_field(FieldUpdate::Name("Sarah Chen".into()));
        form.update_field(FieldUpdate::Email("sarah@globalmotors.com".into()));
        form.update_field(FieldUpdate::Company("Global Motors Ltd.".into()));
        form.update_field(FieldUpdate::ProductionLines(Some(ProductionLines::UpTo200)));
        form
    }

    #[test]
    fn test_fresh_form_is_idle_and_empty() {
        let form = DemoRequestForm::new();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.request().is_empty());
        assert!(!form.is_locked());
    }

    #[test]
    fn test_field_updates_do_not_change_status() {
        let form = filled_form();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.request().company, "Global Motors Ltd.");
    }

    #[test]
    fn test_begin_submit_is_synchronous_and_single_shot() {
        let mut form = filled_form();

        let snapshot = form.begin_submit().expect("idle form should submit");
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert_eq!(&snapshot, form.request());

        assert!(form.begin_submit().is_none());
        assert_eq!(form.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn test_finish_submit_reaches_terminal_state() {
        let mut form = filled_form();
        form.begin_submit();
        form.finish_submit(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Submitted);

        assert!(form.begin_submit().is_none());
        assert_eq!(form.status(), SubmissionStatus::Submitted);
        // Request is kept after the session ends
        assert_eq!(form.request().name, "Sarah Chen");
    }

    #[test]
    fn test_failure_keeps_submitting() {
        let mut form = filled_form();
        form.begin_submit();
        form.finish_submit(Err(CoreError::Submission("unreachable".into())));
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert!(form.is_locked());
    }

    #[test]
    fn test_finish_without_submit_is_ignored() {
        let mut form = DemoRequestForm::new();
        form.finish_submit(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }
}
