use std::sync::mpsc::Sender;
use std::time::Duration;
use tokio::runtime::Handle;
use uuid::Uuid;

use super::{CertificateSubmitter, SubmissionHandle, SubmitKind, SubmitRequest};
use crate::ui::events::AppEvent;

/// Line reported by the mock once a generate request's delay has elapsed.
pub const SUCCESS_MESSAGE: &str = "Certificate generated successfully!";
pub const RENEWED_MESSAGE: &str = "Certificate renewed successfully";
pub const REVOKED_MESSAGE: &str = "Certificate revoked successfully";

fn success_message(kind: &SubmitKind) -> &'static str {
    match kind {
        SubmitKind::Generate => SUCCESS_MESSAGE,
        SubmitKind::Renew { .. } => RENEWED_MESSAGE,
        SubmitKind::Revoke { .. } => REVOKED_MESSAGE,
    }
}

/// Pretends to run the command and reports success after a fixed delay.
pub struct MockSubmitter {
    delay: Duration,
    runtime: Handle,
}

impl MockSubmitter {
    pub fn new(delay: Duration, runtime: Handle) -> Self {
        Self { delay, runtime }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl CertificateSubmitter for MockSubmitter {
    fn submit(&self, request: SubmitRequest, events: Sender<AppEvent>) -> SubmissionHandle {
        let id = Uuid::new_v4();
        let delay = self.delay;
        let message = success_message(&request.kind);
        tracing::info!(
            submission_id = %id,
            command = %request.command,
            delay_ms = delay.as_millis() as u64,
            "mock submission scheduled"
        );

        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(submission_id = %id, "mock submission completed");
            if events
                .send(AppEvent::SubmissionFinished {
                    id,
                    message: message.to_string(),
                })
                .is_err()
            {
                tracing::trace!(submission_id = %id, "submission result dropped (receiver gone)");
            }
        });

        SubmissionHandle::new(id, task.abort_handle())
    }
}
