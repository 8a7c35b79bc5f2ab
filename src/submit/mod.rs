//! Submission boundary for certificate generation.
//!
//! The UI hands a [`SubmitRequest`] to a [`CertificateSubmitter`] and gets
//! back a [`SubmissionHandle`]. The outcome arrives later as
//! [`AppEvent::SubmissionFinished`] on the UI event channel. Only a mock
//! implementation exists; real `step-ca` execution would plug in here.

mod mock;

pub use mock::{MockSubmitter, RENEWED_MESSAGE, REVOKED_MESSAGE, SUCCESS_MESSAGE};

use std::sync::mpsc::Sender;
use tokio::task::AbortHandle;
use uuid::Uuid;

use crate::ui::events::AppEvent;

/// What a submission does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitKind {
    Generate,
    Renew { cert_id: String, duration_secs: u64 },
    Revoke { cert_id: String },
}

/// Everything a submitter needs to know about one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub kind: SubmitKind,
    /// The command preview shown to the user at submit time.
    pub command: String,
}

pub trait CertificateSubmitter: Send + Sync {
    /// Schedule a submission. Must not block.
    fn submit(&self, request: SubmitRequest, events: Sender<AppEvent>) -> SubmissionHandle;
}

/// Handle to a scheduled submission.
#[derive(Debug)]
pub struct SubmissionHandle {
    id: Uuid,
    abort: AbortHandle,
}

impl SubmissionHandle {
    pub fn new(id: Uuid, abort: AbortHandle) -> Self {
        Self { id, abort }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Cancel the pending continuation. No-op once it has run.
    pub fn cancel(&self) {
        if !self.abort.is_finished() {
            tracing::debug!(submission_id = %self.id, "cancelling pending submission");
        }
        self.abort.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}
