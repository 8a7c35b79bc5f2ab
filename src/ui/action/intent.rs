use crate::config::CertificateRecord;
use crate::ui::layout::ClickTarget;
use crate::ui::mvi::Intent;

use super::state::CertificateAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionIntent {
    /// Show the dialog for one certificate.
    Open {
        action: CertificateAction,
        certificate: CertificateRecord,
        renew_duration_secs: u64,
    },

    Close,

    /// Mouse button pressed while the dialog is visible.
    PointerDown { target: ClickTarget },

    /// The action's command was scheduled.
    SubmitStarted,

    /// A scheduled action reported back.
    SubmissionFinished { message: String },

    /// The dashboard record changed after an action completed.
    CertificateUpdated(CertificateRecord),
}

impl Intent for ActionIntent {}
