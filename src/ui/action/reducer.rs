use crate::command::{render_renew_preview, render_revoke_preview};
use crate::ui::generate::EXECUTING_MESSAGE;
use crate::ui::layout::ClickTarget;
use crate::ui::mvi::Reducer;

use super::intent::ActionIntent;
use super::state::{ActionDialogState, ActionView, CertificateAction};

pub struct ActionReducer;

impl Reducer for ActionReducer {
    type State = ActionDialogState;
    type Intent = ActionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ActionIntent::Open {
                action,
                certificate,
                renew_duration_secs,
            } => {
                let preview = match action {
                    CertificateAction::View => String::new(),
                    CertificateAction::Renew => {
                        render_renew_preview(&certificate.id, renew_duration_secs)
                    }
                    CertificateAction::Revoke => render_revoke_preview(&certificate.id),
                };
                ActionDialogState::Visible(ActionView {
                    action,
                    certificate,
                    preview,
                    status_log: Vec::new(),
                })
            }

            ActionIntent::Close => ActionDialogState::Hidden,

            ActionIntent::PointerDown { target } => match target {
                ClickTarget::Overlay | ClickTarget::CloseButton => ActionDialogState::Hidden,
                _ => state,
            },

            ActionIntent::SubmitStarted => match state {
                ActionDialogState::Visible(mut view) if view.action.runs_command() => {
                    view.status_log = vec![EXECUTING_MESSAGE.to_string()];
                    ActionDialogState::Visible(view)
                }
                other => other,
            },

            ActionIntent::SubmissionFinished { message } => match state {
                ActionDialogState::Visible(mut view) => {
                    view.status_log.push(message);
                    ActionDialogState::Visible(view)
                }
                ActionDialogState::Hidden => ActionDialogState::Hidden,
            },

            ActionIntent::CertificateUpdated(certificate) => match state {
                ActionDialogState::Visible(mut view) if view.certificate.id == certificate.id => {
                    view.certificate = certificate;
                    ActionDialogState::Visible(view)
                }
                other => other,
            },
        }
    }
}
