use crate::config::CertificateRecord;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateAction {
    View,
    Renew,
    Revoke,
}

impl CertificateAction {
    pub fn title(self) -> &'static str {
        match self {
            CertificateAction::View => " Certificate ",
            CertificateAction::Renew => " Renew Certificate ",
            CertificateAction::Revoke => " Revoke Certificate ",
        }
    }

    /// View only shows details; the other actions run a command.
    pub fn runs_command(self) -> bool {
        !matches!(self, CertificateAction::View)
    }
}

/// What the visible dialog shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionView {
    pub action: CertificateAction,
    pub certificate: CertificateRecord,
    /// Empty for [`CertificateAction::View`].
    pub preview: String,
    pub status_log: Vec<String>,
}

/// Unlike the generate dialog, nothing survives closing: every open starts
/// from the selected certificate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActionDialogState {
    #[default]
    Hidden,
    Visible(ActionView),
}

impl UiState for ActionDialogState {}

impl ActionDialogState {
    pub fn is_visible(&self) -> bool {
        matches!(self, ActionDialogState::Visible(_))
    }

    pub fn view(&self) -> Option<&ActionView> {
        match self {
            ActionDialogState::Visible(view) => Some(view),
            ActionDialogState::Hidden => None,
        }
    }
}
