use crate::config::{CertificateRecord, Config, LogRecord, Severity};
use crate::submit::{CertificateSubmitter, SubmissionHandle, SubmitKind, SubmitRequest};
use crate::ui::action::{ActionDialogState, ActionIntent, ActionReducer, CertificateAction};
use crate::ui::events::AppEvent;
use crate::ui::generate::{
    GenerateDialogState, GenerateForm, GenerateIntent, GenerateReducer, EXECUTING_MESSAGE,
};
use crate::ui::layout::{table_offset, ActionRegions, ClickTarget, DashboardRegions, DialogRegions};
use crate::ui::logs::{LogsIntent, LogsReducer, LogsState};
use crate::ui::mvi::Reducer;
use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};
use ratatui::layout::Rect;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use uuid::Uuid;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Certificates,
    Logs,
}

impl Screen {
    pub fn toggle(self) -> Self {
        match self {
            Screen::Certificates => Screen::Logs,
            Screen::Logs => Screen::Certificates,
        }
    }
}

/// A scheduled submission and what to do with its result.
struct PendingSubmission {
    handle: SubmissionHandle,
    kind: SubmitKind,
    command: String,
}

/// Dashboard screens plus the generate and certificate-action controllers.
///
/// Pending submissions are tied to this value: dropping it cancels them.
pub struct App {
    should_quit: bool,
    size: (u16, u16),
    screen: Screen,
    certificates: Vec<CertificateRecord>,
    selected: usize,
    renew_duration_secs: u64,
    /// State of the generate dialog (MVI pattern).
    generate: GenerateDialogState,
    /// State of the view/renew/revoke dialog (MVI pattern).
    action: ActionDialogState,
    /// State of the logs screen (MVI pattern).
    logs: LogsState,
    submitter: Arc<dyn CertificateSubmitter>,
    events: Sender<AppEvent>,
    pending: Vec<PendingSubmission>,
}

impl App {
    pub fn new(
        config: Config,
        submitter: Arc<dyn CertificateSubmitter>,
        events: Sender<AppEvent>,
    ) -> Self {
        let form = GenerateForm::from_config(&config.form);
        Self {
            should_quit: false,
            size: (80, 24),
            screen: Screen::default(),
            certificates: config.certificates,
            selected: 0,
            renew_duration_secs: config.submit.renew_duration_secs,
            generate: GenerateDialogState::with_form(form),
            action: ActionDialogState::default(),
            logs: LogsState::with_entries(config.logs),
            submitter,
            events,
            pending: Vec::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn certificates(&self) -> &[CertificateRecord] {
        &self.certificates
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.size.0, self.size.1)
    }

    pub fn dialog_regions(&self) -> DialogRegions {
        DialogRegions::compute(self.area())
    }

    pub fn action_regions(&self) -> ActionRegions {
        ActionRegions::compute(self.area())
    }

    // ========================================================================
    // Screens and certificate selection
    // ========================================================================

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn toggle_screen(&mut self) {
        self.screen = self.screen.toggle();
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_selection(&mut self, direction: i32) {
        let count = self.certificates.len();
        if count == 0 {
            return;
        }
        self.selected = if direction < 0 {
            self.selected.saturating_sub(1)
        } else {
            (self.selected + 1).min(count - 1)
        };
    }

    /// First certificate row shown, given how many rows fit.
    pub fn table_offset(&self, visible_rows: usize) -> usize {
        table_offset(self.selected, visible_rows)
    }

    // ========================================================================
    // Generate dialog methods (MVI pattern)
    // ========================================================================

    /// Get the current generate dialog state.
    pub fn dialog(&self) -> &GenerateDialogState {
        &self.generate
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.generate.is_visible()
    }

    /// Dispatch an intent to the generate dialog reducer.
    pub fn dispatch_generate(&mut self, intent: GenerateIntent) {
        dispatch_mvi!(self, generate, GenerateReducer, intent);
    }

    pub fn open_dialog(&mut self) {
        self.dispatch_generate(GenerateIntent::Open);
    }

    pub fn close_dialog(&mut self) {
        self.dispatch_generate(GenerateIntent::Close);
    }

    pub fn reload_preview(&mut self) {
        self.dispatch_generate(GenerateIntent::ReloadPreview);
    }

    /// Recompute the preview, reset the status log and schedule the submission.
    pub fn submit(&mut self) {
        self.dispatch_generate(GenerateIntent::SubmitStarted);
        let request = SubmitRequest {
            kind: SubmitKind::Generate,
            command: self.generate.preview.clone(),
        };
        self.schedule(request);
    }

    // ========================================================================
    // Certificate action dialog methods (MVI pattern)
    // ========================================================================

    pub fn action_dialog(&self) -> &ActionDialogState {
        &self.action
    }

    pub fn is_action_visible(&self) -> bool {
        self.action.is_visible()
    }

    pub fn dispatch_action(&mut self, intent: ActionIntent) {
        dispatch_mvi!(self, action, ActionReducer, intent);
    }

    /// Open `action` for the selected certificate. No-op on an empty table.
    pub fn open_action(&mut self, action: CertificateAction) {
        let Some(certificate) = self.certificates.get(self.selected).cloned() else {
            return;
        };
        self.dispatch_action(ActionIntent::Open {
            action,
            certificate,
            renew_duration_secs: self.renew_duration_secs,
        });
    }

    pub fn close_action(&mut self) {
        self.dispatch_action(ActionIntent::Close);
    }

    /// Schedule the visible renew or revoke. View has nothing to run.
    pub fn run_action(&mut self) {
        let Some(view) = self.action.view() else {
            return;
        };
        let cert_id = view.certificate.id.clone();
        let kind = match view.action {
            CertificateAction::View => return,
            CertificateAction::Renew => SubmitKind::Renew {
                cert_id,
                duration_secs: self.renew_duration_secs,
            },
            CertificateAction::Revoke => SubmitKind::Revoke { cert_id },
        };
        let command = view.preview.clone();

        self.dispatch_action(ActionIntent::SubmitStarted);
        self.schedule(SubmitRequest { kind, command });
    }

    // ========================================================================
    // Logs screen methods (MVI pattern)
    // ========================================================================

    pub fn logs(&self) -> &LogsState {
        &self.logs
    }

    pub fn dispatch_logs(&mut self, intent: LogsIntent) {
        dispatch_mvi!(self, logs, LogsReducer, intent);
    }

    fn record_log(&mut self, message: &str, trace_id: Uuid, command: &str) {
        let entry = LogRecord {
            entry_id: Uuid::new_v4().simple().to_string().chars().take(8).collect(),
            timestamp: now(),
            severity: Severity::Info,
            message: message.to_string(),
            trace_id: trace_id.to_string(),
            command: Some(command.to_string()),
        };
        self.dispatch_logs(LogsIntent::Append(entry));
    }

    // ========================================================================
    // Submissions
    // ========================================================================

    fn schedule(&mut self, request: SubmitRequest) {
        let handle = self.submitter.submit(request.clone(), self.events.clone());
        self.record_log(EXECUTING_MESSAGE, handle.id(), &request.command);
        self.pending.push(PendingSubmission {
            handle,
            kind: request.kind,
            command: request.command,
        });
    }

    /// Route a finished submission to the dialog that started it.
    pub fn on_submission_finished(&mut self, id: Uuid, message: String) {
        let Some(index) = self.pending.iter().position(|p| p.handle.id() == id) else {
            tracing::debug!(submission_id = %id, "result for unknown submission ignored");
            return;
        };
        let finished = self.pending.remove(index);
        self.record_log(&message, id, &finished.command);

        match finished.kind {
            SubmitKind::Generate => {
                self.dispatch_generate(GenerateIntent::SubmissionFinished { message });
            }
            SubmitKind::Renew {
                cert_id,
                duration_secs,
            } => {
                if let Some(expires) = renewed_expiration(now(), duration_secs) {
                    self.update_certificate(&cert_id, |cert| cert.expiration_date = expires);
                }
                self.dispatch_action(ActionIntent::SubmissionFinished { message });
            }
            SubmitKind::Revoke { cert_id } => {
                self.update_certificate(&cert_id, |cert| cert.status = "revoked".to_string());
                self.dispatch_action(ActionIntent::SubmissionFinished { message });
            }
        }
    }

    fn update_certificate(&mut self, cert_id: &str, change: impl FnOnce(&mut CertificateRecord)) {
        let Some(cert) = self.certificates.iter_mut().find(|c| c.id == cert_id) else {
            return;
        };
        change(cert);
        let updated = cert.clone();
        tracing::info!(
            cert_id,
            status = %updated.status,
            expires = %updated.expiration_date,
            "certificate updated"
        );
        self.dispatch_action(ActionIntent::CertificateUpdated(updated));
    }

    /// Number of submissions scheduled but not yet reported.
    pub fn pending_submissions(&self) -> usize {
        self.pending.len()
    }

    pub fn cancel_pending(&mut self) {
        for pending in self.pending.drain(..) {
            pending.handle.cancel();
        }
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    /// Left mouse press at a screen cell.
    pub fn on_click(&mut self, col: u16, row: u16) {
        if self.is_dialog_visible() {
            match self.dialog_regions().hit_test(col, row) {
                ClickTarget::SubmitButton => self.submit(),
                target => self.dispatch_generate(GenerateIntent::PointerDown { target }),
            }
            return;
        }

        if self.is_action_visible() {
            match self.action_regions().hit_test(col, row) {
                ClickTarget::SubmitButton => self.run_action(),
                target => self.dispatch_action(ActionIntent::PointerDown { target }),
            }
            return;
        }

        if self.screen != Screen::Certificates {
            return;
        }
        let regions = DashboardRegions::compute(self.area());
        match regions.hit_test(col, row) {
            ClickTarget::OpenTrigger => self.open_dialog(),
            ClickTarget::TableRow(shown) => {
                let visible = regions.table_rows().height as usize;
                let index = self.table_offset(visible) + shown;
                if index < self.certificates.len() {
                    self.selected = index;
                }
            }
            _ => {}
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Expiration date after renewing at `from` for `duration_secs`.
fn renewed_expiration(from: NaiveDateTime, duration_secs: u64) -> Option<NaiveDate> {
    let seconds = i64::try_from(duration_secs).ok()?;
    let delta = TimeDelta::try_seconds(seconds)?;
    from.checked_add_signed(delta).map(|at| at.date())
}
