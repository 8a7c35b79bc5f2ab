//! View/renew/revoke dialog: reducer transitions and the controller flow
//! through the mock submitter.

use chrono::{Local, NaiveDate, TimeDelta};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use stepca_console::config::{CertificateRecord, Config};
use stepca_console::submit::{MockSubmitter, RENEWED_MESSAGE, REVOKED_MESSAGE};
use stepca_console::ui::action::{ActionDialogState, ActionIntent, ActionReducer, CertificateAction};
use stepca_console::ui::app::{App, Screen};
use stepca_console::ui::events::AppEvent;
use stepca_console::ui::generate::EXECUTING_MESSAGE;
use stepca_console::ui::input::{handle_key, handle_mouse};
use stepca_console::ui::layout::ClickTarget;
use stepca_console::ui::mvi::Reducer;
use tokio::runtime::Handle;

fn certificate() -> CertificateRecord {
    CertificateRecord {
        id: "456".to_string(),
        name: "cert2".to_string(),
        status: "expired".to_string(),
        expiration_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    }
}

fn open(action: CertificateAction) -> ActionDialogState {
    ActionReducer::reduce(
        ActionDialogState::default(),
        ActionIntent::Open {
            action,
            certificate: certificate(),
            renew_duration_secs: 3600,
        },
    )
}

fn make_app() -> (App, Receiver<AppEvent>) {
    let submitter = Arc::new(MockSubmitter::new(
        Duration::from_millis(2000),
        Handle::current(),
    ));
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(Config::default(), submitter, tx);
    app.on_resize(100, 40);
    (app, rx)
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

fn deliver(app: &mut App, rx: &Receiver<AppEvent>) -> usize {
    let mut delivered = 0;
    for event in rx.try_iter() {
        if let AppEvent::SubmissionFinished { id, message } = event {
            app.on_submission_finished(id, message);
            delivered += 1;
        }
    }
    delivered
}

#[test]
fn starts_hidden() {
    assert!(!ActionDialogState::default().is_visible());
}

#[test]
fn renew_open_renders_preview() {
    let state = open(CertificateAction::Renew);
    let view = state.view().unwrap();
    assert_eq!(
        view.preview,
        "step-ca renew 456.crt 456.key --force --expires-in 3600s"
    );
    assert!(view.status_log.is_empty());
}

#[test]
fn revoke_open_renders_preview() {
    let state = open(CertificateAction::Revoke);
    assert_eq!(state.view().unwrap().preview, "step-ca revoke 456.crt");
}

#[test]
fn view_has_no_command_and_ignores_submit() {
    let state = open(CertificateAction::View);
    assert!(state.view().unwrap().preview.is_empty());
    let state = ActionReducer::reduce(state, ActionIntent::SubmitStarted);
    assert!(state.view().unwrap().status_log.is_empty());
}

#[test]
fn overlay_closes_content_does_not() {
    let state = ActionReducer::reduce(
        open(CertificateAction::Revoke),
        ActionIntent::PointerDown {
            target: ClickTarget::Content,
        },
    );
    assert!(state.is_visible());
    let state = ActionReducer::reduce(
        state,
        ActionIntent::PointerDown {
            target: ClickTarget::Overlay,
        },
    );
    assert!(!state.is_visible());
}

#[test]
fn result_after_close_is_dropped() {
    let state = ActionReducer::reduce(open(CertificateAction::Revoke), ActionIntent::Close);
    let state = ActionReducer::reduce(
        state,
        ActionIntent::SubmissionFinished {
            message: "late".into(),
        },
    );
    assert_eq!(state, ActionDialogState::Hidden);
}

#[test]
fn update_for_other_certificate_is_ignored() {
    let mut other = certificate();
    other.id = "999".into();
    other.status = "revoked".into();
    let state = ActionReducer::reduce(
        open(CertificateAction::View),
        ActionIntent::CertificateUpdated(other),
    );
    assert_eq!(state.view().unwrap().certificate.status, "expired");
}

#[tokio::test(start_paused = true)]
async fn revoke_flow_by_keyboard() {
    let (mut app, rx) = make_app();
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Char('x')));

    let view = app.action_dialog().view().unwrap();
    assert_eq!(view.action, CertificateAction::Revoke);
    assert_eq!(view.preview, "step-ca revoke 789.crt");

    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(
        app.action_dialog().view().unwrap().status_log,
        vec![EXECUTING_MESSAGE.to_string()]
    );

    tokio::time::sleep(Duration::from_millis(2001)).await;
    assert_eq!(deliver(&mut app, &rx), 1);
    assert_eq!(
        app.action_dialog().view().unwrap().status_log,
        vec![EXECUTING_MESSAGE.to_string(), REVOKED_MESSAGE.to_string()]
    );
    assert_eq!(app.certificates()[2].status, "revoked");
    assert!(app.dialog().status_log.is_empty());

    handle_key(&mut app, press(KeyCode::Esc));
    assert!(!app.is_action_visible());
    assert!(!app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn renew_by_run_button_moves_expiration() {
    let (mut app, rx) = make_app();
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Char('r')));
    assert_eq!(
        app.action_dialog().view().unwrap().preview,
        "step-ca renew 456.crt 456.key --force --expires-in 86400s"
    );

    let run = app.action_regions().run_button;
    handle_mouse(&mut app, click(run.x, run.y));
    tokio::time::sleep(Duration::from_millis(2001)).await;
    assert_eq!(deliver(&mut app, &rx), 1);

    let view = app.action_dialog().view().unwrap();
    assert_eq!(view.status_log.last().map(String::as_str), Some(RENEWED_MESSAGE));
    let expected = (Local::now().naive_local() + TimeDelta::days(1)).date();
    let renewed = app.certificates()[1].expiration_date;
    // the wall clock may cross midnight between renew and this check
    assert!(renewed == expected || renewed == expected.succ_opt().unwrap());
    assert_eq!(view.certificate.expiration_date, renewed);
}

#[tokio::test]
async fn view_opens_details_and_overlay_click_closes() {
    let (mut app, _rx) = make_app();
    handle_key(&mut app, press(KeyCode::Char('v')));
    assert_eq!(
        app.action_dialog().view().unwrap().action,
        CertificateAction::View
    );

    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.pending_submissions(), 0);

    handle_mouse(&mut app, click(0, 0));
    assert!(!app.is_action_visible());
}

#[tokio::test(start_paused = true)]
async fn submissions_show_up_on_logs_screen() {
    let (mut app, rx) = make_app();
    handle_key(&mut app, press(KeyCode::Char('x')));
    handle_key(&mut app, press(KeyCode::Enter));
    handle_key(&mut app, press(KeyCode::Esc));
    tokio::time::sleep(Duration::from_millis(2001)).await;
    deliver(&mut app, &rx);

    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.screen(), Screen::Logs);

    // F5: commands only
    handle_key(&mut app, press(KeyCode::F(5)));
    let visible = app.logs().visible();
    assert_eq!(visible.len(), 2);
    assert!(visible
        .iter()
        .all(|e| e.command.as_deref() == Some("step-ca revoke 123.crt")));

    // letters are filter text here, not shortcuts
    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(!app.should_quit());
    assert_eq!(app.logs().filter.keywords, "q");

    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.screen(), Screen::Certificates);
}
