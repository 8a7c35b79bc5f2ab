use crate::config::Severity;
use crate::ui::action::CertificateAction;
use crate::ui::app::{App, Screen};
use crate::ui::generate::GenerateIntent;
use crate::ui::logs::LogsIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode delivers Ctrl+C as a key, not SIGINT.
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.is_dialog_visible() {
        handle_dialog_key(app, key);
        return;
    }
    if app.is_action_visible() {
        handle_action_key(app, key);
        return;
    }

    if key.code == KeyCode::Tab {
        app.toggle_screen();
        return;
    }

    match app.screen() {
        Screen::Certificates => handle_certificates_key(app, key),
        Screen::Logs => handle_logs_key(app, key),
    }
}

fn handle_certificates_key(app: &mut App, key: KeyEvent) {
    // Esc does nothing here: it only ever closes dialogs.
    match key.code {
        KeyCode::Char('g') | KeyCode::Enter => app.open_dialog(),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('v') => app.open_action(CertificateAction::View),
        KeyCode::Char('r') => app.open_action(CertificateAction::Renew),
        KeyCode::Char('x') => app.open_action(CertificateAction::Revoke),
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.reload_preview();
        return;
    }

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        // Submitting never leaves the dialog or edits a field.
        KeyCode::Enter => app.submit(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_generate(GenerateIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_generate(GenerateIntent::FocusPrev),
        KeyCode::Left => app.dispatch_generate(GenerateIntent::CycleChoice { forward: false }),
        KeyCode::Right => app.dispatch_generate(GenerateIntent::CycleChoice { forward: true }),
        KeyCode::Backspace => app.dispatch_generate(GenerateIntent::DeleteChar),
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_generate(GenerateIntent::InsertChar(ch)),
        _ => {}
    }
}

fn handle_action_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_action(),
        KeyCode::Enter => app.run_action(),
        _ => {}
    }
}

fn handle_logs_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::F(n @ 1..=4) => LogsIntent::ToggleSeverity(Severity::ALL[usize::from(n) - 1]),
        KeyCode::F(5) => LogsIntent::ToggleCommandsOnly,
        KeyCode::Esc => LogsIntent::ClearFilter,
        KeyCode::Left | KeyCode::BackTab => LogsIntent::FocusPrev,
        KeyCode::Right => LogsIntent::FocusNext,
        KeyCode::Up => LogsIntent::ScrollUp,
        KeyCode::Down => LogsIntent::ScrollDown,
        KeyCode::Backspace => LogsIntent::DeleteChar,
        KeyCode::Char(ch) if is_plain(key) => LogsIntent::InsertChar(ch),
        _ => return,
    };
    app.dispatch_logs(intent);
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.on_click(mouse.column, mouse.row);
    }
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
