use crate::config::Config;
use crate::shutdown::{ShutdownCoordinator, ShutdownHandle, ShutdownPhase};
use crate::submit::MockSubmitter;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the dashboard until the user quits or a signal arrives.
///
/// `runtime` hosts the mock submission timers and the signal listener; this
/// function itself blocks the calling thread.
pub fn run(config: Config, runtime: Handle, shutdown: &ShutdownCoordinator) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate, shutdown.handle());

    let delay = Duration::from_millis(config.submit.delay_ms);
    let submitter = Arc::new(MockSubmitter::new(delay, runtime.clone()));
    let mut app = App::new(config, submitter, events.sender());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    runtime.spawn(forward_signals(events.sender(), shutdown.handle()));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            // Ticks only trigger a redraw.
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::SubmissionFinished { id, message }) => {
                app.on_submission_finished(id, message)
            }
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    shutdown.advance(ShutdownPhase::CancellingSubmissions);
    let pending = app.pending_submissions();
    if pending > 0 {
        tracing::info!(pending, "cancelling pending submissions");
    }
    drop(app);

    shutdown.advance(ShutdownPhase::RestoringTerminal);
    drop(guard);
    shutdown.advance(ShutdownPhase::Complete);
    Ok(())
}

async fn forward_signals(events: Sender<AppEvent>, shutdown: ShutdownHandle) {
    wait_for_signal().await;
    tracing::info!("termination signal received");
    shutdown.signal();
    let _ = events.send(AppEvent::Shutdown);
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = sigterm.recv() => {}
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "SIGTERM handler unavailable");
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
