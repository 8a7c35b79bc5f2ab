use std::sync::mpsc;
use std::time::Duration;
use stepca_console::submit::{
    CertificateSubmitter, MockSubmitter, SubmitKind, SubmitRequest, REVOKED_MESSAGE,
    SUCCESS_MESSAGE,
};
use stepca_console::ui::events::AppEvent;
use tokio::runtime::Handle;

fn request() -> SubmitRequest {
    SubmitRequest {
        kind: SubmitKind::Generate,
        command: "step-ca command".to_string(),
    }
}

fn submitter() -> MockSubmitter {
    MockSubmitter::new(Duration::from_millis(2000), Handle::current())
}

#[tokio::test(start_paused = true)]
async fn reports_success_after_delay() {
    let (tx, rx) = mpsc::channel();
    let handle = submitter().submit(request(), tx);

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(rx.try_recv().is_err());
    assert!(!handle.is_finished());

    tokio::time::sleep(Duration::from_millis(2)).await;
    match rx.try_recv() {
        Ok(AppEvent::SubmissionFinished { id, message }) => {
            assert_eq!(id, handle.id());
            assert_eq!(message, SUCCESS_MESSAGE);
        }
        _ => panic!("expected SubmissionFinished"),
    }
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn fires_exactly_once() {
    let (tx, rx) = mpsc::channel();
    let _handle = submitter().submit(request(), tx);

    tokio::time::sleep(Duration::from_millis(10_000)).await;
    assert!(matches!(rx.try_recv(), Ok(AppEvent::SubmissionFinished { .. })));
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn cancelled_submission_never_reports() {
    let (tx, rx) = mpsc::channel();
    let handle = submitter().submit(request(), tx);

    tokio::time::sleep(Duration::from_millis(500)).await;
    handle.cancel();
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn overlapping_submissions_both_report() {
    let (tx, rx) = mpsc::channel();
    let mock = submitter();
    let first = mock.submit(request(), tx.clone());
    tokio::time::sleep(Duration::from_millis(300)).await;
    let second = mock.submit(request(), tx);
    assert_ne!(first.id(), second.id());

    tokio::time::sleep(Duration::from_millis(2500)).await;
    let ids: Vec<_> = rx
        .try_iter()
        .filter_map(|event| match event {
            AppEvent::SubmissionFinished { id, .. } => Some(id),
            _ => None,
        })
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&first.id()));
    assert!(ids.contains(&second.id()));
}

#[tokio::test]
async fn cancel_after_completion_is_harmless() {
    let (tx, rx) = mpsc::channel();
    let mock = MockSubmitter::new(Duration::from_millis(1), Handle::current());
    let handle = mock.submit(request(), tx);
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.cancel();
    assert!(matches!(rx.try_recv(), Ok(AppEvent::SubmissionFinished { .. })));
}

#[tokio::test(start_paused = true)]
async fn revoke_reports_its_own_message() {
    let (tx, rx) = mpsc::channel();
    let request = SubmitRequest {
        kind: SubmitKind::Revoke {
            cert_id: "789".to_string(),
        },
        command: "step-ca revoke 789.crt".to_string(),
    };
    let _handle = submitter().submit(request, tx);

    tokio::time::sleep(Duration::from_millis(2001)).await;
    match rx.try_recv() {
        Ok(AppEvent::SubmissionFinished { message, .. }) => assert_eq!(message, REVOKED_MESSAGE),
        _ => panic!("expected SubmissionFinished"),
    }
}
