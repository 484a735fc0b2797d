use super::*;
use futures::executor::block_on;
use std::cell::{Cell, RefCell};

fn fields(name: &str, email: &str, message: &str) -> RawFields {
    RawFields {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
        subject: "  Halo ".to_owned(),
    }
}

fn valid_fields() -> RawFields {
    fields(" Fajri ", " fajri@mail.co ", "  Halo, saya tertarik bekerja sama.  ")
}

#[derive(Default)]
struct RecordingView {
    busy: Cell<bool>,
    busy_history: RefCell<Vec<bool>>,
    statuses: RefCell<Vec<FormStatus>>,
    phases: RefCell<Vec<SubmitPhase>>,
    cleared: Cell<usize>,
    clear_after: RefCell<Vec<u32>>,
    resets: Cell<usize>,
}

impl FormView for RecordingView {
    fn phase_changed(&self, phase: SubmitPhase) {
        self.phases.borrow_mut().push(phase);
    }

    fn show_status(&self, status: &FormStatus) {
        self.statuses.borrow_mut().push(status.clone());
    }

    fn clear_status(&self) {
        self.cleared.set(self.cleared.get() + 1);
    }

    fn clear_status_after(&self, delay_ms: u32) {
        self.clear_after.borrow_mut().push(delay_ms);
    }

    fn is_busy(&self) -> bool {
        self.busy.get()
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
        self.busy_history.borrow_mut().push(busy);
    }

    fn reset_fields(&self) {
        self.resets.set(self.resets.get() + 1);
    }
}

impl RecordingView {
    fn last_status(&self) -> Option<FormStatus> {
        self.statuses.borrow().last().cloned()
    }
}

/// Transport that records whether the button was disabled while delivering.
struct ObservingTransport<'a> {
    view: &'a RecordingView,
    busy_during_delivery: Cell<Option<bool>>,
    result: Result<(), TransportError>,
}

impl ContactTransport for ObservingTransport<'_> {
    async fn deliver(&self, _message: &ContactMessage) -> Result<(), TransportError> {
        self.busy_during_delivery.set(Some(self.view.is_busy()));
        self.result.clone()
    }
}

struct PanickingTransport;

impl ContactTransport for PanickingTransport {
    async fn deliver(&self, _message: &ContactMessage) -> Result<(), TransportError> {
        panic!("transport blew up");
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn email_validator_accepts_and_rejects_examples() {
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.co"));
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("a@@b.co"));
}

#[test]
fn missing_fields_win_over_other_errors() {
    assert_eq!(ContactMessage::validate(&fields("", "bad", "short")), Err(ValidationError::MissingFields));
    assert_eq!(ContactMessage::validate(&fields("A", "   ", "long enough message")), Err(ValidationError::MissingFields));
    assert_eq!(ContactMessage::validate(&fields("A", "a@b.co", "  ")), Err(ValidationError::MissingFields));
}

#[test]
fn invalid_email_wins_over_short_message() {
    assert_eq!(ContactMessage::validate(&fields("A", "a@b", "short")), Err(ValidationError::InvalidEmail));
}

#[test]
fn message_length_boundary() {
    assert_eq!(ContactMessage::validate(&fields("A", "a@b.co", "123456789")), Err(ValidationError::MessageTooShort));
    assert!(ContactMessage::validate(&fields("A", "a@b.co", "1234567890")).is_ok());
}

#[test]
fn message_length_counts_characters_not_bytes() {
    assert!(ContactMessage::validate(&fields("A", "a@b.co", "ééééééééé")).is_err());
    assert!(ContactMessage::validate(&fields("A", "a@b.co", "éééééééééé")).is_ok());
}

#[test]
fn validated_message_is_trimmed() {
    let message = ContactMessage::validate(&valid_fields()).expect("fields should validate");
    assert_eq!(message.name, "Fajri");
    assert_eq!(message.email, "fajri@mail.co");
    assert_eq!(message.message, "Halo, saya tertarik bekerja sama.");
    assert_eq!(message.subject, "Halo");
}

#[test]
fn validation_errors_render_as_error_status() {
    let status = FormStatus::invalid(ValidationError::MessageTooShort);
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, "Pesan terlalu pendek, minimal 10 karakter.");
    assert_eq!(status.kind.class_name(), "status-error");
}

// =============================================================
// Submit lifecycle
// =============================================================

#[test]
fn valid_submit_succeeds_and_resets_form() {
    let view = RecordingView::default();
    let transport = ObservingTransport { view: &view, busy_during_delivery: Cell::new(None), result: Ok(()) };

    let outcome = block_on(submit(valid_fields(), &transport, &view, 5000));

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(transport.busy_during_delivery.get(), Some(true));
    assert!(!view.is_busy());
    assert_eq!(*view.busy_history.borrow(), vec![true, false]);
    assert_eq!(view.resets.get(), 1);
    assert_eq!(*view.clear_after.borrow(), vec![5000]);
    assert_eq!(view.last_status(), Some(FormStatus::new(StatusKind::Success, SUCCESS_MESSAGE)));
    assert_eq!(
        *view.phases.borrow(),
        vec![SubmitPhase::Validating, SubmitPhase::Submitting, SubmitPhase::Success]
    );
}

#[test]
fn sending_status_is_shown_before_delivery() {
    let view = RecordingView::default();
    let transport = ObservingTransport { view: &view, busy_during_delivery: Cell::new(None), result: Ok(()) };
    block_on(submit(valid_fields(), &transport, &view, 5000));
    let statuses = view.statuses.borrow();
    assert_eq!(statuses[0], FormStatus::new(StatusKind::Loading, SENDING_MESSAGE));
}

#[test]
fn invalid_submit_never_touches_button() {
    let view = RecordingView::default();
    let transport = ObservingTransport { view: &view, busy_during_delivery: Cell::new(None), result: Ok(()) };

    let outcome = block_on(submit(fields("A", "a@b", "long enough text"), &transport, &view, 5000));

    assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::InvalidEmail));
    assert_eq!(transport.busy_during_delivery.get(), None);
    assert!(view.busy_history.borrow().is_empty());
    assert_eq!(view.resets.get(), 0);
    assert_eq!(view.last_status().map(|s| s.text), Some("Format email tidak valid.".to_owned()));
    assert_eq!(outcome.phase(), SubmitPhase::Error);
}

#[test]
fn failed_delivery_shows_error_and_reenables_button() {
    let view = RecordingView::default();
    let transport = ObservingTransport {
        view: &view,
        busy_during_delivery: Cell::new(None),
        result: Err(TransportError::Unreachable("offline".to_owned())),
    };

    let outcome = block_on(submit(valid_fields(), &transport, &view, 5000));

    assert!(matches!(outcome, SubmitOutcome::Failed(TransportError::Unreachable(_))));
    assert!(!view.is_busy());
    assert_eq!(view.resets.get(), 0);
    assert!(view.clear_after.borrow().is_empty());
    assert_eq!(view.last_status(), Some(FormStatus::new(StatusKind::Error, FAILURE_MESSAGE)));
    assert_eq!(view.phases.borrow().last(), Some(&SubmitPhase::Error));
}

#[test]
fn busy_form_ignores_second_submit() {
    let view = RecordingView::default();
    view.busy.set(true);
    let transport = ObservingTransport { view: &view, busy_during_delivery: Cell::new(None), result: Ok(()) };

    let outcome = block_on(submit(valid_fields(), &transport, &view, 5000));

    assert_eq!(outcome, SubmitOutcome::Busy);
    assert_eq!(transport.busy_during_delivery.get(), None);
    assert!(view.statuses.borrow().is_empty());
    assert!(view.is_busy());
}

#[test]
fn unwinding_delivery_still_reenables_button() {
    let view = RecordingView::default();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        block_on(submit(valid_fields(), &PanickingTransport, &view, 5000))
    }));
    assert!(result.is_err());
    assert!(!view.is_busy());
    assert_eq!(*view.busy_history.borrow(), vec![true, false]);
}

#[test]
fn connectivity_detection_matches_fetch_errors() {
    assert!(is_connectivity_failure("Failed to fetch"));
    assert!(is_connectivity_failure("TypeError: fetch failed"));
    assert!(!is_connectivity_failure("x is undefined"));
    assert_eq!(FormStatus::connectivity().text, CONNECTIVITY_MESSAGE);
}
