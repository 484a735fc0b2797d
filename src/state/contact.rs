//! Contact form validation and the submit lifecycle.
//!
//! DESIGN
//! ======
//! `submit` walks idle → validating → submitting → success/error against two
//! seams: a [`ContactTransport`] that delivers the message and a [`FormView`]
//! that renders status and owns the submit button. The button's disabled
//! state is the only thing preventing a second concurrent submission, so it
//! is released by a drop guard and comes back on every exit path, including
//! a delivery future that unwinds.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::future::Future;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub const MIN_MESSAGE_CHARS: usize = 10;

pub const SENDING_MESSAGE: &str = "Mengirim pesan...";
pub const SUCCESS_MESSAGE: &str = "Pesan berhasil terkirim! Terima kasih sudah menghubungi.";
pub const FAILURE_MESSAGE: &str = "Terjadi kesalahan. Silakan coba lagi.";
pub const CONNECTIVITY_MESSAGE: &str = "Koneksi bermasalah. Silakan coba lagi.";

/// Submit button content while a delivery is in flight.
pub const LOADING_BUTTON_HTML: &str = "<span class=\"loading\"></span> Mengirim...";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Validation failures, in the order they are checked.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Lengkapi semua kolom yang wajib diisi.")]
    MissingFields,
    #[error("Format email tidak valid.")]
    InvalidEmail,
    #[error("Pesan terlalu pendek, minimal 10 karakter.")]
    MessageTooShort,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("contact endpoint unreachable: {0}")]
    Unreachable(String),
    #[error("contact endpoint refused the message: {0}")]
    Refused(String),
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Raw field values as read from the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawFields {
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: String,
}

/// A validated, trimmed contact message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: String,
}

impl ContactMessage {
    /// Trim every field and validate; the first failing rule wins.
    pub fn validate(raw: &RawFields) -> Result<Self, ValidationError> {
        let name = raw.name.trim();
        let email = raw.email.trim();
        let message = raw.message.trim();
        let subject = raw.subject.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if message.chars().count() < MIN_MESSAGE_CHARS {
            return Err(ValidationError::MessageTooShort);
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
            subject: subject.to_owned(),
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Success,
    Error,
}

impl StatusKind {
    /// Class applied to `#formStatus`.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Loading => "status-loading",
            Self::Success => "status-success",
            Self::Error => "status-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub text: String,
}

impl FormStatus {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    pub fn invalid(error: ValidationError) -> Self {
        Self::new(StatusKind::Error, error.to_string())
    }

    pub fn connectivity() -> Self {
        Self::new(StatusKind::Error, CONNECTIVITY_MESSAGE)
    }
}

/// Whether an uncaught script error looks like a failed network request.
pub fn is_connectivity_failure(message: &str) -> bool {
    message.contains("fetch")
}

/// How a submit attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submit button was already disabled; nothing happened.
    Busy,
    Rejected(ValidationError),
    Sent,
    Failed(TransportError),
}

impl SubmitOutcome {
    pub fn phase(&self) -> SubmitPhase {
        match self {
            Self::Busy => SubmitPhase::Submitting,
            Self::Sent => SubmitPhase::Success,
            Self::Rejected(_) | Self::Failed(_) => SubmitPhase::Error,
        }
    }
}

/// Delivers a validated message.
pub trait ContactTransport {
    fn deliver(&self, message: &ContactMessage) -> impl Future<Output = Result<(), TransportError>>;
}

/// Rendering surface of the contact form.
pub trait FormView {
    fn phase_changed(&self, phase: SubmitPhase);
    fn show_status(&self, status: &FormStatus);
    /// Remove any status text and class, cancelling a pending auto-clear.
    fn clear_status(&self);
    /// Clear the status after `delay_ms` unless something replaces it first.
    fn clear_status_after(&self, delay_ms: u32);
    fn is_busy(&self) -> bool;
    /// `true` disables the submit button and shows the loading content;
    /// `false` re-enables it and restores the original content.
    fn set_busy(&self, busy: bool);
    fn reset_fields(&self);
}

struct BusyGuard<'a, V: FormView> {
    view: &'a V,
}

impl<'a, V: FormView> BusyGuard<'a, V> {
    fn engage(view: &'a V) -> Self {
        view.set_busy(true);
        Self { view }
    }
}

impl<V: FormView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(false);
    }
}

/// Run one submit attempt for `raw`.
pub async fn submit<T, V>(raw: RawFields, transport: &T, view: &V, status_clear_ms: u32) -> SubmitOutcome
where
    T: ContactTransport,
    V: FormView,
{
    if view.is_busy() {
        log::debug!("contact submit ignored while a delivery is pending");
        return SubmitOutcome::Busy;
    }

    view.clear_status();
    view.phase_changed(SubmitPhase::Validating);
    let message = match ContactMessage::validate(&raw) {
        Ok(message) => message,
        Err(e) => {
            view.show_status(&FormStatus::invalid(e));
            view.phase_changed(SubmitPhase::Error);
            return SubmitOutcome::Rejected(e);
        }
    };

    let outcome = {
        let _busy = BusyGuard::engage(view);
        view.show_status(&FormStatus::new(StatusKind::Loading, SENDING_MESSAGE));
        view.phase_changed(SubmitPhase::Submitting);

        match transport.deliver(&message).await {
            Ok(()) => {
                view.show_status(&FormStatus::new(StatusKind::Success, SUCCESS_MESSAGE));
                view.reset_fields();
                view.clear_status_after(status_clear_ms);
                SubmitOutcome::Sent
            }
            Err(e) => {
                log::warn!("contact delivery failed: {e}");
                view.show_status(&FormStatus::new(StatusKind::Error, FAILURE_MESSAGE));
                SubmitOutcome::Failed(e)
            }
        }
    };

    view.phase_changed(outcome.phase());
    outcome
}

/// Stand-in delivery that waits a fixed latency and always succeeds.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug)]
pub struct SimulatedTransport {
    pub latency_ms: u32,
}

#[cfg(feature = "hydrate")]
impl ContactTransport for SimulatedTransport {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), TransportError> {
        log::info!("simulating contact delivery for {}", message.email);
        gloo_timers::future::TimeoutFuture::new(self.latency_ms).await;
        Ok(())
    }
}
