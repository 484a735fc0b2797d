//! `#contactForm` binding: reads fields, renders status, drives the submit
//! lifecycle against the simulated transport.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, FormData, HtmlButtonElement, HtmlFormElement};

use super::controller::Controller;
use super::{DomError, listen};
use crate::state::contact::{
    FormStatus, FormView, LOADING_BUTTON_HTML, RawFields, SimulatedTransport, SubmitPhase, submit,
};
use crate::util::scheduler::{Scheduler, TaskSlot, TimeoutScheduler};

pub const FORM_ID: &str = "contactForm";
pub const STATUS_ID: &str = "formStatus";

/// Write `status` into a `#formStatus` element.
pub(crate) fn render_status(element: &Element, status: &FormStatus) {
    element.set_text_content(Some(&status.text));
    element.set_class_name(status.kind.class_name());
}

fn clear_status_element(element: &Element) {
    element.set_text_content(Some(""));
    element.set_class_name("");
}

struct ContactView {
    form: HtmlFormElement,
    status: Option<Element>,
    button: HtmlButtonElement,
    original_button_html: RefCell<Option<String>>,
    phase: Cell<SubmitPhase>,
    scheduler: TimeoutScheduler,
    status_clear: TaskSlot<TimeoutScheduler>,
}

impl ContactView {
    fn read_fields(&self) -> Result<RawFields, DomError> {
        let data = FormData::new_with_form(&self.form)?;
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        Ok(RawFields {
            name: field("name"),
            email: field("email"),
            message: field("message"),
            subject: field("subject"),
        })
    }
}

impl FormView for ContactView {
    fn phase_changed(&self, phase: SubmitPhase) {
        log::debug!("contact form {:?} -> {phase:?}", self.phase.get());
        self.phase.set(phase);
    }

    fn show_status(&self, status: &FormStatus) {
        self.status_clear.cancel();
        if let Some(el) = &self.status {
            render_status(el, status);
        }
    }

    fn clear_status(&self) {
        self.status_clear.cancel();
        if let Some(el) = &self.status {
            clear_status_element(el);
        }
    }

    fn clear_status_after(&self, delay_ms: u32) {
        let Some(el) = self.status.clone() else {
            return;
        };
        let handle = self
            .scheduler
            .schedule(delay_ms, Box::new(move || clear_status_element(&el)));
        self.status_clear.replace(handle);
    }

    fn is_busy(&self) -> bool {
        self.button.disabled()
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            *self.original_button_html.borrow_mut() = Some(self.button.inner_html());
            self.button.set_disabled(true);
            self.button.set_inner_html(LOADING_BUTTON_HTML);
        } else {
            self.button.set_disabled(false);
            if let Some(html) = self.original_button_html.borrow_mut().take() {
                self.button.set_inner_html(&html);
            }
        }
    }

    fn reset_fields(&self) {
        self.form.reset();
    }
}

pub fn bind(controller: &Rc<Controller>) -> Result<(), DomError> {
    let env = &controller.env;
    let Some(form) = env.document.get_element_by_id(FORM_ID) else {
        return Ok(());
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| DomError::WrongType(FORM_ID))?;
    let button = form
        .query_selector("button[type=\"submit\"]")?
        .ok_or(DomError::Missing("contact submit button"))?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| DomError::WrongType("contact submit button"))?;

    let view = Rc::new(ContactView {
        form: form.clone(),
        status: env.document.get_element_by_id(STATUS_ID),
        button,
        original_button_html: RefCell::new(None),
        phase: Cell::new(SubmitPhase::Idle),
        scheduler: env.scheduler,
        status_clear: TaskSlot::new(),
    });
    let transport = SimulatedTransport { latency_ms: env.config.submit_latency_ms };
    let status_clear_ms = env.config.status_clear_ms;

    listen(&form, "submit", move |ev: Event| {
        ev.prevent_default();
        let raw = match view.read_fields() {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("contact form unreadable: {e}");
                return;
            }
        };
        let view = Rc::clone(&view);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = submit(raw, &transport, view.as_ref(), status_clear_ms).await;
            log::info!("contact submit finished: {outcome:?}");
        });
    })
}
