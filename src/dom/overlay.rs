//! Project detail overlay built on a native `<dialog>`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDialogElement, HtmlElement, KeyboardEvent, MouseEvent, Node};

use super::controller::{Controller, PROJECT_SELECTOR};
use super::{DomError, ReportJs, as_html, elements, listen, select_all, set_style};
use crate::state::overlay::{OVERLAY_HTML, ProjectEntry, is_activation_key};
use crate::util::focus_trap::{FOCUSABLE_SELECTOR, wrap_target};

pub struct OverlayView {
    dialog: HtmlDialogElement,
    title: Element,
    description: Element,
    tech: Element,
    close_button: Element,
    focusables: RefCell<Vec<HtmlElement>>,
}

fn slot(dialog: &HtmlDialogElement, selector: &'static str) -> Result<Element, DomError> {
    dialog.query_selector(selector)?.ok_or(DomError::Missing(selector))
}

impl OverlayView {
    /// Create the dialog and append it to `body`.
    pub fn build(document: &Document, body: &HtmlElement) -> Result<Self, DomError> {
        let dialog = document
            .create_element("dialog")?
            .dyn_into::<HtmlDialogElement>()
            .map_err(|_| DomError::WrongType("dialog"))?;
        dialog.set_class_name("card");
        set_style(&dialog, "max-width", "560px");
        set_style(&dialog, "width", "min(92%, 560px)");
        dialog.set_inner_html(OVERLAY_HTML);
        body.append_child(&dialog)?;

        Ok(Self {
            title: slot(&dialog, "#modalTitle")?,
            description: slot(&dialog, "#modalDesc")?,
            tech: slot(&dialog, "#modalTech")?,
            close_button: slot(&dialog, ".modal-close")?,
            focusables: RefCell::new(Vec::new()),
            dialog,
        })
    }

    pub fn show(&self, entry: &ProjectEntry) {
        self.title.set_text_content(Some(&entry.title));
        self.description.set_text_content(Some(&entry.description));
        self.tech.set_text_content(Some(&entry.tech));
        *self.focusables.borrow_mut() = self.collect_focusables();
        if !self.dialog.open() {
            self.dialog.show_modal().report("overlay showModal");
        }
    }

    pub fn hide(&self) {
        if self.dialog.open() {
            self.dialog.close();
        }
    }

    fn collect_focusables(&self) -> Vec<HtmlElement> {
        match self.dialog.query_selector_all(FOCUSABLE_SELECTOR) {
            Ok(list) => elements(&list).iter().filter_map(as_html).collect(),
            Err(e) => {
                log::warn!("overlay focusables: {e:?}");
                Vec::new()
            }
        }
    }

    /// Keep Tab/Shift+Tab cycling inside the dialog.
    fn trap_tab(&self, ev: &KeyboardEvent, active: Option<Element>) {
        let focusables = self.focusables.borrow();
        let active_idx = active.and_then(|active| {
            focusables
                .iter()
                .position(|el| el.is_same_node(Some(active.as_ref())))
        });
        if let Some(target) = wrap_target(focusables.len(), active_idx, ev.shift_key()) {
            ev.prevent_default();
            if let Some(el) = focusables.get(target) {
                el.focus().report("overlay focus");
            }
        }
    }
}

fn entry_from(element: &Element) -> ProjectEntry {
    ProjectEntry::from_attributes(
        element.get_attribute("data-title"),
        element.get_attribute("data-desc"),
        element.get_attribute("data-tech"),
        element.get_attribute("data-category"),
    )
}

pub fn bind(controller: &Rc<Controller>) -> Result<(), DomError> {
    let Some(overlay) = controller.overlay() else {
        return Ok(());
    };

    for project in select_all(&controller.env.document, PROJECT_SELECTOR) {
        let ctrl = Rc::clone(controller);
        let el = project.clone();
        listen(&project, "click", move |_: MouseEvent| ctrl.open_overlay(entry_from(&el)))?;

        let ctrl = Rc::clone(controller);
        let el = project.clone();
        listen(&project, "keypress", move |ev: KeyboardEvent| {
            if is_activation_key(&ev.key()) {
                ev.prevent_default();
                ctrl.open_overlay(entry_from(&el));
            }
        })?;
    }

    let ctrl = Rc::clone(controller);
    listen(&overlay.close_button, "click", move |_: MouseEvent| ctrl.close_overlay())?;

    let ctrl = Rc::clone(controller);
    listen(&overlay.dialog, "click", move |ev: MouseEvent| {
        let on_backdrop = ctrl.overlay().is_some_and(|overlay| {
            let dialog: &Node = overlay.dialog.as_ref();
            ev.target()
                .as_ref()
                .and_then(|t| t.dyn_ref::<Node>())
                .is_some_and(|target| dialog.is_same_node(Some(target)))
        });
        if on_backdrop {
            ctrl.close_overlay();
        }
    })?;

    let ctrl = Rc::clone(controller);
    listen(&overlay.dialog, "keydown", move |ev: KeyboardEvent| {
        if ev.key() != "Tab" {
            return;
        }
        if let Some(overlay) = ctrl.overlay() {
            overlay.trap_tab(&ev, ctrl.env.document.active_element());
        }
    })?;

    let ctrl = Rc::clone(controller);
    listen(&overlay.dialog, "close", move |_: web_sys::Event| ctrl.overlay_closed_natively())
}
