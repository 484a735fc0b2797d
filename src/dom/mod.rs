//! Browser bindings: attach the page state models to the live DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`boot`] runs once when the WASM module starts. It builds the
//! [`controller::Controller`], then binds each page component independently;
//! a component whose markup is missing or broken is logged and skipped so
//! the rest of the page still gets its behavior. All listeners live for the
//! page lifetime.

pub mod contact;
pub mod controller;
pub mod enhance;
pub mod filter;
pub mod lifecycle;
pub mod nav;
pub mod observe;
pub mod overlay;
pub mod theme;

use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};

use crate::config::SiteConfig;
use crate::util::capability::Capabilities;
use crate::util::scheduler::TimeoutScheduler;
use controller::Controller;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("missing element: {0}")]
    Missing(&'static str),
    #[error("{0} has an unexpected element type")]
    WrongType(&'static str),
    #[error("javascript exception: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Log a failed DOM call instead of propagating it.
pub(crate) trait ReportJs {
    fn report(self, context: &str);
}

impl<T> ReportJs for Result<T, JsValue> {
    fn report(self, context: &str) {
        if let Err(e) = self {
            log::warn!("{context}: {e:?}");
        }
    }
}

/// Handles shared by every component binding.
pub struct Env {
    pub window: Window,
    pub document: Document,
    pub root: Element,
    pub body: HtmlElement,
    pub config: SiteConfig,
    pub caps: Capabilities,
    pub scheduler: TimeoutScheduler,
}

impl Env {
    pub fn detect() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let root = document.document_element().ok_or(DomError::Missing("<html>"))?;
        let body = document.body().ok_or(DomError::Missing("<body>"))?;
        let config = SiteConfig::load(&document);
        let caps = Capabilities::detect(&window);
        log::debug!("capabilities: {caps:?}");
        Ok(Self { window, document, root, body, config, caps, scheduler: TimeoutScheduler })
    }
}

/// Attach `handler` to `event` on `target` for the page lifetime.
pub(crate) fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub(crate) fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

pub(crate) fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            log::warn!("query {selector}: {e:?}");
            Vec::new()
        }
    }
}

pub(crate) fn as_html(element: &Element) -> Option<HtmlElement> {
    element.dyn_ref::<HtmlElement>().cloned()
}

pub(crate) fn set_style(element: &HtmlElement, name: &str, value: &str) {
    element.style().set_property(name, value).report(name);
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    element.class_list().toggle_with_force(class, on).report(class);
}

type Binding = fn(&Rc<Controller>) -> Result<(), DomError>;

/// Build the controller and bind every page component.
pub fn boot() -> Result<Rc<Controller>, DomError> {
    let env = Env::detect()?;
    lifecycle::install_error_handlers(&env)?;
    enhance::mark_document(&env);

    let controller = Controller::new(env)?;
    let bindings: [(&str, Binding); 12] = [
        ("theme", theme::bind),
        ("navigation", nav::bind),
        ("project overlay", overlay::bind),
        ("keyboard", controller::bind_escape),
        ("contact form", contact::bind),
        ("project filter", filter::bind),
        ("scroll reveal", observe::bind),
        ("hash links", enhance::bind_hash_links),
        ("form fields", enhance::bind_fields),
        ("contact copy", enhance::bind_contact_copy),
        ("resize", lifecycle::bind_resize),
        ("page lifecycle", lifecycle::bind),
    ];
    for (name, bind) in bindings {
        if let Err(e) = bind(&controller) {
            log::warn!("{name} binding skipped: {e}");
        }
    }
    Ok(controller)
}
