//! Mobile navigation: `#menuToggle` and the `#nav` panel.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, Node};

use super::controller::Controller;
use super::{DomError, ReportJs, elements, listen, set_class, set_style};
use crate::state::nav::{ACTIVE_CLASS, NavState};

pub const TOGGLE_ID: &str = "menuToggle";
pub const PANEL_ID: &str = "nav";

pub struct NavView {
    toggle: Element,
    panel: Element,
}

impl NavView {
    /// Both the toggle and the panel must be present.
    pub fn find(document: &Document) -> Option<Self> {
        let toggle = document.get_element_by_id(TOGGLE_ID)?;
        let panel = document.get_element_by_id(PANEL_ID)?;
        Some(Self { toggle, panel })
    }

    pub fn render(&self, state: NavState, body: &HtmlElement) {
        set_class(&self.panel, ACTIVE_CLASS, state.is_open());
        self.toggle.set_inner_html(state.icon_html());
        self.toggle
            .set_attribute("aria-expanded", state.aria_expanded())
            .report("menu toggle aria-expanded");
        set_style(body, "overflow", state.body_overflow());
    }

    /// Whether `target` is inside the panel or the toggle.
    pub fn contains(&self, target: Option<&Node>) -> bool {
        self.panel.contains(target) || self.toggle.contains(target)
    }
}

pub fn bind(controller: &Rc<Controller>) -> Result<(), DomError> {
    let Some(nav) = controller.nav() else {
        return Ok(());
    };

    let ctrl = Rc::clone(controller);
    listen(&nav.toggle, "click", move |_: MouseEvent| ctrl.toggle_nav())?;

    for link in elements(&nav.panel.query_selector_all("a")?) {
        let ctrl = Rc::clone(controller);
        listen(&link, "click", move |_: MouseEvent| ctrl.close_nav())?;
    }

    let ctrl = Rc::clone(controller);
    listen(&controller.env.document, "click", move |ev: MouseEvent| {
        let target = ev.target();
        let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
        let inside = ctrl.nav().is_some_and(|nav| nav.contains(node));
        if !inside {
            ctrl.close_nav_on_outside_click();
        }
    })
}
