//! Smaller page affordances: document marker classes, footer year, hash-link
//! scrolling, required-field feedback, textarea auto-resize, and copyable
//! contact details.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent,
    ScrollBehavior, ScrollToOptions,
};

use super::controller::Controller;
use super::{DomError, Env, as_html, listen, select_all, set_class, set_style};
use crate::state::field::{FieldMark, REQUIRED_FIELD_SELECTOR};
use crate::util::clipboard::copy_text;
use crate::util::contact_info::{copied_feedback, copy_target};
use crate::util::scheduler::{Scheduler, TaskSlot, TimeoutScheduler};
use crate::util::scroll::{HashLink, hash_link, scroll_top};

pub const JS_ENABLED_CLASS: &str = "js-enabled";
pub const BACKDROP_FILTER_CLASS: &str = "supports-backdrop-filter";
pub const YEAR_SELECTOR: &str = "#year";
pub const HEADER_SELECTOR: &str = ".site-header";
pub const HASH_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const CONTACT_ITEM_SELECTOR: &str = ".contact li";

/// Root marker classes and the footer year.
pub fn mark_document(env: &Env) {
    set_class(&env.root, JS_ENABLED_CLASS, true);
    if web_sys::css::supports_with_value("backdrop-filter", "blur(10px)").unwrap_or(false) {
        set_class(&env.root, BACKDROP_FILTER_CLASS, true);
    }

    let year = js_sys::Date::new_0().get_full_year().to_string();
    for el in select_all(&env.document, YEAR_SELECTOR) {
        el.set_text_content(Some(&year));
    }
}

pub fn bind_hash_links(controller: &Rc<Controller>) -> Result<(), DomError> {
    for link in select_all(&controller.env.document, HASH_LINK_SELECTOR) {
        let ctrl = Rc::clone(controller);
        let el = link.clone();
        listen(&link, "click", move |ev: MouseEvent| {
            let env = &ctrl.env;
            let Some(href) = el.get_attribute("href") else {
                return;
            };
            let Some(link) = hash_link(&href) else {
                return;
            };
            ev.prevent_default();
            let HashLink::Scroll(id) = link else {
                return;
            };
            let Some(target) = env.document.get_element_by_id(id).and_then(|t| as_html(&t)) else {
                return;
            };

            let header_height = env
                .document
                .query_selector(HEADER_SELECTOR)
                .unwrap_or(None)
                .and_then(|h| as_html(&h))
                .map_or(0.0, |h| f64::from(h.offset_height()));
            let options = ScrollToOptions::new();
            options.set_top(scroll_top(f64::from(target.offset_top()), header_height, env.config.scroll_gap_px));
            options.set_behavior(ScrollBehavior::Smooth);
            env.window.scroll_to_with_scroll_to_options(&options);

            ctrl.close_nav();
        })?;
    }
    Ok(())
}

fn native_validity(field: &Element) -> bool {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.check_validity()
    } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
        textarea.check_validity()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.check_validity()
    } else {
        true
    }
}

fn render_mark(field: &Element, mark: FieldMark) {
    if let Some((add, remove)) = mark.classes() {
        set_class(field, remove, false);
        set_class(field, add, true);
    }
}

/// Required-field feedback and textarea auto-resize.
pub fn bind_fields(controller: &Rc<Controller>) -> Result<(), DomError> {
    let document = &controller.env.document;

    for field in select_all(document, REQUIRED_FIELD_SELECTOR) {
        let mark = Rc::new(Cell::new(FieldMark::default()));

        let (el, state) = (field.clone(), Rc::clone(&mark));
        listen(&field, "blur", move |_: Event| {
            let next = state.get().on_blur(native_validity(&el));
            state.set(next);
            render_mark(&el, next);
        })?;

        let (el, state) = (field.clone(), mark);
        listen(&field, "input", move |_: Event| {
            let current = state.get();
            if current != FieldMark::Invalid {
                return;
            }
            let next = current.on_input(native_validity(&el));
            state.set(next);
            render_mark(&el, next);
        })?;
    }

    for textarea in select_all(document, "textarea").iter().filter_map(as_html) {
        let el = textarea.clone();
        listen(&textarea, "input", move |_: Event| {
            set_style(&el, "height", "auto");
            set_style(&el, "height", &format!("{}px", el.scroll_height()));
        })?;
    }
    Ok(())
}

struct CopyItem {
    element: HtmlElement,
    original_html: String,
    target: String,
    restore: TaskSlot<TimeoutScheduler>,
}

pub fn bind_contact_copy(controller: &Rc<Controller>) -> Result<(), DomError> {
    let env = &controller.env;
    let strategy = env.caps.clipboard();

    for element in select_all(&env.document, CONTACT_ITEM_SELECTOR).iter().filter_map(as_html) {
        let text = element.text_content().unwrap_or_default();
        let Some(target) = copy_target(&text).map(str::to_owned) else {
            continue;
        };
        set_style(&element, "cursor", "pointer");
        element.set_title("Klik untuk copy");

        let item = Rc::new(CopyItem {
            original_html: element.inner_html(),
            element: element.clone(),
            target,
            restore: TaskSlot::new(),
        });
        let scheduler = env.scheduler;
        let feedback_ms = env.config.copy_feedback_ms;

        listen(&element, "click", move |_: MouseEvent| {
            let item = Rc::clone(&item);
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = copy_text(strategy, &item.target).await {
                    log::warn!("copy failed: {e}");
                    return;
                }
                item.element
                    .set_inner_html(&copied_feedback(&item.original_html, &item.target));
                let restore = Rc::clone(&item);
                let handle = scheduler.schedule(
                    feedback_ms,
                    Box::new(move || restore.element.set_inner_html(&restore.original_html)),
                );
                item.restore.replace(handle);
            });
        })?;
    }
    Ok(())
}
