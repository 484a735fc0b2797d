//! IntersectionObserver-driven behavior: scroll reveals, skill bars, and
//! lazy images.
//!
//! Which of these run is decided once from the detected capabilities:
//! reduced motion (or no observer) skips the animations entirely, and a
//! missing observer promotes every lazy image up front.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::controller::Controller;
use super::{DomError, Env, ReportJs, as_html, select_all, set_class, set_style};
use crate::state::reveal::{
    DEFERRED_SRC_ATTR, FADE_IN_CLASS, LAZY_IMAGE_SELECTOR, OneShot, REVEAL_SELECTOR, SKILL_BAR_SELECTOR, SkillBar,
    VISIBLE_CLASS,
};
use crate::util::capability::{ImageLoading, Motion};
use crate::util::scheduler::Scheduler;

/// Build an observer that calls `on_enter` with the index of each tracked
/// element entering the viewport. Targets are unobserved after one call.
fn observe_once<F>(
    targets: Vec<Element>,
    options: Option<&IntersectionObserverInit>,
    mut on_enter: F,
) -> Result<(), DomError>
where
    F: FnMut(usize, &Element) + 'static,
{
    if targets.is_empty() {
        return Ok(());
    }
    let tracked = targets.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(idx) = tracked.iter().position(|el| el.is_same_node(Some(target.as_ref()))) {
                    on_enter(idx, &target);
                }
                observer.unobserve(&target);
            }
        },
    );
    let observer = match options {
        Some(options) => IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?,
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
    };
    callback.forget();
    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}

fn bind_reveal(env: &Env) -> Result<(), DomError> {
    // The overlay dialog carries `card` for styling but is never revealed.
    let targets: Vec<Element> = select_all(&env.document, REVEAL_SELECTOR)
        .into_iter()
        .filter(|el| el.tag_name() != "DIALOG")
        .collect();
    for el in &targets {
        set_class(el, FADE_IN_CLASS, true);
    }
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(env.config.reveal_threshold));
    options.set_root_margin(&env.config.reveal_root_margin);

    let mut shots = OneShot::new(targets.len());
    observe_once(targets, Some(&options), move |idx, el| {
        if shots.fire(idx) {
            set_class(el, VISIBLE_CLASS, true);
        }
    })
}

fn bind_skill_bars(env: &Env) -> Result<(), DomError> {
    let html: Vec<HtmlElement> = select_all(&env.document, SKILL_BAR_SELECTOR)
        .iter()
        .filter_map(as_html)
        .collect();
    let targets: Vec<Element> = html.iter().map(|el| el.clone().into()).collect();
    let bars: Rc<Vec<(HtmlElement, RefCell<SkillBar>)>> =
        Rc::new(html.into_iter().map(|el| (el, RefCell::new(SkillBar::default()))).collect());
    let scheduler = env.scheduler;
    let delay_ms = env.config.skill_bar_delay_ms;

    observe_once(targets, None, move |idx, _| {
        let Some((el, bar)) = bars.get(idx) else {
            return;
        };
        let width = el.style().get_property_value("width").unwrap_or_default();
        let Some(collapsed) = bar.borrow_mut().enter(&width) else {
            return;
        };
        set_style(el, "width", collapsed);

        let bars = Rc::clone(&bars);
        scheduler.defer(
            delay_ms,
            Box::new(move || {
                if let Some((el, bar)) = bars.get(idx) {
                    if let Some(target) = bar.borrow_mut().fill() {
                        set_style(el, "width", &target);
                    }
                }
            }),
        );
    })
}

fn promote_image(img: &Element) {
    if let Some(src) = img.get_attribute(DEFERRED_SRC_ATTR) {
        img.set_attribute("src", &src).report("lazy image src");
        img.remove_attribute(DEFERRED_SRC_ATTR).report("lazy image data-src");
    }
}

fn bind_lazy_images(env: &Env) -> Result<(), DomError> {
    let images = select_all(&env.document, LAZY_IMAGE_SELECTOR);
    match env.caps.image_loading() {
        ImageLoading::OnIntersect => observe_once(images, None, |_, img| promote_image(img)),
        ImageLoading::Eager => {
            images.iter().for_each(promote_image);
            Ok(())
        }
    }
}

pub fn bind(controller: &Rc<Controller>) -> Result<(), DomError> {
    let env = &controller.env;
    bind_lazy_images(env)?;
    if env.caps.motion() == Motion::Reduced {
        log::debug!("reduced motion: scroll animations skipped");
        return Ok(());
    }
    bind_reveal(env)?;
    bind_skill_bars(env)
}
