//! Page-level hooks: global error listeners, the loaded signal, the dev
//! banner, service worker registration, and resize handling.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CustomEvent, CustomEventInit, ErrorEvent, Event, EventTarget, PromiseRejectionEvent};

use super::contact::{STATUS_ID, render_status};
use super::controller::Controller;
use super::{DomError, Env, listen};
use crate::state::contact::{FormStatus, is_connectivity_failure};
use crate::util::capability::development_banner;
use crate::util::debounce::debounce;
use crate::util::signal::{PageSignal, SignalTarget, WEBSITE_LOADED};

/// Log uncaught errors and rejections; surface connectivity failures on the
/// contact form status line.
pub fn install_error_handlers(env: &Env) -> Result<(), DomError> {
    let document = env.document.clone();
    listen(&env.window, "error", move |ev: ErrorEvent| {
        let message = ev.message();
        log::error!("uncaught error: {message} ({}:{})", ev.filename(), ev.lineno());
        if is_connectivity_failure(&message) {
            if let Some(status) = document.get_element_by_id(STATUS_ID) {
                render_status(&status, &FormStatus::connectivity());
            }
        }
    })?;

    listen(&env.window, "unhandledrejection", |ev: PromiseRejectionEvent| {
        log::error!("unhandled rejection: {:?}", ev.reason());
        ev.prevent_default();
    })
}

fn dispatch(env: &Env, signal: PageSignal, detail: &JsValue) -> Result<(), DomError> {
    let init = CustomEventInit::new();
    init.set_detail(detail);
    let event = CustomEvent::new_with_event_init_dict(signal.name, &init)?;
    let target: &EventTarget = match signal.target {
        SignalTarget::Window => env.window.as_ref(),
        SignalTarget::Document => env.document.as_ref(),
    };
    target.dispatch_event(&event)?;
    Ok(())
}

fn announce_loaded(env: &Env) -> Result<(), DomError> {
    log::info!("portfolio initialized");
    let detail = js_sys::Object::new();
    js_sys::Reflect::set(&detail, &JsValue::from_str("timestamp"), &JsValue::from_f64(js_sys::Date::now()))?;
    dispatch(env, WEBSITE_LOADED, &detail)
}

fn register_service_worker(env: &Env) {
    let container = env.window.navigator().service_worker();
    let path = env.config.service_worker_path.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(container.register(&path)).await {
            Ok(registration) => log::info!("service worker registered: {registration:?}"),
            Err(e) => log::warn!("service worker registration failed: {e:?}"),
        }
    });
}

pub fn bind(controller: &Rc<Controller>) -> Result<(), DomError> {
    let env = &controller.env;

    if env.document.ready_state() == "loading" {
        let ctrl = Rc::clone(controller);
        listen(&env.document, "DOMContentLoaded", move |_: Event| {
            if let Err(e) = announce_loaded(&ctrl.env) {
                log::warn!("{} not dispatched: {e}", WEBSITE_LOADED.name);
            }
        })?;
    } else {
        announce_loaded(env)?;
    }

    let hostname = env.window.location().hostname().unwrap_or_default();
    if let Some(banner) = development_banner(&hostname) {
        log::info!("{banner}");
    }

    if env.caps.registers_service_worker() {
        if env.document.ready_state() == "complete" {
            register_service_worker(env);
        } else {
            let ctrl = Rc::clone(controller);
            listen(&env.window, "load", move |_: Event| register_service_worker(&ctrl.env))?;
        }
    }
    Ok(())
}

/// Close the mobile nav once the viewport grows past the breakpoint.
pub fn bind_resize(controller: &Rc<Controller>) -> Result<(), DomError> {
    let env = &controller.env;
    let breakpoint = env.config.nav_breakpoint_px;
    let ctrl = Rc::clone(controller);
    let on_settled = debounce(env.scheduler, env.config.resize_debounce_ms, move |()| {
        let width = ctrl.env.window.inner_width().map_or(0.0, |w| w.as_f64().unwrap_or(0.0));
        if width > breakpoint {
            ctrl.close_nav();
        }
    });
    listen(&env.window, "resize", move |_: Event| on_settled.call(()))
}
