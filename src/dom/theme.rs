//! `#themeToggle` binding and the screen-reader notice.

use std::rc::Rc;

use web_sys::MouseEvent;

use super::controller::Controller;
use super::{DomError, Env, ReportJs, listen};
use crate::state::theme::Theme;
use crate::util::scheduler::Scheduler;

pub const TOGGLE_ID: &str = "themeToggle";

pub fn bind(controller: &Rc<Controller>) -> Result<(), DomError> {
    let Some(toggle) = controller.env.document.get_element_by_id(TOGGLE_ID) else {
        return Ok(());
    };
    let ctrl = Rc::clone(controller);
    listen(&toggle, "click", move |_: MouseEvent| ctrl.toggle_theme())
}

/// Append a polite live-region notice that removes itself.
pub(crate) fn announce(env: &Env, theme: Theme) {
    let notice = match env.document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            log::warn!("theme notice: {e:?}");
            return;
        }
    };
    notice.set_attribute("aria-live", "polite").report("theme notice aria-live");
    notice.set_class_name("sr-only");
    notice.set_text_content(Some(&theme.announcement()));
    env.body.append_child(&notice).report("theme notice append");

    env.scheduler
        .defer(env.config.theme_notice_ms, Box::new(move || notice.remove()));
}
