//! The page controller: owns UI state and the DOM surfaces that render it.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::KeyboardEvent;

use super::nav::NavView;
use super::overlay::OverlayView;
use super::{DomError, Env, listen, select_all};
use crate::state::overlay::ProjectEntry;
use crate::state::theme::{self, LocalStorage, Theme};
use crate::state::ui::UiState;

/// Selector for project entries that open the detail overlay.
pub const PROJECT_SELECTOR: &str = ".project";

pub struct Controller {
    pub env: Env,
    ui: RefCell<UiState>,
    store: LocalStorage,
    nav: Option<NavView>,
    overlay: Option<OverlayView>,
}

impl Controller {
    pub fn new(env: Env) -> Result<Rc<Self>, DomError> {
        let store = LocalStorage;
        let theme = theme::load(&store, &env.config.theme_key);
        let nav = NavView::find(&env.document);
        let overlay = if select_all(&env.document, PROJECT_SELECTOR).is_empty() {
            None
        } else {
            Some(OverlayView::build(&env.document, &env.body)?)
        };

        let controller = Self { env, ui: RefCell::new(UiState::with_theme(theme)), store, nav, overlay };
        controller.render_theme(theme);
        Ok(Rc::new(controller))
    }

    pub(crate) fn nav(&self) -> Option<&NavView> {
        self.nav.as_ref()
    }

    pub(crate) fn overlay(&self) -> Option<&OverlayView> {
        self.overlay.as_ref()
    }

    // --- Theme ---

    pub fn toggle_theme(&self) {
        let current = self.ui.borrow().theme;
        let (next, saved) = theme::toggle(&self.store, &self.env.config.theme_key, current);
        if let Err(e) = saved {
            log::warn!("theme preference not saved: {e}");
        }
        self.ui.borrow_mut().theme = next;
        self.render_theme(next);
        let shown = Theme::from_light_class(self.env.root.class_list().contains(theme::LIGHT_CLASS));
        super::theme::announce(&self.env, shown);
    }

    fn render_theme(&self, theme: Theme) {
        super::set_class(&self.env.root, theme::LIGHT_CLASS, theme.has_light_class());
    }

    // --- Navigation ---

    pub fn toggle_nav(&self) {
        let state = {
            let mut ui = self.ui.borrow_mut();
            ui.nav.toggle();
            ui.nav
        };
        if let Some(nav) = &self.nav {
            nav.render(state, &self.env.body);
        }
    }

    /// Close the mobile nav; safe to call when it is already closed.
    pub fn close_nav(&self) {
        let closed = self.ui.borrow_mut().nav.close();
        if closed {
            self.render_nav();
        }
    }

    pub fn close_nav_on_outside_click(&self) {
        if self.ui.borrow_mut().handle_outside_click() {
            self.render_nav();
        }
    }

    fn render_nav(&self) {
        let state = self.ui.borrow().nav;
        if let Some(nav) = &self.nav {
            nav.render(state, &self.env.body);
        }
    }

    // --- Overlay ---

    pub fn open_overlay(&self, entry: ProjectEntry) {
        let Some(overlay) = &self.overlay else {
            return;
        };
        overlay.show(&entry);
        self.ui.borrow_mut().overlay.open(entry);
    }

    pub fn close_overlay(&self) {
        let closed = self.ui.borrow_mut().overlay.close();
        if closed {
            if let Some(overlay) = &self.overlay {
                overlay.hide();
            }
        }
    }

    /// The dialog closed itself (native cancel or `method="dialog"` submit).
    pub fn overlay_closed_natively(&self) {
        let mut ui = self.ui.borrow_mut();
        if let Some(entry) = ui.overlay.shown() {
            log::debug!("overlay for {:?} closed by the browser", entry.title);
        }
        ui.overlay.close();
    }

    // --- Keyboard ---

    pub fn escape(&self) {
        let effect = self.ui.borrow_mut().handle_escape();
        if effect.is_noop() {
            return;
        }
        if effect.nav_closed {
            self.render_nav();
        }
        if effect.overlay_closed {
            if let Some(overlay) = &self.overlay {
                overlay.hide();
            }
        }
    }
}

/// Document-level Escape handling for nav and overlay.
pub fn bind_escape(controller: &Rc<Controller>) -> Result<(), DomError> {
    let ctrl = Rc::clone(controller);
    listen(&controller.env.document, "keydown", move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            ctrl.escape();
        }
    })
}
