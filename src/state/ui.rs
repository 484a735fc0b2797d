#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::nav::NavState;
use crate::state::overlay::OverlayState;
use crate::state::theme::Theme;

/// Page-level UI state: theme, mobile nav, and the project overlay.
///
/// The DOM is a rendering of these fields; handlers mutate the state first
/// and then write the resulting classes and attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub nav: NavState,
    pub overlay: OverlayState,
}

/// What an Escape press closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EscapeEffect {
    pub nav_closed: bool,
    pub overlay_closed: bool,
}

impl EscapeEffect {
    pub fn is_noop(self) -> bool {
        !self.nav_closed && !self.overlay_closed
    }
}

impl UiState {
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    /// Escape closes every open surface and is a no-op otherwise.
    pub fn handle_escape(&mut self) -> EscapeEffect {
        EscapeEffect { nav_closed: self.nav.close(), overlay_closed: self.overlay.close() }
    }

    /// A click landed outside both the nav panel and its toggle.
    pub fn handle_outside_click(&mut self) -> bool {
        self.nav.close()
    }
}
