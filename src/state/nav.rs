//! Mobile navigation open/closed state and its rendering.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Class on `#nav` while the panel is shown.
pub const ACTIVE_CLASS: &str = "active";

const ICON_OPEN: &str = "<i class=\"fas fa-times\"></i>";
const ICON_CLOSED: &str = "<i class=\"fas fa-bars\"></i>";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the panel; returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the panel. Returns `false` when it was already closed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Icon markup for the toggle button.
    pub fn icon_html(self) -> &'static str {
        if self.open { ICON_OPEN } else { ICON_CLOSED }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// `body.style.overflow` value; an open panel locks page scroll.
    pub fn body_overflow(self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}
