//! Keyboard focus containment for modal surfaces.

#[cfg(test)]
#[path = "focus_trap_test.rs"]
mod focus_trap_test;

/// Descendants considered tabbable inside a modal.
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Where focus must be moved when Tab is pressed inside a trap of `len`
/// focusable elements while element `active` has focus.
///
/// Returns `None` when the browser's default tab order should proceed.
pub fn wrap_target(len: usize, active: Option<usize>, shift: bool) -> Option<usize> {
    let last = len.checked_sub(1)?;
    match (active, shift) {
        (Some(0), true) => Some(last),
        (Some(idx), false) if idx == last => Some(0),
        _ => None,
    }
}
