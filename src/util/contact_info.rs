//! Extraction of copyable contact details from list item text.

#[cfg(test)]
#[path = "contact_info_test.rs"]
mod contact_info_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})").expect("valid contact email regex")
});
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\+?\d[\d-]*)").expect("valid contact phone regex"));

/// Text to put on the clipboard for a contact entry: the first email
/// address if there is one, otherwise the first phone-like number.
pub fn copy_target(text: &str) -> Option<&str> {
    EMAIL_RE
        .find(text)
        .or_else(|| PHONE_RE.find(text))
        .map(|m| m.as_str())
}

/// Markup shown while the copied confirmation is visible: the first
/// occurrence of `target` in `html` is highlighted and suffixed.
pub fn copied_feedback(html: &str, target: &str) -> String {
    html.replacen(
        target,
        &format!("<strong style=\"color: var(--success);\">{target} (copied!)</strong>"),
        1,
    )
}
